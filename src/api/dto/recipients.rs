//! DTOs for the recipient registry endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Recipient;

/// Pasted list of addresses, separated by newlines and/or commas.
#[derive(Debug, Deserialize, Validate)]
pub struct AddRecipientsRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Список email пуст"))]
    pub emails: String,
}

/// Result of a bulk import.
#[derive(Debug, Serialize)]
pub struct AddRecipientsResponse {
    pub status: &'static str,
    pub added: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

/// Recipient with its rendered tracking link.
#[derive(Debug, Serialize)]
pub struct RecipientItem {
    pub id: i64,
    pub email: String,
    pub token: String,
    pub tracking_link: String,
    pub created_at: DateTime<Utc>,
}

impl RecipientItem {
    pub fn from_recipient(recipient: Recipient, base_url: &str) -> Self {
        let tracking_link = recipient.tracking_link(base_url);

        Self {
            id: recipient.id,
            email: recipient.email,
            token: recipient.token,
            tracking_link,
            created_at: recipient.created_at,
        }
    }
}

/// Selection of ids for bulk deletion. Shared by recipients and clicks.
#[derive(Debug, Deserialize)]
pub struct DeleteIdsRequest {
    #[serde(default)]
    pub ids: Option<Vec<i64>>,
}

/// Result of a bulk deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
    pub deleted: u64,
}

impl DeleteResponse {
    pub fn ok(deleted: u64) -> Self {
        Self {
            status: "ok",
            deleted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_emails_fails_validation() {
        let req: AddRecipientsRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_whitespace_emails_passes_validation() {
        let req: AddRecipientsRequest = serde_json::from_str(r#"{"emails": " \n"}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_delete_ids_optional() {
        let req: DeleteIdsRequest = serde_json::from_str("{}").unwrap();
        assert!(req.ids.is_none());

        let req: DeleteIdsRequest = serde_json::from_str(r#"{"ids": [1, 2]}"#).unwrap();
        assert_eq!(req.ids, Some(vec![1, 2]));
    }
}
