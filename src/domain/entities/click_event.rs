//! Click event entity: one recorded visit to a tracking link.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A recorded click on a tracking link.
///
/// Immutable once written. `recipient_id` is the result of resolving `token`
/// at insert time and is never re-resolved; it may point at a recipient that
/// has since been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ClickEvent {
    pub id: i64,
    #[serde(rename = "timestamp")]
    pub clicked_at: DateTime<Utc>,
    pub ip: String,
    pub user_agent: String,
    pub token: String,
    pub recipient_id: Option<i64>,
}

impl ClickEvent {
    /// Creates a new ClickEvent instance.
    pub fn new(
        id: i64,
        clicked_at: DateTime<Utc>,
        ip: String,
        user_agent: String,
        token: String,
        recipient_id: Option<i64>,
    ) -> Self {
        Self {
            id,
            clicked_at,
            ip,
            user_agent,
            token,
            recipient_id,
        }
    }

    /// Returns true if the click was attributed to a recipient when recorded.
    pub fn is_attributed(&self) -> bool {
        self.recipient_id.is_some()
    }
}

/// Input data for appending a click to the ledger.
///
/// Carries no timestamp: the store stamps it at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClickEvent {
    pub ip: String,
    pub user_agent: String,
    pub token: String,
    pub recipient_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_attribution() {
        let now = Utc::now();
        let attributed = ClickEvent::new(
            1,
            now,
            "10.0.0.1".to_string(),
            "Mozilla/5.0".to_string(),
            "abc".to_string(),
            Some(7),
        );
        let unmatched = ClickEvent::new(
            2,
            now,
            "10.0.0.1".to_string(),
            "unknown".to_string(),
            "forged".to_string(),
            None,
        );

        assert!(attributed.is_attributed());
        assert!(!unmatched.is_attributed());
    }

    #[test]
    fn test_serializes_timestamp_field() {
        let click = ClickEvent::new(
            3,
            Utc::now(),
            "127.0.0.1".to_string(),
            "curl/8.0".to_string(),
            "tok".to_string(),
            None,
        );

        let json = serde_json::to_value(&click).unwrap();
        assert!(json.get("timestamp").is_some());
        assert!(json.get("clicked_at").is_none());
        assert!(json["recipient_id"].is_null());
    }
}
