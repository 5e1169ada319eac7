//! Recipient entity: a campaign target bound to exactly one tracking token.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered campaign target.
///
/// `email` is stored lowercase and is unique; `token` is unique across all
/// recipients and never reassigned once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Recipient {
    pub id: i64,
    pub email: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

impl Recipient {
    /// Creates a new Recipient instance.
    pub fn new(id: i64, email: String, token: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            token,
            created_at,
        }
    }

    /// Builds the public tracking link for this recipient under `base_url`.
    pub fn tracking_link(&self, base_url: &str) -> String {
        format!("{}/track/{}", base_url.trim_end_matches('/'), self.token)
    }
}

/// Input data for registering a recipient.
///
/// The email must already be validated and normalized; the token is a fresh
/// candidate that the store may reject as taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipient {
    pub email: String,
    pub token: String,
}
