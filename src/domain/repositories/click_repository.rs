//! Repository trait for the click ledger.

use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::error::AppError;
use async_trait::async_trait;
use serde::Serialize;

/// A click together with the email of the recipient it was attributed to.
///
/// `email` is `None` for unmatched clicks and for clicks whose recipient has
/// been deleted since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributedClick {
    #[serde(flatten)]
    pub click: ClickEvent,
    pub email: Option<String>,
}

/// Window over the ledger. The default filter covers every click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickFilter {
    pub offset: i64,
    pub limit: Option<i64>,
}

impl ClickFilter {
    /// Creates a filter returning every click.
    pub fn all() -> Self {
        Self::default()
    }

    /// Creates a filter for one page.
    pub fn page(offset: i64, limit: i64) -> Self {
        Self {
            offset,
            limit: Some(limit),
        }
    }
}

/// Per-ledger counts consumed by the analytics engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct ClickCounts {
    pub total_clicks: i64,
    /// Distinct recipients with at least one attributed click, deleted
    /// recipients included.
    pub unique_clicked_links: i64,
}

/// Repository interface for the append-only click ledger.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_click.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click. The timestamp is assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record(&self, new_click: NewClickEvent) -> Result<ClickEvent, AppError>;

    /// Lists clicks newest first (descending id).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, filter: ClickFilter) -> Result<Vec<AttributedClick>, AppError>;

    /// Deletes clicks by id and returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_many(&self, ids: &[i64]) -> Result<u64, AppError>;

    /// Counts all clicks and the distinct attributed recipients.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn counts(&self) -> Result<ClickCounts, AppError>;
}
