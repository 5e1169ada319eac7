//! Repository trait for the recipient registry.

use crate::domain::entities::{NewRecipient, Recipient};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of a single registration attempt.
///
/// Uniqueness of email and token is decided by the store at write time, so a
/// rejected insert is reported as a value rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateRecipientOutcome {
    Created(Recipient),
    /// Another recipient already holds this (normalized) email.
    DuplicateEmail,
    /// The token candidate is already issued; retry with a fresh one.
    TokenTaken,
}

/// Repository interface for recipients and their tracking tokens.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecipientRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_recipient.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipientRepository: Send + Sync {
    /// Inserts a recipient in one atomic statement.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Unique violations are
    /// reported through [`CreateRecipientOutcome`], not as errors.
    async fn create(
        &self,
        new_recipient: NewRecipient,
    ) -> Result<CreateRecipientOutcome, AppError>;

    /// Looks up the recipient id bound to `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_id_by_token(&self, token: &str) -> Result<Option<i64>, AppError>;

    /// Lists all recipients, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Recipient>, AppError>;

    /// Deletes recipients by id. Clicks referencing them are left untouched.
    ///
    /// Returns the number of rows removed; unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_many(&self, ids: &[i64]) -> Result<u64, AppError>;

    /// Counts registered recipients (issued tracking links).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
