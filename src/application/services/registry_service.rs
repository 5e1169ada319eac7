//! Recipient registry: issues tracking tokens and resolves them back.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use crate::domain::entities::{NewRecipient, Recipient};
use crate::domain::repositories::{CreateRecipientOutcome, RecipientRepository};
use crate::error::AppError;
use crate::utils::email::{is_valid_email, normalize_email, split_candidates};
use crate::utils::token_generator::generate_token;

/// Maximum number of token candidates tried per recipient.
pub const MAX_TOKEN_ATTEMPTS: usize = 10;

/// Outcome of a bulk import. Failed items are counted in `skipped` and
/// described in `errors`, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkImportReport {
    pub added: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

/// Service owning the recipient registry.
///
/// Each recipient is identified by a lowercase email and holds exactly one
/// tracking token. Tokens are unique and never reassigned.
pub struct RegistryService<R: RecipientRepository> {
    repository: Arc<R>,
}

impl<R: RecipientRepository> RegistryService<R> {
    /// Creates a new registry service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers one recipient and issues its tracking token.
    ///
    /// The email is validated, lowercased and inserted with a fresh token.
    /// A token collision reported by the store triggers a new candidate, up to
    /// [`MAX_TOKEN_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is malformed.
    /// Returns [`AppError::Duplicate`] if the email is already registered.
    /// Returns [`AppError::TokenGeneration`] if every token candidate collided.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_recipient(&self, email: &str) -> Result<Recipient, AppError> {
        let raw = email.trim();

        if !is_valid_email(raw) {
            return Err(AppError::bad_request(
                format!("Неверный формат: {}", raw),
                json!({ "email": raw }),
            ));
        }

        let normalized = normalize_email(raw);

        for attempt in 1..=MAX_TOKEN_ATTEMPTS {
            let new_recipient = NewRecipient {
                email: normalized.clone(),
                token: generate_token(&normalized),
            };

            match self.repository.create(new_recipient).await? {
                CreateRecipientOutcome::Created(recipient) => {
                    tracing::debug!(id = recipient.id, email = %recipient.email, "Recipient added");
                    return Ok(recipient);
                }
                CreateRecipientOutcome::DuplicateEmail => {
                    return Err(AppError::duplicate(
                        format!("Дубликат: {}", raw),
                        json!({ "email": normalized }),
                    ));
                }
                CreateRecipientOutcome::TokenTaken => {
                    tracing::warn!(attempt, "Tracking token collision, retrying");
                }
            }
        }

        tracing::error!(email = %normalized, "Tracking token attempts exhausted");

        Err(AppError::token_generation(
            format!("Не удалось сгенерировать токен: {}", raw),
            json!({ "email": normalized, "attempts": MAX_TOKEN_ATTEMPTS }),
        ))
    }

    /// Imports a pasted list of addresses.
    ///
    /// The text is split on newlines, then on commas; see
    /// [`split_candidates`]. Every candidate is processed independently.
    pub async fn bulk_add(&self, text: &str) -> BulkImportReport {
        self.bulk_add_candidates(split_candidates(text)).await
    }

    /// Imports an already split list of candidate addresses.
    ///
    /// A failing item never aborts the batch: it is counted as skipped and its
    /// message is appended to the report.
    pub async fn bulk_add_candidates(&self, candidates: Vec<String>) -> BulkImportReport {
        let mut report = BulkImportReport::default();

        for candidate in candidates {
            match self.add_recipient(&candidate).await {
                Ok(_) => {
                    report.added += 1;
                    metrics::counter!("recipients_added_total").increment(1);
                }
                Err(err) => {
                    report.skipped += 1;
                    metrics::counter!("recipients_skipped_total", "reason" => skip_reason(&err))
                        .increment(1);
                    report.errors.push(err.to_string());
                }
            }
        }

        tracing::info!(
            added = report.added,
            skipped = report.skipped,
            "Recipient import finished"
        );

        report
    }

    /// Deletes recipients by id.
    ///
    /// Clicks that reference deleted recipients keep their `recipient_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NoIds`] if `ids` is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_recipients(&self, ids: &[i64]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Err(AppError::no_ids("Не выбраны email", json!({ "field": "ids" })));
        }

        let deleted = self.repository.delete_many(ids).await?;
        tracing::info!(requested = ids.len(), deleted, "Recipients deleted");

        Ok(deleted)
    }

    /// Resolves a tracking token to its recipient id.
    ///
    /// Unknown tokens (stale or forged links) resolve to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, token: &str) -> Result<Option<i64>, AppError> {
        self.repository.find_id_by_token(token).await
    }

    /// Lists all recipients, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_recipients(&self) -> Result<Vec<Recipient>, AppError> {
        self.repository.list().await
    }

    /// Counts registered recipients.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_recipients(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn skip_reason(err: &AppError) -> &'static str {
    match err {
        AppError::Validation { .. } => "validation",
        AppError::Duplicate { .. } => "duplicate",
        AppError::TokenGeneration { .. } => "token_generation",
        _ => "error",
    }
}
