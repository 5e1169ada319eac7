//! Click ledger service.

use std::sync::Arc;

use crate::application::services::RegistryService;
use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::domain::repositories::{
    AttributedClick, ClickFilter, ClickRepository, RecipientRepository,
};
use crate::error::AppError;

/// Append-only log of tracking-link visits.
///
/// Every visit is stored, including repeats and visits with unknown tokens.
/// Attribution happens once, at record time, through the registry.
pub struct LedgerService<C: ClickRepository, R: RecipientRepository> {
    repository: Arc<C>,
    registry: Arc<RegistryService<R>>,
}

impl<C: ClickRepository, R: RecipientRepository> LedgerService<C, R> {
    /// Creates a new ledger service.
    pub fn new(repository: Arc<C>, registry: Arc<RegistryService<R>>) -> Self {
        Self {
            repository,
            registry,
        }
    }

    /// Records one visit of a tracking link.
    ///
    /// The token is stored verbatim. `recipient_id` is set when the token
    /// resolves to a registered recipient, otherwise the click is kept
    /// unattributed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_click(
        &self,
        token: &str,
        ip: &str,
        user_agent: &str,
    ) -> Result<ClickEvent, AppError> {
        let recipient_id = self.registry.resolve(token).await?;

        let click = self
            .repository
            .record(NewClickEvent {
                ip: ip.to_string(),
                user_agent: user_agent.to_string(),
                token: token.to_string(),
                recipient_id,
            })
            .await?;

        let attributed = if click.is_attributed() { "true" } else { "false" };
        metrics::counter!("clicks_recorded_total", "attributed" => attributed).increment(1);

        tracing::info!(
            click_id = click.id,
            recipient_id = ?click.recipient_id,
            ip = %click.ip,
            "Click recorded"
        );

        Ok(click)
    }

    /// Lists clicks newest first, each joined with the recipient's current
    /// email when the recipient still exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_clicks(&self, filter: ClickFilter) -> Result<Vec<AttributedClick>, AppError> {
        self.repository.list(filter).await
    }

    /// Deletes clicks by id and returns the number removed.
    ///
    /// A missing or empty id list is a no-op that reports zero deletions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_clicks(&self, ids: Option<&[i64]>) -> Result<u64, AppError> {
        let ids = match ids {
            Some(ids) if !ids.is_empty() => ids,
            _ => return Ok(0),
        };

        let deleted = self.repository.delete_many(ids).await?;
        tracing::info!(requested = ids.len(), deleted, "Clicks deleted");

        Ok(deleted)
    }
}
