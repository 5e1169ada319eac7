//! Campaign analytics service.

use std::sync::Arc;

use crate::domain::analytics::{
    AggregateReport, AnalyticsSnapshot, CampaignCounts, CampaignTotals, aggregate,
};
use crate::domain::repositories::{ClickRepository, RecipientRepository};
use crate::error::AppError;

/// Computes click metrics from the current registry and ledger contents.
///
/// Nothing is cached; every call reads fresh counts.
pub struct AnalyticsService<R: RecipientRepository, C: ClickRepository> {
    recipients: Arc<R>,
    clicks: Arc<C>,
}

impl<R: RecipientRepository, C: ClickRepository> AnalyticsService<R, C> {
    /// Creates a new analytics service.
    pub fn new(recipients: Arc<R>, clicks: Arc<C>) -> Self {
        Self { recipients, clicks }
    }

    /// Returns the snapshot for the running campaign.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn snapshot(&self) -> Result<AnalyticsSnapshot, AppError> {
        let total_links = self.recipients.count().await?;
        let counts = self.clicks.counts().await?;

        Ok(AnalyticsSnapshot::compute(CampaignCounts {
            total_links,
            total_clicks: counts.total_clicks,
            unique_clicked_links: counts.unique_clicked_links,
        }))
    }

    /// Combines caller-supplied campaign totals.
    pub fn aggregate(&self, campaigns: &[CampaignTotals]) -> Result<AggregateReport, AppError> {
        aggregate(campaigns)
    }
}
