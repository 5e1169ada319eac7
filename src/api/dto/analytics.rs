//! DTOs for the analytics endpoints.

use serde::Deserialize;

use crate::domain::analytics::CampaignTotals;

/// Campaign totals to combine into one report.
#[derive(Debug, Deserialize)]
pub struct AggregateRequest {
    #[serde(default)]
    pub campaigns: Vec<CampaignTotals>,
}
