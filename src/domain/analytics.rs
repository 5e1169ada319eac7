//! Campaign click analytics.
//!
//! Pure functions over counts supplied by the registry and the ledger. Nothing
//! here touches storage and nothing is cached: callers recompute on every query.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Raw counts for one campaign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignCounts {
    /// Number of issued tracking links (registered recipients).
    pub total_links: i64,
    /// Number of recorded clicks, repeats included.
    pub total_clicks: i64,
    /// Number of links with at least one attributed click.
    pub unique_clicked_links: i64,
}

/// Derived campaign metrics. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    pub total_links: i64,
    pub total_clicks: i64,
    pub unique_clicked_links: i64,
    /// `total_links - unique_clicked_links`. Negative when clicks are still
    /// attributed to recipients that were deleted afterwards.
    pub non_clicked: i64,
    /// Clicks per link, two decimals. `0.0` when there are no links.
    pub click_ratio: f64,
    /// Clicks per link as a percentage, two decimals. Exceeds 100 on repeat clicks.
    pub click_percentage: f64,
}

impl AnalyticsSnapshot {
    /// Computes the snapshot for one campaign.
    pub fn compute(counts: CampaignCounts) -> Self {
        let (click_ratio, click_percentage) =
            ratio_and_percentage(counts.total_links, counts.total_clicks);

        Self {
            total_links: counts.total_links,
            total_clicks: counts.total_clicks,
            unique_clicked_links: counts.unique_clicked_links,
            non_clicked: counts.total_links - counts.unique_clicked_links,
            click_ratio,
            click_percentage,
        }
    }
}

/// Link and click totals of a single campaign, as fed to [`aggregate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignTotals {
    #[serde(default)]
    pub total_links: i64,
    #[serde(default)]
    pub total_clicks: i64,
}

/// Metrics across several campaigns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateReport {
    pub campaign_count: usize,
    pub total_links: i64,
    pub total_clicks: i64,
    pub overall_ratio: f64,
    pub overall_percentage: f64,
}

/// Sums links and clicks over all campaigns, then applies the ratio formulas
/// to the sums. Per-campaign ratios are never averaged.
///
/// # Errors
///
/// Returns a validation error if a campaign has negative totals or the sums
/// do not fit in `i64`.
pub fn aggregate(campaigns: &[CampaignTotals]) -> Result<AggregateReport, AppError> {
    let mut total_links = 0i64;
    let mut total_clicks = 0i64;

    for (index, c) in campaigns.iter().enumerate() {
        if c.total_links < 0 || c.total_clicks < 0 {
            return Err(AppError::bad_request(
                "Значения не могут быть отрицательными",
                json!({ "campaign": index }),
            ));
        }

        total_links = total_links
            .checked_add(c.total_links)
            .ok_or_else(|| sum_overflow(index))?;
        total_clicks = total_clicks
            .checked_add(c.total_clicks)
            .ok_or_else(|| sum_overflow(index))?;
    }

    let (overall_ratio, overall_percentage) = ratio_and_percentage(total_links, total_clicks);

    Ok(AggregateReport {
        campaign_count: campaigns.len(),
        total_links,
        total_clicks,
        overall_ratio,
        overall_percentage,
    })
}

fn sum_overflow(index: usize) -> AppError {
    AppError::bad_request("Слишком большие значения", json!({ "campaign": index }))
}

/// Returns `(ratio, percentage)`, both rounded to two decimals.
///
/// Zero links report zero for both. The percentage is derived from the
/// unrounded ratio and is not clamped.
fn ratio_and_percentage(total_links: i64, total_clicks: i64) -> (f64, f64) {
    if total_links == 0 {
        return (0.0, 0.0);
    }

    let ratio = total_clicks as f64 / total_links as f64;
    (round2(ratio), round2(ratio * 100.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
