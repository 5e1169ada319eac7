//! Handlers for campaign analytics.

use axum::{Json, extract::State};

use crate::api::dto::analytics::AggregateRequest;
use crate::domain::analytics::{AggregateReport, AnalyticsSnapshot};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current campaign metrics.
///
/// # Endpoint
///
/// `GET /api/analytics`
///
/// # Response
///
/// ```json
/// {
///   "total_links": 100,
///   "total_clicks": 25,
///   "unique_clicked_links": 20,
///   "non_clicked": 80,
///   "click_ratio": 0.25,
///   "click_percentage": 25.0
/// }
/// ```
pub async fn analytics_handler(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsSnapshot>, AppError> {
    Ok(Json(state.analytics_service.snapshot().await?))
}

/// Combines link and click totals of several campaigns.
///
/// # Endpoint
///
/// `POST /api/analytics/aggregate`
///
/// # Errors
///
/// Returns 400 Bad Request if a campaign has negative totals or the sums
/// overflow.
pub async fn aggregate_handler(
    State(state): State<AppState>,
    Json(payload): Json<AggregateRequest>,
) -> Result<Json<AggregateReport>, AppError> {
    Ok(Json(state.analytics_service.aggregate(&payload.campaigns)?))
}
