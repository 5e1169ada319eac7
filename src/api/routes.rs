//! API route configuration.

use crate::api::handlers::{
    add_recipients_handler, aggregate_handler, analytics_handler, delete_clicks_handler,
    delete_recipients_handler, list_clicks_handler, list_recipients_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Admin JSON API, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /recipients`          - List recipients with tracking links
/// - `POST /recipients`          - Bulk import from a pasted list
/// - `POST /recipients/delete`   - Delete recipients by id
/// - `GET  /clicks`              - List clicks (optionally paginated)
/// - `POST /clicks/delete`       - Delete clicks by id
/// - `GET  /analytics`           - Current campaign metrics
/// - `POST /analytics/aggregate` - Combine totals of several campaigns
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recipients",
            get(list_recipients_handler).post(add_recipients_handler),
        )
        .route("/recipients/delete", post(delete_recipients_handler))
        .route("/clicks", get(list_clicks_handler))
        .route("/clicks/delete", post(delete_clicks_handler))
        .route("/analytics", get(analytics_handler))
        .route("/analytics/aggregate", post(aggregate_handler))
}
