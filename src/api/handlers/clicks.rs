//! Handlers for the click ledger.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::clicks::ClickListResponse;
use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::recipients::{DeleteIdsRequest, DeleteResponse};
use crate::domain::repositories::ClickFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Lists recorded clicks, newest first.
///
/// # Endpoint
///
/// `GET /api/clicks`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 25, 10..=1000)
///
/// Without either parameter the whole ledger is returned.
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn list_clicks_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ClickListResponse>, AppError> {
    let window = params
        .validate_window()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let filter = window.map(|w| w.filter()).unwrap_or_else(ClickFilter::all);

    let items = state.ledger_service.list_clicks(filter).await?;

    Ok(Json(ClickListResponse {
        items,
        page: window.map(|w| w.page),
        page_size: window.map(|w| w.page_size),
    }))
}

/// Deletes clicks by id.
///
/// # Endpoint
///
/// `POST /api/clicks/delete`
///
/// A missing or empty `ids` list succeeds with `deleted: 0`.
pub async fn delete_clicks_handler(
    State(state): State<AppState>,
    Json(payload): Json<DeleteIdsRequest>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state
        .ledger_service
        .delete_clicks(payload.ids.as_deref())
        .await?;

    Ok(Json(DeleteResponse::ok(deleted)))
}
