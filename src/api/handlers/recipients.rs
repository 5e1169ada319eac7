//! Handlers for the recipient registry.

use axum::{Json, extract::State, http::HeaderMap};
use serde_json::json;
use validator::Validate;

use crate::api::dto::recipients::{
    AddRecipientsRequest, AddRecipientsResponse, DeleteIdsRequest, DeleteResponse, RecipientItem,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_meta::base_url_from_headers;

/// Lists recipients with their tracking links, newest first.
///
/// # Endpoint
///
/// `GET /api/recipients`
///
/// Links are built from `PUBLIC_BASE_URL` when configured, otherwise from
/// the request `Host` header.
///
/// # Errors
///
/// Returns 400 Bad Request if no base URL can be determined.
pub async fn list_recipients_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<RecipientItem>>, AppError> {
    let base_url = match &state.settings.public_base_url {
        Some(base) => base.clone(),
        None => base_url_from_headers(&headers)
            .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?,
    };

    let items = state
        .registry_service
        .list_recipients()
        .await?
        .into_iter()
        .map(|r| RecipientItem::from_recipient(r, &base_url))
        .collect();

    Ok(Json(items))
}

/// Imports recipients from a pasted list.
///
/// # Endpoint
///
/// `POST /api/recipients`
///
/// # Request Body
///
/// ```json
/// { "emails": "alice@example.com, bob@example.com\ncarol@example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "ok", "added": 3, "skipped": 0, "errors": [] }
/// ```
///
/// Invalid and duplicate addresses do not fail the request; they are
/// counted in `skipped` and described in `errors`.
///
/// # Errors
///
/// Returns 400 Bad Request if `emails` is missing or empty.
pub async fn add_recipients_handler(
    State(state): State<AppState>,
    Json(payload): Json<AddRecipientsRequest>,
) -> Result<Json<AddRecipientsResponse>, AppError> {
    payload.validate()?;

    let report = state.registry_service.bulk_add(&payload.emails).await;

    Ok(Json(AddRecipientsResponse {
        status: "ok",
        added: report.added,
        skipped: report.skipped,
        errors: report.errors,
    }))
}

/// Deletes recipients by id. Their recorded clicks are kept.
///
/// # Endpoint
///
/// `POST /api/recipients/delete`
///
/// # Errors
///
/// Returns 400 Bad Request (`no_ids`) if `ids` is missing or empty.
pub async fn delete_recipients_handler(
    State(state): State<AppState>,
    Json(payload): Json<DeleteIdsRequest>,
) -> Result<Json<DeleteResponse>, AppError> {
    let ids = payload.ids.unwrap_or_default();
    let deleted = state.registry_service.delete_recipients(&ids).await?;

    Ok(Json(DeleteResponse::ok(deleted)))
}
