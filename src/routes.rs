//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /track/{token}` - Tracking link: record click, redirect (public)
//! - `GET  /health`        - Health check (public)
//! - `/api/*`              - Admin JSON API
//!
//! # Middleware
//!
//! - **Access log** - One line per request, quiet paths at DEBUG
//! - **Rate limiting** - Per-IP token bucket on `/api`; `/track` is never limited
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, track_handler};
use crate::api::middleware::{access_log, rate_limit};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and middleware without path normalization.
///
/// When `state.settings.behind_proxy` is set, rate limiting and logging read
/// the client IP from forwarding headers; enable it only behind a trusted
/// reverse proxy.
///
/// Tracking links are not rate limited; every visit reaches the ledger.
pub fn router(state: AppState) -> Router {
    let api_router = rate_limit::apply(
        api::routes::api_routes(),
        rate_limit::API_QUOTA,
        state.settings.behind_proxy,
    );

    Router::new()
        .route("/track/{token}", get(track_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            access_log::layer,
        ))
        .with_state(state)
}
