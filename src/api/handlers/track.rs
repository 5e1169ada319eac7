//! Handler for tracking link visits.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::HeaderMap,
    response::Redirect,
};
use std::net::SocketAddr;

use crate::state::AppState;
use crate::utils::request_meta::{client_ip, user_agent};

/// Records a visit and sends the visitor on.
///
/// # Endpoint
///
/// `GET /track/{token}`
///
/// # Request Flow
///
/// 1. Determine client IP (peer address, or forwarding headers behind a proxy)
/// 2. Read `User-Agent` (`"unknown"` when absent)
/// 3. Append the click to the ledger, attributed when the token is known
/// 4. Return 307 Temporary Redirect to the configured landing URL
///
/// The redirect never depends on the token: unknown tokens and storage
/// failures look the same to the visitor. Storage failures are logged.
pub async fn track_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Redirect {
    let ip = client_ip(&headers, addr, state.settings.behind_proxy);
    let ua = user_agent(&headers);

    if let Err(e) = state.ledger_service.record_click(&token, &ip, &ua).await {
        tracing::error!(error = %e, token = %token, ip = %ip, "Failed to record click");
    }

    Redirect::temporary(&state.settings.redirect_url)
}
