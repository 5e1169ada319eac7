//! Combined-log-style access logging.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::{net::SocketAddr, time::Instant};

use crate::state::AppState;
use crate::utils::request_meta::client_ip;

/// Writes one line per request.
///
/// Paths matching a configured quiet prefix are logged at `DEBUG`, all others
/// at `INFO`.
///
/// # Example Logs
///
/// ```text
/// INFO 203.0.113.5 - - "GET /track/3f9a0c1d2e4b5a67 HTTP/1.1" 307 - "-" "Mozilla/5.0" 3ms
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();

    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| client_ip(req.headers(), *addr, state.settings.behind_proxy))
        .unwrap_or_else(|| "-".to_string());

    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let version = format!("{:?}", req.version());

    let ua = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let referer = req
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let ms = start.elapsed().as_millis();

    if state.settings.is_quiet_path(&path) {
        tracing::debug!(
            r#"{ip} - - "{method} {path} {version}" {status} - "{referer}" "{ua}" {ms}ms"#
        );
    } else {
        tracing::info!(
            r#"{ip} - - "{method} {path} {version}" {status} - "{referer}" "{ua}" {ms}ms"#
        );
    }

    response
}
