//! Client metadata extraction from HTTP requests.

use axum::http::{HeaderMap, header};
use std::net::SocketAddr;

/// User agent recorded when the request carries none.
pub const UNKNOWN_USER_AGENT: &str = "unknown";

/// Determines the client IP for a tracking request.
///
/// Uses the socket peer address unless `behind_proxy` is set, in which case the
/// first `X-Forwarded-For` hop (or `X-Real-IP`) wins. Forwarding headers are
/// ignored otherwise since any client can set them.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        let real_ip = || {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        if let Some(ip) = forwarded.or_else(real_ip) {
            return ip.to_string();
        }
    }

    peer.ip().to_string()
}

/// Returns the `User-Agent` header, or [`UNKNOWN_USER_AGENT`].
pub fn user_agent(headers: &HeaderMap) -> String {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(UNKNOWN_USER_AGENT)
        .to_string()
}

/// Derives the public base URL (`scheme://host[:port]`) from request headers.
///
/// Honors `X-Forwarded-Proto` for the scheme and falls back to `http`.
/// Returns `None` when the `Host` header is missing or not valid UTF-8.
pub fn base_url_from_headers(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(header::HOST)?.to_str().ok()?;

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .filter(|v| *v == "https" || *v == "http")
        .unwrap_or("http");

    Some(format!("{}://{}", scheme, host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> SocketAddr {
        "192.0.2.10:50000".parse().unwrap()
    }

    #[test]
    fn test_client_ip_uses_peer_by_default() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.5"));

        assert_eq!(client_ip(&headers, peer(), false), "192.0.2.10");
    }

    #[test]
    fn test_client_ip_behind_proxy_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.5, 10.0.0.1"),
        );

        assert_eq!(client_ip(&headers, peer(), true), "203.0.113.5");
    }

    #[test]
    fn test_client_ip_behind_proxy_real_ip_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.7"));

        assert_eq!(client_ip(&headers, peer(), true), "198.51.100.7");
    }

    #[test]
    fn test_client_ip_behind_proxy_without_headers() {
        assert_eq!(client_ip(&HeaderMap::new(), peer(), true), "192.0.2.10");
    }

    #[test]
    fn test_user_agent_default() {
        assert_eq!(user_agent(&HeaderMap::new()), "unknown");

        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));
        assert_eq!(user_agent(&headers), "Mozilla/5.0");
    }

    #[test]
    fn test_base_url_from_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("phish.local:8080"));
        assert_eq!(
            base_url_from_headers(&headers).as_deref(),
            Some("http://phish.local:8080")
        );

        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert_eq!(
            base_url_from_headers(&headers).as_deref(),
            Some("https://phish.local:8080")
        );
    }

    #[test]
    fn test_base_url_missing_host() {
        assert!(base_url_from_headers(&HeaderMap::new()).is_none());
    }
}
