//! Rate limiting middleware using token bucket algorithm.
//!
//! Limits are keyed by client IP. Behind a trusted proxy the key comes from
//! `X-Forwarded-For` / `X-Real-IP` / `Forwarded`, otherwise from the socket
//! peer address.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Token bucket parameters.
#[derive(Debug, Clone, Copy)]
pub struct Quota {
    /// Seconds between replenished tokens.
    pub replenish_seconds: u64,
    pub burst: u32,
}

/// Admin API.
pub const API_QUOTA: Quota = Quota {
    replenish_seconds: 1,
    burst: 30,
};

/// Applies a per-IP rate limit to every route of `router`.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn apply(router: Router<AppState>, quota: Quota, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        router.layer(proxy_layer(quota))
    } else {
        router.layer(peer_layer(quota))
    }
}

fn peer_layer(
    quota: Quota,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(quota.replenish_seconds)
            .burst_size(quota.burst)
            .finish()
            .expect("rate limit quota must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

fn proxy_layer(
    quota: Quota,
) -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(quota.replenish_seconds)
            .burst_size(quota.burst)
            .finish()
            .expect("rate limit quota must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
