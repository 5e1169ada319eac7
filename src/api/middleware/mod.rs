//! HTTP middleware for request processing and protection.
//!
//! Provides access logging and rate limiting.

pub mod access_log;
pub mod rate_limit;
