//! Domain layer: entities, repository contracts and the analytics engine.
//!
//! Independent of infrastructure and presentation concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Recipients and click events
//! - [`repositories`] - Storage trait definitions
//! - [`analytics`] - Pure click analytics over counts
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler receives `GET /track/{token}`
//! 2. [`crate::application::services::LedgerService`] resolves the token through
//!    the registry and appends a click with the resolved recipient (or none)
//! 3. [`crate::application::services::AnalyticsService`] recomputes metrics from
//!    current counts on every request

pub mod analytics;
pub mod entities;
pub mod repositories;
