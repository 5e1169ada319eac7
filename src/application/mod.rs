//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations used by the
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::registry_service::RegistryService`] - Recipients and tracking tokens
//! - [`services::ledger_service::LedgerService`] - Click recording and listing
//! - [`services::analytics_service::AnalyticsService`] - Click metrics

pub mod services;
