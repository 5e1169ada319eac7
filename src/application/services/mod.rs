//! Business logic services for the application layer.

pub mod analytics_service;
pub mod ledger_service;
pub mod registry_service;

pub use analytics_service::AnalyticsService;
pub use ledger_service::LedgerService;
pub use registry_service::{BulkImportReport, MAX_TOKEN_ATTEMPTS, RegistryService};
