//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analytics;
pub mod clicks;
pub mod health;
pub mod recipients;
pub mod track;

pub use analytics::{aggregate_handler, analytics_handler};
pub use clicks::{delete_clicks_handler, list_clicks_handler};
pub use health::health_handler;
pub use recipients::{add_recipients_handler, delete_recipients_handler, list_recipients_handler};
pub use track::track_handler;
