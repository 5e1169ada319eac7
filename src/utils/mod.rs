//! Helpers shared across layers.
//!
//! - [`email`] - Email list grammar, validation and normalization
//! - [`token_generator`] - Tracking token generation
//! - [`db_error`] - Unique-violation classification
//! - [`request_meta`] - Client IP, user agent and base URL from requests

pub mod db_error;
pub mod email;
pub mod request_meta;
pub mod token_generator;
