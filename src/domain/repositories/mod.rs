//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! with `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`RecipientRepository`] - Recipients and their tracking tokens
//! - [`ClickRepository`] - Append-only click ledger

pub mod click_repository;
pub mod recipient_repository;

pub use click_repository::{AttributedClick, ClickCounts, ClickFilter, ClickRepository};
pub use recipient_repository::{CreateRecipientOutcome, RecipientRepository};

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use recipient_repository::MockRecipientRepository;
