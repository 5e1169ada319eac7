//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx. Rows
//! are decoded by column name through `sqlx::FromRow`.
//!
//! # Repositories
//!
//! - [`PgRecipientRepository`] - Recipients and tracking tokens
//! - [`PgClickRepository`] - Click ledger and click counts

pub mod pg_click_repository;
pub mod pg_recipient_repository;

pub use pg_click_repository::PgClickRepository;
pub use pg_recipient_repository::PgRecipientRepository;
