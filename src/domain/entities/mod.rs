//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Recipient`] - A campaign target holding one tracking token
//! - [`ClickEvent`] - One recorded visit to a tracking link
//!
//! Creation inputs are separate structs (`NewRecipient`, `NewClickEvent`): ids
//! and timestamps are always assigned by the store.

pub mod click_event;
pub mod recipient;

pub use click_event::{ClickEvent, NewClickEvent};
pub use recipient::{NewRecipient, Recipient};
