//! Stock movement module.
//!
//! This crate contains the rules applied around posting a stock movement:
//! quantity parsing and bounds, pre-submit validation against the product,
//! and the projected stock level with its threshold alert. Pure logic only
//! (no IO, no HTTP); the backend stays the source of truth.

pub mod draft;
pub mod movement;
pub mod projection;
pub mod quantity;

pub use draft::{MovementDraft, MovementError, ValidatedMovement};
pub use movement::{
    Movement, MovementFilter, MovementRecord, MovementType, NewMovement, sort_most_recent_first,
};
pub use projection::{StockAlert, StockProjection};
pub use quantity::{MAX_QUANTITY, MIN_QUANTITY, Quantity};
