//! `livraria-core`: shared building blocks for the bookstore client.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP).

pub mod entity;
pub mod error;
pub mod id;
pub mod input;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AdjustmentId, AuthorId, CategoryId, MovementId, ProductId, UserId};
