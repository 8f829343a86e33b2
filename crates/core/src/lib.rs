//! `eventgate-core`: shared building blocks for the ticketing dashboard.
//!
//! This crate contains **pure domain** primitives (no IO, no async).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::DomainError;
pub use id::{EventId, TicketId, UserId};
