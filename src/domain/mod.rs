//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod tweet;

pub use entities::{CatalogId, IdKind, TriviaPage, Tweet};
pub use errors::DomainError;
pub use tweet::Composition;
