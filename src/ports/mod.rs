//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application calls into infrastructure. The inbound
//! side is the binary's CLI dispatch in `main`.

pub mod outbound;

pub use outbound::{CatalogPort, JournalPort, PublisherPort, TriviaGateway};
