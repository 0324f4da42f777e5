//! IMDb page gateway: HTTP fetch plus selector-based fact extraction.

pub mod client;
pub mod extract;

pub use client::ImdbGateway;
