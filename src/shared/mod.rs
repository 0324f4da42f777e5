//! Shared infrastructure: configuration.

pub mod config;
