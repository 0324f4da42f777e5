//! Adapter implementations of the outbound ports.
//!
//! Each submodule wraps one piece of infrastructure: ID catalogs, the
//! trivia page gateway, tweet publishing, and flat-file journaling.

pub mod catalog;
pub mod imdb;
pub mod persistence;
pub mod twitter;
