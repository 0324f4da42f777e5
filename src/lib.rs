//! trivia-bot: random movie trivia fetched, composed and tweeted, with
//! Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
