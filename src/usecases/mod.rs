//! Application use cases. Orchestrate domain logic via ports.

pub mod scheduler;
pub mod trivia_service;

pub use scheduler::Scheduler;
pub use trivia_service::{CycleOutcome, TriviaService};
