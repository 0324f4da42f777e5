//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Trivia gateway error: {0}")]
    Gateway(String),

    #[error("Publisher error: {0}")]
    Publisher(String),

    #[error("Journal error: {0}")]
    Journal(String),
}
