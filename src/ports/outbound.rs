//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{CatalogId, DomainError, TriviaPage, Tweet};

/// Source of catalog IDs. One pick per cycle.
#[async_trait::async_trait]
pub trait CatalogPort: Send + Sync {
    /// Pick one random catalog ID. Implementations decide the source
    /// (list files, fully random generation).
    async fn pick_id(&self) -> Result<CatalogId, DomainError>;
}

/// Trivia page gateway. Fetch the page for an ID and extract its content.
#[async_trait::async_trait]
pub trait TriviaGateway: Send + Sync {
    /// Fetch the trivia-bearing page for `id` and return the extracted
    /// title and candidate facts. An empty fact list is not an error.
    async fn fetch_page(&self, id: &CatalogId) -> Result<TriviaPage, DomainError>;
}

/// Publisher port. Post one composed message to the platform.
#[async_trait::async_trait]
pub trait PublisherPort: Send + Sync {
    /// Publish the tweet. Returns only after the platform acknowledged it.
    async fn publish(&self, tweet: &Tweet) -> Result<(), DomainError>;
}

/// Journal port. Append-only flat-file records of cycle outcomes.
#[async_trait::async_trait]
pub trait JournalPort: Send + Sync {
    /// Record an ID whose page yielded no candidate facts.
    async fn record_no_trivia(&self, id: &CatalogId) -> Result<(), DomainError>;

    /// Record a successfully published tweet.
    async fn record_published(&self, tweet: &Tweet) -> Result<(), DomainError>;

    /// Record a disqualified composition with its reason.
    async fn record_skipped(&self, id: &CatalogId, reason: &str) -> Result<(), DomainError>;
}
