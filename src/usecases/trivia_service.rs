//! Core trivia cycle: pick an ID -> fetch its page -> select a fact ->
//! compose -> publish -> journal the outcome.
//!
//! One call to `run_once` is one full cycle. Disqualified compositions and
//! pages without trivia are journaled, not treated as errors; only
//! infrastructure failures surface as `Err`.

use crate::domain::tweet::{self, Composition};
use crate::domain::{CatalogId, DomainError, Tweet};
use crate::ports::{CatalogPort, JournalPort, PublisherPort, TriviaGateway};
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::{info, warn};

/// Trivia service. Coordinates the catalog, the page gateway, the publisher
/// and the journal for one cycle at a time.
pub struct TriviaService {
    catalog: Arc<dyn CatalogPort>,
    gateway: Arc<dyn TriviaGateway>,
    publisher: Arc<dyn PublisherPort>,
    journal: Arc<dyn JournalPort>,
    /// Public site root used for the canonical link inside tweets.
    site_url: String,
}

impl TriviaService {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        gateway: Arc<dyn TriviaGateway>,
        publisher: Arc<dyn PublisherPort>,
        journal: Arc<dyn JournalPort>,
        site_url: String,
    ) -> Self {
        Self {
            catalog,
            gateway,
            publisher,
            journal,
            site_url,
        }
    }

    /// Run one full cycle. Returns the outcome; `Err` only on
    /// infrastructure failures (fetch, publish, journal).
    pub async fn run_once(&self) -> Result<CycleOutcome, DomainError> {
        let id = self.catalog.pick_id().await?;
        info!(id = %id, kind = ?id.kind, "cycle started");

        let page = self.gateway.fetch_page(&id).await?;
        if page.facts.is_empty() {
            warn!(id = %id, "no trivia found on page");
            self.journal.record_no_trivia(&id).await?;
            return Ok(CycleOutcome::NoTrivia(id));
        }

        // Pick one candidate; the rng must not be held across an await.
        let selected = {
            let mut rng = rand::thread_rng();
            page.facts.choose(&mut rng).cloned().unwrap_or_default()
        };
        let fact = tweet::clean_fact(&selected);
        if fact.chars().count() <= 1 {
            return self.skip(id, "fact empty after cleanup".to_string()).await;
        }

        let Some(title) = page.title else {
            return self.skip(id, "page title missing".to_string()).await;
        };

        let target_url = format!(
            "{}/{}",
            self.site_url.trim_end_matches('/'),
            id.canonical_path()
        );

        match tweet::compose(&title, &fact, &target_url) {
            Composition::Ready(tweet) => {
                self.publisher.publish(&tweet).await?;
                self.journal.record_published(&tweet).await?;
                info!(
                    id = %id,
                    chars = tweet.text.chars().count(),
                    "cycle published"
                );
                Ok(CycleOutcome::Published(tweet))
            }
            disqualified => {
                let reason = disqualified.skip_reason().unwrap_or_default();
                self.skip(id, reason).await
            }
        }
    }

    async fn skip(&self, id: CatalogId, reason: String) -> Result<CycleOutcome, DomainError> {
        info!(id = %id, reason = %reason, "composition disqualified");
        self.journal.record_skipped(&id, &reason).await?;
        Ok(CycleOutcome::Skipped { id, reason })
    }
}

/// Result of a single cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    /// Tweet composed, published and journaled.
    Published(Tweet),
    /// Page carried no candidate facts; the ID was journaled.
    NoTrivia(CatalogId),
    /// A candidate was selected but the composition was disqualified.
    Skipped { id: CatalogId, reason: String },
}

impl CycleOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, CycleOutcome::Published(_))
    }
}
