//! Continuous pipeline: run one cycle, sleep, repeat.
//!
//! A published cycle is followed by a random pause inside the configured
//! window; anything else retries after a short fixed delay. Runs until the
//! process is stopped.

use crate::domain::DomainError;
use crate::usecases::trivia_service::{CycleOutcome, TriviaService};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Scheduler. Drives trivia cycles with randomized pacing so the account
/// never posts on a fixed beat.
pub struct Scheduler {
    service: Arc<TriviaService>,
    /// Bounds of the random sleep after a published cycle.
    reload_min: Duration,
    reload_max: Duration,
    /// Fixed delay before retrying after a skip or an error.
    retry_delay: Duration,
}

impl Scheduler {
    pub fn new(
        service: Arc<TriviaService>,
        reload_min: Duration,
        reload_max: Duration,
        retry_delay: Duration,
    ) -> Self {
        Self {
            service,
            reload_min,
            reload_max,
            retry_delay,
        }
    }

    /// Run cycles until the process is stopped. Cycle errors are logged
    /// and retried, never fatal.
    pub async fn run_loop(&self) -> Result<(), DomainError> {
        info!(
            reload_min_secs = self.reload_min.as_secs(),
            reload_max_secs = self.reload_max.as_secs(),
            retry_secs = self.retry_delay.as_secs(),
            "scheduler started"
        );

        loop {
            let result = self.service.run_once().await;
            let delay = self.next_delay(&result);
            info!(sleep_secs = delay.as_secs(), "cycle complete; sleeping");
            tokio::time::sleep(delay).await;
        }
    }

    /// Delay before the next cycle: a random pause inside the reload window
    /// after a publish, the fixed retry delay after anything else.
    fn next_delay(&self, result: &Result<CycleOutcome, DomainError>) -> Duration {
        match result {
            Ok(outcome) if outcome.is_published() => {
                random_delay_in(self.reload_min, self.reload_max)
            }
            Ok(_) => self.retry_delay,
            Err(e) => {
                warn!(error = %e, "cycle failed; retrying");
                self.retry_delay
            }
        }
    }
}

/// Random duration inside `[min, max]`, tolerant of swapped bounds.
fn random_delay_in(min: Duration, max: Duration) -> Duration {
    let lo = min.min(max).as_secs();
    let hi = min.max(max).as_secs();
    let secs = rand::thread_rng().gen_range(lo..=hi);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CatalogId, IdKind, Tweet, TriviaPage};
    use crate::ports::{CatalogPort, JournalPort, PublisherPort, TriviaGateway};

    // The scheduler only consults the service inside `run_loop`; delay
    // mapping never calls it, so inert ports are enough.
    struct NoopCatalog;

    #[async_trait::async_trait]
    impl CatalogPort for NoopCatalog {
        async fn pick_id(&self) -> Result<CatalogId, DomainError> {
            Ok(CatalogId::new(IdKind::Title, "tt0113277"))
        }
    }

    struct NoopGateway;

    #[async_trait::async_trait]
    impl TriviaGateway for NoopGateway {
        async fn fetch_page(&self, _id: &CatalogId) -> Result<TriviaPage, DomainError> {
            Ok(TriviaPage::default())
        }
    }

    struct NoopPublisher;

    #[async_trait::async_trait]
    impl PublisherPort for NoopPublisher {
        async fn publish(&self, _tweet: &Tweet) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct NoopJournal;

    #[async_trait::async_trait]
    impl JournalPort for NoopJournal {
        async fn record_no_trivia(&self, _id: &CatalogId) -> Result<(), DomainError> {
            Ok(())
        }

        async fn record_published(&self, _tweet: &Tweet) -> Result<(), DomainError> {
            Ok(())
        }

        async fn record_skipped(&self, _id: &CatalogId, _reason: &str) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn scheduler_with(min_secs: u64, max_secs: u64, retry_secs: u64) -> Scheduler {
        let service = TriviaService::new(
            Arc::new(NoopCatalog),
            Arc::new(NoopGateway),
            Arc::new(NoopPublisher),
            Arc::new(NoopJournal),
            "https://www.imdb.com".to_string(),
        );
        Scheduler::new(
            Arc::new(service),
            Duration::from_secs(min_secs),
            Duration::from_secs(max_secs),
            Duration::from_secs(retry_secs),
        )
    }

    #[test]
    fn test_published_outcome_draws_from_reload_window() {
        let scheduler = scheduler_with(60, 1800, 3);
        let published = Ok(CycleOutcome::Published(Tweet {
            text: "Heat: ten nights of filming.".to_string(),
        }));
        for _ in 0..50 {
            let d = scheduler.next_delay(&published);
            assert!(d >= Duration::from_secs(60), "below window: {:?}", d);
            assert!(d <= Duration::from_secs(1800), "above window: {:?}", d);
        }
    }

    #[test]
    fn test_disqualified_outcomes_use_retry_delay() {
        let scheduler = scheduler_with(60, 1800, 3);
        let skipped = Ok(CycleOutcome::Skipped {
            id: CatalogId::new(IdKind::Title, "tt0113277"),
            reason: "too long (141 chars)".to_string(),
        });
        let no_trivia = Ok(CycleOutcome::NoTrivia(CatalogId::new(
            IdKind::Person,
            "nm0000199",
        )));

        assert_eq!(scheduler.next_delay(&skipped), Duration::from_secs(3));
        assert_eq!(scheduler.next_delay(&no_trivia), Duration::from_secs(3));
    }

    #[test]
    fn test_cycle_error_uses_retry_delay() {
        let scheduler = scheduler_with(60, 1800, 3);
        let failed = Err(DomainError::Gateway("connection reset".to_string()));

        assert_eq!(scheduler.next_delay(&failed), Duration::from_secs(3));
    }

    #[test]
    fn test_random_delay_stays_in_window() {
        let min = Duration::from_secs(60);
        let max = Duration::from_secs(1800);
        for _ in 0..100 {
            let d = random_delay_in(min, max);
            assert!(d >= min, "below window: {:?}", d);
            assert!(d <= max, "above window: {:?}", d);
        }
    }

    #[test]
    fn test_random_delay_tolerates_swapped_bounds() {
        let d = random_delay_in(Duration::from_secs(10), Duration::from_secs(5));
        assert!(d >= Duration::from_secs(5));
        assert!(d <= Duration::from_secs(10));
    }

    #[test]
    fn test_random_delay_degenerate_window() {
        let d = random_delay_in(Duration::from_secs(7), Duration::from_secs(7));
        assert_eq!(d, Duration::from_secs(7));
    }
}
