//! Mock publisher for running without API credentials.
//!
//! Logs the composed tweet instead of posting it. Useful for dry runs and
//! for exercising the pipeline in development.

use crate::domain::{DomainError, Tweet};
use crate::ports::PublisherPort;
use std::time::Duration;
use tracing::info;

/// Mock publisher.
///
/// Accepts every tweet without making API calls. Simulates network
/// latency with a configurable delay.
pub struct MockPublisher {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockPublisher {
    /// Create a new mock publisher with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    /// Create a mock publisher with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PublisherPort for MockPublisher {
    async fn publish(&self, tweet: &Tweet) -> Result<(), DomainError> {
        info!(
            chars = tweet.text.chars().count(),
            text = %tweet.text,
            "[MOCK] Simulating tweet publication"
        );

        // Simulate network delay
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(())
    }
}
