//! Implements JournalPort. Appends cycle outcomes to flat files.
//!
//! Three append-only files under the data directory: published tweets with
//! a local timestamp, IDs whose pages carried no trivia, and disqualified
//! compositions with the reason they were skipped.

use crate::domain::{CatalogId, DomainError, Tweet};
use crate::ports::JournalPort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Published tweets, one per line, prefixed with a local timestamp.
const SAVED_FILE: &str = "saved_trivia.txt";

/// IDs whose pages yielded no candidate facts.
const NO_TRIVIA_FILE: &str = "no_trivia.txt";

/// Disqualified compositions with their skip reason.
const SKIPPED_FILE: &str = "skipped_trivia.txt";

/// Timestamp layout for published entries, e.g. `7 Mar 2026 14:03:59`.
const SAVED_TIMESTAMP: &str = "%-d %b %Y %H:%M:%S";

/// Flat-file journal. One file per outcome kind, append-only.
pub struct FlatFileJournal {
    data_dir: PathBuf,
}

impl FlatFileJournal {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    async fn append_line(&self, file: &str, line: &str) -> Result<(), DomainError> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| DomainError::Journal(e.to_string()))?;
        let path = self.data_dir.join(file);
        let mut f = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| DomainError::Journal(e.to_string()))?;
        f.write_all(line.as_bytes())
            .await
            .map_err(|e| DomainError::Journal(e.to_string()))?;
        f.write_all(b"\n")
            .await
            .map_err(|e| DomainError::Journal(e.to_string()))?;
        f.flush()
            .await
            .map_err(|e| DomainError::Journal(e.to_string()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl JournalPort for FlatFileJournal {
    async fn record_no_trivia(&self, id: &CatalogId) -> Result<(), DomainError> {
        self.append_line(NO_TRIVIA_FILE, &id.to_string()).await?;
        info!(id = %id, file = NO_TRIVIA_FILE, "recorded page without trivia");
        Ok(())
    }

    async fn record_published(&self, tweet: &Tweet) -> Result<(), DomainError> {
        let line = format!(
            "{} {}",
            chrono::Local::now().format(SAVED_TIMESTAMP),
            tweet.text
        );
        self.append_line(SAVED_FILE, &line).await?;
        info!(
            chars = tweet.text.chars().count(),
            file = SAVED_FILE,
            "recorded published tweet"
        );
        Ok(())
    }

    async fn record_skipped(&self, id: &CatalogId, reason: &str) -> Result<(), DomainError> {
        let line = format!("{} {}", id, reason);
        self.append_line(SKIPPED_FILE, &line).await?;
        info!(id = %id, reason, file = SKIPPED_FILE, "recorded skipped composition");
        Ok(())
    }
}
