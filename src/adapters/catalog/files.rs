//! Implements CatalogPort from two flat ID-list files.
//!
//! Mirrors the two-stage pick: first a random file (names vs movies), then a
//! random line within it. Lines are trimmed; blanks are skipped.

use crate::domain::{CatalogId, DomainError};
use crate::ports::CatalogPort;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File-backed catalog. Two newline-separated ID lists.
pub struct FileCatalog {
    names_path: PathBuf,
    movies_path: PathBuf,
}

impl FileCatalog {
    pub fn new(names_path: impl AsRef<Path>, movies_path: impl AsRef<Path>) -> Self {
        Self {
            names_path: names_path.as_ref().to_path_buf(),
            movies_path: movies_path.as_ref().to_path_buf(),
        }
    }

    async fn read_ids(path: &Path) -> Result<Vec<CatalogId>, DomainError> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            DomainError::Catalog(format!("read {}: {}", path.display(), e))
        })?;
        Ok(content.lines().filter_map(CatalogId::parse).collect())
    }
}

#[async_trait::async_trait]
impl CatalogPort for FileCatalog {
    async fn pick_id(&self) -> Result<CatalogId, DomainError> {
        // Stage one: pick the file. Stage two: pick a line from it.
        let path = if rand::thread_rng().gen_bool(0.5) {
            &self.names_path
        } else {
            &self.movies_path
        };
        let ids = Self::read_ids(path).await?;
        debug!(path = %path.display(), count = ids.len(), "loaded id list");

        let mut rng = rand::thread_rng();
        ids.choose(&mut rng).cloned().ok_or_else(|| {
            DomainError::Catalog(format!("id list {} is empty", path.display()))
        })
    }
}
