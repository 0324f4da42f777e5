//! Implements CatalogPort by generating IDs instead of reading lists.
//!
//! A random 7-digit number, zero-padded, behind a randomly chosen `nm`/`tt`
//! prefix. Most generated IDs will not resolve to a page with trivia; the
//! run loop simply journals those and moves on.

use crate::domain::{CatalogId, DomainError, IdKind};
use crate::ports::CatalogPort;
use rand::Rng;

/// Fully random catalog. No files involved.
pub struct RandomCatalog;

impl RandomCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CatalogPort for RandomCatalog {
    async fn pick_id(&self) -> Result<CatalogId, DomainError> {
        let (number, person) = {
            let mut rng = rand::thread_rng();
            (rng.gen_range(1..=9_999_999u32), rng.gen_bool(0.5))
        };
        let (kind, prefix) = if person {
            (IdKind::Person, "nm")
        } else {
            (IdKind::Title, "tt")
        };
        Ok(CatalogId::new(kind, format!("{}{:07}", prefix, number)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generated_ids_are_well_formed() {
        let catalog = RandomCatalog::new();
        for _ in 0..32 {
            let id = catalog.pick_id().await.unwrap();
            assert_eq!(id.raw.len(), 9);
            let prefix = &id.raw[..2];
            assert!(prefix == "nm" || prefix == "tt");
            assert!(id.raw[2..].chars().all(|c| c.is_ascii_digit()));
            match id.kind {
                IdKind::Person => assert_eq!(prefix, "nm"),
                IdKind::Title => assert_eq!(prefix, "tt"),
            }
        }
    }

    #[tokio::test]
    async fn test_number_is_zero_padded() {
        // The parse round-trip keeps the padding intact.
        let id = CatalogId::new(IdKind::Person, format!("nm{:07}", 42));
        assert_eq!(id.raw, "nm0000042");
    }
}
