//! Catalog adapters. Implement CatalogPort.
//!
//! File-backed lists for normal operation; a generator for full-random mode.

pub mod files;
pub mod random;

pub use files::FileCatalog;
pub use random::RandomCatalog;
