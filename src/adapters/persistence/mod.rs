//! Flat-file persistence for cycle outcomes.

pub mod journal;

pub use journal::FlatFileJournal;
