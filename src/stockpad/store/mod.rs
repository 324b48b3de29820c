//! # Storage Layer
//!
//! Storage is split in two:
//!
//! 1. [`StorageBackend`]: dumb whole-collection I/O. It knows how to read the
//!    complete list of records and how to write it back, nothing else.
//! 2. [`record_store::RecordStore`]: owns the in-memory collection, validates
//!    input, applies mutations and persists through the backend after each one.
//!
//! ## Persistence Model
//!
//! The collection is always written wholesale. There is no incremental update
//! and no journal. The file backend writes to a temp file in the same directory
//! and renames it over the target, so a crash leaves either the old or the new
//! file, never a truncated one.
//!
//! If a write fails, `RecordStore` rolls the in-memory mutation back before
//! returning the error, so the collection in memory always matches the last
//! successful write.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: a single JSON file (production).
//! - [`mem_backend::MemBackend`]: a `Vec` in memory (tests).
//!
//! ## Storage Layout
//!
//! ```text
//! ./
//! ├── inventory.json      # JSON array of records
//! └── stockpad.json       # Optional configuration
//! ```

use crate::error::Result;
use crate::model::Record;
use std::path::Path;

pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

/// Whole-collection persistence.
pub trait StorageBackend {
    /// Reads the full collection. A missing store yields an empty collection.
    fn load(&self) -> Result<Vec<Record>>;

    /// Overwrites the stored collection with `records`.
    fn save(&mut self, records: &[Record]) -> Result<()>;

    /// Where the collection lives, for backends that have a location.
    fn location(&self) -> Option<&Path>;
}
