//! # Persistence Layer
//!
//! This module defines the persistence abstraction for bylines. The
//! [`Persistence`] trait allows the roster to work with different backends.
//!
//! ## Design Rationale
//!
//! Persistence is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep roster logic **decoupled** from file-format details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole roster lives in a single `writer_stats.json`
//!   - Rewritten whole on every save; there are no partial updates
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! {
//!   "writers": [{"id": "1", "name": "Ada"}, ...],
//!   "stats":   {"1": {"articles": 12, "views": 3400}, ...}
//! }
//! ```
//!
//! The file round-trips exactly, except that opening the roster rewrites it
//! with canonicalized writer ids (see `roster`). Concurrent processes race
//! on the whole file with last-writer-wins semantics; nothing here locks.

use crate::error::Result;
use crate::model::StoreDocument;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for persisting the roster document.
///
/// The document is always read and written whole; implementations do not
/// support partial updates.
pub trait Persistence {
    /// Load the persisted document, or `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<StoreDocument>>;

    /// Replace the persisted document
    fn save(&mut self, doc: &StoreDocument) -> Result<()>;

    /// Location of the backing file, for file-based backends
    fn location(&self) -> Option<PathBuf>;
}
