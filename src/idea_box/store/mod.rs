//! # Storage Layer
//!
//! The whole idea box is a single JSON document: a counter plus the list of
//! ideas. The [`DataStore`] trait is the only boundary between that document
//! and the commands, so commands never touch the filesystem directly.
//!
//! ## Contract
//!
//! - [`DataStore::load`] **never fails**. A missing document, an unreadable
//!   file or malformed JSON all produce an empty [`Collection`]. Corrupt state
//!   therefore never blocks a new write; the fallback is logged as a warning.
//! - [`DataStore::save`] overwrites the full document. There is no atomic
//!   rename and no backup, so an interrupted write can leave a truncated file.
//!
//! Every command is a full read, an in-memory change and (for mutations) a full
//! rewrite. Concurrent invocations are not coordinated: the last writer wins.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store backed by one file on disk.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! ## Document Format
//!
//! ```text
//! {
//!   "last_id": 2,
//!   "items": [
//!     { "id": 1, "text": "...", "tags": ["ai"], "created_at": "2024-05-01 09:30:00" }
//!   ]
//! }
//! ```

use crate::error::Result;
use crate::model::Collection;

pub mod fs;
pub mod memory;

pub use fs::write_document;

/// Abstract interface for the idea document.
pub trait DataStore {
    /// Load the full collection, falling back to an empty one on any failure.
    fn load(&self) -> Collection;

    /// Persist the full collection, replacing whatever was stored before.
    fn save(&mut self, collection: &Collection) -> Result<()>;
}
