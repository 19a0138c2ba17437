//! # Storage Layer
//!
//! Changelogs and note files are plain UTF-8 documents addressed by path. The
//! [`DocumentStore`] trait is the only way the command layer touches them, so
//! commands can be tested against [`memory::InMemoryStore`] without a
//! filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store, plain `std::fs` reads and writes. No
//!   locking and no atomic replace; a file is only overwritten once its new
//!   contents are fully computed.
//! - [`memory::InMemoryStore`]: path-keyed map for tests.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for reading and writing text documents.
pub trait DocumentStore {
    /// Read a whole document. A missing document is
    /// [`RelnotesError::DocumentNotFound`](crate::error::RelnotesError::DocumentNotFound).
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace a document's contents, creating it if needed.
    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;
}
