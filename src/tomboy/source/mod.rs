//! # Document Sources
//!
//! Everything the exporter reads goes through the [`DocumentSource`] trait, so
//! the manifest walk and the decoders can be exercised without a filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: Production source, reads files from disk
//! - [`memory::MemorySource`]: In-memory documents keyed by path, for tests
//!
//! A source only hands back text. Deciding what a path means (manifest, note)
//! and decoding it is the job of [`crate::archive`].

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait DocumentSource {
    /// Read the full document at `path` as UTF-8 text.
    ///
    /// Returns [`crate::error::ExportError::Read`] when the document cannot be
    /// opened and [`crate::error::ExportError::Decode`] when its bytes are not
    /// valid UTF-8.
    fn read_document(&self, path: &Path) -> Result<String>;
}
