use super::DocumentSource;
use crate::codec::XmlError;
use crate::error::{ExportError, Result};
use std::fs;
use std::path::Path;

/// Reads documents straight from disk. Each call opens, reads and closes the
/// file; no handles are kept between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl FileSource {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for FileSource {
    fn read_document(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| ExportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        String::from_utf8(bytes).map_err(|err| ExportError::Decode {
            path: path.to_path_buf(),
            source: XmlError::Encoding(err),
        })
    }
}
