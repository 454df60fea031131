use crate::codec::XmlError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Error opening {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error decoding {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: XmlError,
    },

    #[error("Refusing note id {id:?}: {reason}")]
    UnsafeNoteId { id: String, reason: &'static str },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExportError {
    /// True when the underlying file could not be read at all (as opposed to
    /// being read and found malformed).
    pub fn is_unreadable(&self) -> bool {
        matches!(self, ExportError::Read { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, ExportError::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
