use crate::error::{ExportError, Result};
use crate::paths::{MANIFEST_FILENAME, NOTES_ROOT_DIR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one export run.
///
/// Built from CLI flags, optionally on top of a JSON file loaded with
/// [`ExportConfig::load`]. Fields missing from the file keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Root of the Tomboy archive (the directory holding `manifest.xml`)
    #[serde(rename = "in")]
    pub in_path: PathBuf,

    /// Where converted notes would be written. Accepted but not used yet.
    #[serde(rename = "out")]
    pub out_path: PathBuf,

    /// Export every revision of a note. Accepted but not used yet.
    pub revisions: bool,

    /// List resolved note paths instead of note contents
    #[serde(rename = "paths")]
    pub list_paths: bool,
}

impl ExportConfig {
    pub fn new(in_path: impl Into<PathBuf>) -> Self {
        Self {
            in_path: in_path.into(),
            ..Self::default()
        }
    }

    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| {
            ExportError::Config(format!("cannot read {}: {}", path.display(), err))
        })?;
        let config: ExportConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.in_path.join(MANIFEST_FILENAME)
    }

    /// Directory the per-revision note folders hang off.
    pub fn notes_root(&self) -> PathBuf {
        self.in_path.join(NOTES_ROOT_DIR)
    }
}
