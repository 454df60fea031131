//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UIs.
//! It owns the run configuration and the document source, dispatches to
//! `commands/*.rs`, and hands back structured [`CmdResult`]s. No output
//! formatting happens here.
//!
//! `ExportApi<S: DocumentSource>` is generic over the source:
//! - Production: `ExportApi<FileSource>`
//! - Testing: `ExportApi<MemorySource>`

use crate::commands;
use crate::config::ExportConfig;
use crate::error::Result;
use crate::source::DocumentSource;

pub struct ExportApi<S: DocumentSource> {
    source: S,
    config: ExportConfig,
}

impl<S: DocumentSource> ExportApi<S> {
    pub fn new(source: S, config: ExportConfig) -> Self {
        Self { source, config }
    }

    /// Load every note in the manifest. See [`commands::convert::run`].
    pub fn convert(&self) -> Result<CmdResult> {
        commands::convert::run(&self.source, &self.config)
    }

    /// Resolve every note path in the manifest. See [`commands::paths::run`].
    pub fn note_paths(&self) -> Result<CmdResult> {
        commands::paths::run(&self.source, &self.config)
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }
}

pub use commands::{CmdResult, LoadedNote, SkippedNote};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::fixtures::ArchiveFixture;

    fn api() -> ExportApi<crate::source::memory::MemorySource> {
        let source = ArchiveFixture::new("/notes")
            .with_note("a", 1, "Alpha", "first")
            .with_missing_note("b", 2)
            .build();
        ExportApi::new(source, ExportConfig::new("/notes"))
    }

    #[test]
    fn test_convert_dispatches() {
        let result = api().convert().unwrap();
        assert_eq!(result.notes.len(), 1);
        assert_eq!(result.skipped.len(), 1);
        assert!(result.note_paths.is_empty());
    }

    #[test]
    fn test_note_paths_dispatches() {
        let result = api().note_paths().unwrap();
        assert_eq!(result.note_paths.len(), 2);
        assert!(result.notes.is_empty());
    }

    #[test]
    fn test_config_accessor() {
        assert_eq!(
            api().config().manifest_path(),
            std::path::PathBuf::from("/notes/manifest.xml")
        );
    }
}
