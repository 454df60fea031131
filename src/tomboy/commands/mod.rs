use crate::error::ExportError;
use crate::model::{Manifest, Note, NoteEntry};
use std::path::PathBuf;

pub mod convert;
pub mod helpers;
pub mod paths;

/// A note that was resolved, read and decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedNote {
    pub entry: NoteEntry,
    pub path: PathBuf,
    pub note: Note,
}

/// A manifest entry that could not be processed. The run carried on without it.
#[derive(Debug)]
pub struct SkippedNote {
    pub entry: NoteEntry,
    pub error: ExportError,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub manifest: Manifest,
    /// In manifest order
    pub notes: Vec<LoadedNote>,
    /// In manifest order
    pub note_paths: Vec<PathBuf>,
    pub skipped: Vec<SkippedNote>,
}

impl CmdResult {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            ..Self::default()
        }
    }

    pub fn add_skipped(&mut self, entry: &NoteEntry, error: ExportError) {
        self.skipped.push(SkippedNote {
            entry: entry.clone(),
            error,
        });
    }

    pub fn with_notes(mut self, notes: Vec<LoadedNote>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_note_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.note_paths = paths;
        self
    }
}
