//! Note path resolution.
//!
//! A manifest entry `{id, rev}` lives at `<notes_root>/<rev>/<id>.note`. The
//! revision segment is the entry's own `rev`, not the manifest's revision.
//!
//! Ids come straight out of a file we do not control, so they are checked
//! before being joined into a path: an id that could name anything other than a
//! single file inside the revision directory is refused.

use crate::error::{ExportError, Result};
use crate::model::NoteEntry;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILENAME: &str = "manifest.xml";
pub const NOTES_ROOT_DIR: &str = "0";
pub const NOTE_EXT: &str = ".note";

/// Computes the expected file for `entry`. Does not touch the filesystem.
pub fn note_path(notes_root: &Path, entry: &NoteEntry) -> Result<PathBuf> {
    validate_note_id(&entry.id)?;
    Ok(notes_root
        .join(entry.rev.to_string())
        .join(format!("{}{}", entry.id, NOTE_EXT)))
}

pub fn validate_note_id(id: &str) -> Result<()> {
    let reason = if id.is_empty() {
        Some("id is empty")
    } else if id == "." || id == ".." {
        Some("id names a directory")
    } else if id.contains('/') || id.contains('\\') {
        Some("id contains a path separator")
    } else if id.contains('\0') {
        Some("id contains a NUL byte")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ExportError::UnsafeNoteId {
            id: id.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
