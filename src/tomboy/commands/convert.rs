use super::helpers;
use super::{CmdResult, LoadedNote};
use crate::archive;
use crate::config::ExportConfig;
use crate::error::Result;
use crate::model::NoteEntry;
use crate::paths::note_path;
use crate::source::DocumentSource;
use std::path::Path;
use tracing::debug;

/// Loads every note listed in the manifest, in manifest order.
///
/// Only a manifest failure is returned as `Err`. A note that cannot be
/// resolved, read or decoded ends up in [`CmdResult::skipped`].
pub fn run<S: DocumentSource>(source: &S, config: &ExportConfig) -> Result<CmdResult> {
    let manifest = helpers::manifest(source, config)?;
    let notes_root = config.notes_root();

    let entries = manifest.notes.clone();
    let mut result = CmdResult::new(manifest);
    let mut notes = Vec::with_capacity(entries.len());

    for entry in &entries {
        match load_entry(source, &notes_root, entry) {
            Ok(loaded) => notes.push(loaded),
            Err(error) => helpers::skip(&mut result, entry, error),
        }
    }

    debug!(
        loaded = notes.len(),
        skipped = result.skipped.len(),
        "conversion finished"
    );
    Ok(result.with_notes(notes))
}

fn load_entry<S: DocumentSource>(
    source: &S,
    notes_root: &Path,
    entry: &NoteEntry,
) -> Result<LoadedNote> {
    let path = note_path(notes_root, entry)?;
    let note = archive::load_note(source, &path)?;
    Ok(LoadedNote {
        entry: entry.clone(),
        path,
        note,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::source::memory::fixtures::ArchiveFixture;
    use crate::source::memory::MemorySource;

    fn titles(result: &CmdResult) -> Vec<&str> {
        result.notes.iter().map(|n| n.note.title.as_str()).collect()
    }

    #[test]
    fn test_converts_all_notes_in_manifest_order() {
        let source = ArchiveFixture::new("/notes")
            .with_revision(9)
            .with_note("c", 3, "Third", "three")
            .with_note("a", 1, "First", "one")
            .with_note("b", 2, "Second", "two")
            .build();

        let result = run(&source, &ExportConfig::new("/notes")).unwrap();
        assert_eq!(titles(&result), vec!["Third", "First", "Second"]);
        assert_eq!(result.notes[1].note.text.as_str(), "one");
        assert!(result.skipped.is_empty());
        assert_eq!(result.manifest.revision, 9);
    }

    #[test]
    fn test_missing_note_is_skipped() {
        let source = ArchiveFixture::new("/notes")
            .with_note("a", 1, "First", "one")
            .with_missing_note("gone", 1)
            .with_note("c", 2, "Third", "three")
            .build();

        let result = run(&source, &ExportConfig::new("/notes")).unwrap();
        assert_eq!(titles(&result), vec!["First", "Third"]);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].entry.id, "gone");
        assert!(result.skipped[0].error.is_unreadable());
    }

    #[test]
    fn test_malformed_note_is_skipped() {
        let source = ArchiveFixture::new("/notes")
            .with_raw_note("bad", 1, "<note><title>oops</note>")
            .with_note("good", 1, "Fine", "body")
            .build();

        let result = run(&source, &ExportConfig::new("/notes")).unwrap();
        assert_eq!(titles(&result), vec!["Fine"]);
        assert!(result.skipped[0].error.is_malformed());
    }

    #[test]
    fn test_unsafe_id_is_skipped() {
        let source = ArchiveFixture::new("/notes")
            .with_missing_note("../../etc/passwd", 1)
            .with_note("ok", 1, "Ok", "")
            .build();

        let result = run(&source, &ExportConfig::new("/notes")).unwrap();
        assert_eq!(titles(&result), vec!["Ok"]);
        assert!(matches!(
            result.skipped[0].error,
            ExportError::UnsafeNoteId { .. }
        ));
    }

    #[test]
    fn test_notes_resolve_under_zero_with_entry_revision() {
        let source = ArchiveFixture::new("/notes")
            .with_revision(5)
            .with_note("abc123", 2, "Hello", "World")
            .build();

        let result = run(&source, &ExportConfig::new("/notes")).unwrap();
        assert_eq!(
            result.notes[0].path,
            std::path::PathBuf::from("/notes/0/2/abc123.note")
        );
    }

    #[test]
    fn test_missing_manifest_is_fatal() {
        let err = run(&MemorySource::new(), &ExportConfig::new("/notes")).unwrap_err();
        assert!(err.is_unreadable());
    }

    #[test]
    fn test_malformed_manifest_is_fatal() {
        let source = MemorySource::new().with_document("/notes/manifest.xml", "<manifest");
        let err = run(&source, &ExportConfig::new("/notes")).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_nested_markup_survives() {
        let source = ArchiveFixture::new("/notes")
            .with_note("a", 1, "Fmt", "<bold>Hi</bold>")
            .build();

        let result = run(&source, &ExportConfig::new("/notes")).unwrap();
        assert_eq!(result.notes[0].note.text.as_str(), "<bold>Hi</bold>");
    }
}
