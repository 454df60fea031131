//! Loading manifests and notes from a [`DocumentSource`].
//!
//! Both loaders keep I/O failures (`ExportError::Read`) apart from malformed
//! documents (`ExportError::Decode`). Neither logs errors: whether a failure is
//! fatal is up to the caller.

use crate::codec;
use crate::error::{ExportError, Result};
use crate::model::{Manifest, Note};
use crate::source::DocumentSource;
use std::path::Path;
use tracing::debug;

pub fn load_manifest<S: DocumentSource>(source: &S, path: &Path) -> Result<Manifest> {
    let xml = source.read_document(path)?;
    let manifest = codec::decode_manifest(&xml).map_err(|source| ExportError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), entries = manifest.notes.len(), "loaded manifest");
    Ok(manifest)
}

pub fn load_note<S: DocumentSource>(source: &S, path: &Path) -> Result<Note> {
    let xml = source.read_document(path)?;
    codec::decode_note(&xml).map_err(|source| ExportError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::MemorySource;

    #[test]
    fn test_load_manifest() {
        let source = MemorySource::new().with_document(
            "/in/manifest.xml",
            r#"<manifest revision="2"><note id="a" rev="1"/></manifest>"#,
        );
        let manifest = load_manifest(&source, Path::new("/in/manifest.xml")).unwrap();
        assert_eq!(manifest.revision, 2);
        assert_eq!(manifest.notes.len(), 1);
    }

    #[test]
    fn test_load_manifest_missing_is_read_error() {
        let err = load_manifest(&MemorySource::new(), Path::new("/in/manifest.xml")).unwrap_err();
        assert!(err.is_unreadable());
        assert!(err.to_string().contains("/in/manifest.xml"));
    }

    #[test]
    fn test_load_manifest_malformed_is_decode_error() {
        let source = MemorySource::new()
            .with_document("/in/manifest.xml", r#"<manifest revision="2"><note id="a">"#);
        let err = load_manifest(&source, Path::new("/in/manifest.xml")).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_load_note() {
        let source = MemorySource::new().with_document(
            "/in/0/1/a.note",
            "<note><title>Hello</title><text>World</text></note>",
        );
        let note = load_note(&source, Path::new("/in/0/1/a.note")).unwrap();
        assert_eq!(note, Note::new("Hello", "World"));
    }

    #[test]
    fn test_load_note_malformed_is_decode_error() {
        let source = MemorySource::new().with_document("/in/0/1/a.note", "<note><title>");
        let err = load_note(&source, Path::new("/in/0/1/a.note")).unwrap_err();
        assert!(err.is_malformed());
    }
}
