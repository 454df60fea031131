use super::DocumentSource;
use crate::error::{ExportError, Result};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Documents held in memory, keyed by the exact path they are requested under.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    documents: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.documents.insert(path.into(), content.into());
    }

    pub fn with_document(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSource for MemorySource {
    fn read_document(&self, path: &Path) -> Result<String> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| ExportError::Read {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such document"),
            })
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NoteEntry;

    /// Builds an in-memory archive rooted at `root`, laid out the same way as
    /// a Tomboy directory: `<root>/manifest.xml` and `<root>/0/<rev>/<id>.note`.
    pub struct ArchiveFixture {
        pub root: PathBuf,
        pub revision: i64,
        pub entries: Vec<NoteEntry>,
        pub source: MemorySource,
    }

    impl ArchiveFixture {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self {
                root: root.into(),
                revision: 0,
                entries: Vec::new(),
                source: MemorySource::new(),
            }
        }

        pub fn with_revision(mut self, revision: i64) -> Self {
            self.revision = revision;
            self
        }

        /// Adds a manifest entry and a matching note file.
        pub fn with_note(mut self, id: &str, rev: i64, title: &str, body: &str) -> Self {
            let xml = format!(
                "<note version=\"0.3\"><title>{}</title><text>{}</text></note>",
                title, body
            );
            let path = self.note_file(id, rev);
            self.source.insert(path, xml);
            self.entries.push(NoteEntry::new(id, rev));
            self
        }

        /// Adds a note file with arbitrary content.
        pub fn with_raw_note(mut self, id: &str, rev: i64, xml: &str) -> Self {
            let path = self.note_file(id, rev);
            self.source.insert(path, xml);
            self.entries.push(NoteEntry::new(id, rev));
            self
        }

        /// Adds a manifest entry whose note file does not exist.
        pub fn with_missing_note(mut self, id: &str, rev: i64) -> Self {
            self.entries.push(NoteEntry::new(id, rev));
            self
        }

        pub fn note_file(&self, id: &str, rev: i64) -> PathBuf {
            self.root
                .join("0")
                .join(rev.to_string())
                .join(format!("{}.note", id))
        }

        pub fn manifest_xml(&self) -> String {
            let mut xml = format!(
                "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<manifest revision=\"{}\">\n",
                self.revision
            );
            for entry in &self.entries {
                xml.push_str(&format!(
                    "  <note id=\"{}\" rev=\"{}\" />\n",
                    entry.id, entry.rev
                ));
            }
            xml.push_str("</manifest>\n");
            xml
        }

        /// Finishes the archive, writing the manifest for every entry added so far.
        pub fn build(mut self) -> MemorySource {
            let manifest = self.manifest_xml();
            let path = self.root.join("manifest.xml");
            self.source.insert(path, manifest);
            self.source
        }
    }
}
