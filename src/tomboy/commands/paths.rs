use super::helpers;
use super::CmdResult;
use crate::config::ExportConfig;
use crate::error::Result;
use crate::paths::note_path;
use crate::source::DocumentSource;

/// Resolves the note file path for every manifest entry without reading the notes.
pub fn run<S: DocumentSource>(source: &S, config: &ExportConfig) -> Result<CmdResult> {
    let manifest = helpers::manifest(source, config)?;
    let notes_root = config.notes_root();

    let entries = manifest.notes.clone();
    let mut result = CmdResult::new(manifest);
    let mut paths = Vec::with_capacity(entries.len());

    for entry in &entries {
        match note_path(&notes_root, entry) {
            Ok(path) => paths.push(path),
            Err(error) => helpers::skip(&mut result, entry, error),
        }
    }

    Ok(result.with_note_paths(paths))
}
