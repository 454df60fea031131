use super::CmdResult;
use crate::archive;
use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::model::{Manifest, NoteEntry};
use crate::source::DocumentSource;
use tracing::{debug, warn};

/// Loads the manifest named by `config`. Failure here ends the run.
pub fn manifest<S: DocumentSource>(source: &S, config: &ExportConfig) -> Result<Manifest> {
    let manifest = archive::load_manifest(source, &config.manifest_path())?;
    debug!("{}", manifest);
    Ok(manifest)
}

/// Logs a note-level failure and records it on `result`.
pub fn skip(result: &mut CmdResult, entry: &NoteEntry, error: ExportError) {
    warn!(id = %entry.id, rev = entry.rev, "{}", error);
    result.add_skipped(entry, error);
}
