//! Writing the current result to disk.

use crate::SessionState;
use daihon_core::GenerationRecord;
use daihon_error::{DaihonResult, ExportError, MissingInputError, MissingInputErrorKind};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Timestamp format embedded in export file names.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `generated_content_<timestamp>.txt`, stamped with the generation time.
pub fn export_filename(record: &GenerationRecord) -> String {
    format!(
        "generated_content_{}.txt",
        record.timestamp().format(EXPORT_TIMESTAMP_FORMAT)
    )
}

/// Write the current result into `dir` as UTF-8 plain text.
///
/// The directory is created when missing. Returns the written path.
///
/// # Errors
///
/// `MissingInputError::NothingToExport` without a current result,
/// `ExportError` when the file cannot be written.
#[instrument(skip(state), fields(dir = %dir.display()))]
pub fn export_current(state: &SessionState, dir: &Path) -> DaihonResult<PathBuf> {
    let record = state
        .current()
        .ok_or_else(|| MissingInputError::new(MissingInputErrorKind::NothingToExport))?;

    std::fs::create_dir_all(dir).map_err(|e| {
        ExportError::new(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let path = dir.join(export_filename(record));
    std::fs::write(&path, record.text().as_bytes())
        .map_err(|e| ExportError::new(format!("Failed to write {}: {}", path.display(), e)))?;

    info!(path = %path.display(), chars = record.text().chars().count(), "Exported current result");
    Ok(path)
}
