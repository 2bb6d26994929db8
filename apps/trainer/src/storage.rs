//! Card files and session logs on disk.

use cardset::{import_lines, render, CardCollection, ImportReport, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Merge the card file at `path` into `deck`.
///
/// Fails only if the file cannot be opened; errors while reading are
/// carried in the report next to the number of rows already merged.
pub fn import_file(deck: &mut CardCollection, path: &Path) -> Result<ImportReport> {
    let file = File::open(path)?;
    let report = import_lines(deck, BufReader::new(file).lines());
    tracing::info!(
        path = %path.display(),
        imported = report.imported,
        complete = report.error.is_none(),
        "cards imported"
    );
    Ok(report)
}

/// Overwrite `path` with every card in `deck` and return how many were written.
pub fn export_file(deck: &CardCollection, path: &Path) -> Result<usize> {
    fs::write(path, render(deck))?;
    tracing::info!(path = %path.display(), exported = deck.len(), "cards exported");
    Ok(deck.len())
}

/// Overwrite `path` with the session transcript.
pub fn write_log(path: &Path, transcript: &str) -> Result<()> {
    fs::write(path, transcript)?;
    Ok(())
}
