// Shared file handling for the subcommands.

use std::fs;
use std::path::Path;

use super::CommandError;

pub(crate) fn read_source(path: &Path) -> Result<String, CommandError> {
    fs::read_to_string(path).map_err(|source| CommandError::ReadInput {
        path: path.display().to_string(),
        source,
    })
}

/// Clear a pre-existing output file before any computation runs, so a
/// refused clear surfaces before work is done.
pub(crate) fn clear_output(path: &Path) -> Result<(), CommandError> {
    if path.exists() {
        fs::remove_file(path).map_err(|source| CommandError::ClearOutput {
            path: path.display().to_string(),
            source,
        })?;
    }
    Ok(())
}

/// Write fully rendered text in one call; the caller builds the complete
/// buffer first, so a reader never observes a half-written automaton.
pub(crate) fn write_output(path: &Path, text: &str) -> Result<(), CommandError> {
    fs::write(path, text).map_err(|source| CommandError::WriteOutput {
        path: path.display().to_string(),
        source,
    })
}
