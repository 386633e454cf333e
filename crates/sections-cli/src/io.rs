//! Driver file I/O: whole-file reads and the single write-back

use std::fs;
use std::path::Path;

use crate::error::{CliError, Result};

/// Read the full text of a file into memory.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

/// Overwrite a file in place with updated content.
///
/// The transform runs entirely in memory before this is called, so this is
/// the only write the driver performs in a run.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| CliError::io(path, e))
}
