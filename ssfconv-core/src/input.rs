//! Line-oriented text input

use crate::error::{ConvertError, Result};
use std::fs;
use std::path::Path;

/// Split text into trimmed lines, dropping the blank ones
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn nonblank_lines(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a UTF-8 file and return its trimmed non-blank lines
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| ConvertError::missing(path, e))?;
    Ok(nonblank_lines(&content))
}
