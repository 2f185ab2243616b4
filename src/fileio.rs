//! File boundary: whole-file line reading and joined writing. The merge
//! core only ever sees sequences of text lines.

use crate::error::CliError;
use crate::settings::LineEnding;
use std::fs;
use std::path::Path;

/// Read a file and split it into lines. Accepts both LF and CRLF input;
/// terminators are not preserved.
pub fn read_lines(path: &Path) -> Result<Vec<String>, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Join lines with the given terminator.
pub fn join_lines(lines: &[String], line_ending: LineEnding) -> String {
    lines.join(line_ending.as_str())
}

/// Join lines with the given terminator and write them to `path`,
/// replacing any existing content.
pub fn write_lines(path: &Path, lines: &[String], line_ending: LineEnding) -> Result<(), CliError> {
    fs::write(path, join_lines(lines, line_ending)).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
