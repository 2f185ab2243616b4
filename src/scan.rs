//! Classification scan: folds one file's raw lines into typed lines,
//! threading the current section through as an explicit accumulator.

use crate::error::MergeError;
use crate::line::Line;

/// Classify every raw line of one file, in order.
///
/// The current section starts empty, is carried from line to line, and is
/// updated whenever a section header is seen. Template and target files are
/// scanned independently. The first unrecognized line aborts the scan with
/// its 1-based line number.
pub fn scan<S: AsRef<str>>(raw_lines: &[S]) -> Result<Vec<Line>, MergeError> {
    let mut section = String::new();
    let mut lines = Vec::with_capacity(raw_lines.len());
    for (index, raw) in raw_lines.iter().enumerate() {
        let raw = raw.as_ref();
        let line =
            Line::classify(raw, &section).ok_or_else(|| MergeError::UnrecognizedLine {
                line: index + 1,
                text: raw.to_string(),
            })?;
        if let Line::Section { text } = &line {
            section = text.clone();
        }
        lines.push(line);
    }
    Ok(lines)
}
