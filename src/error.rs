//! Error types for the merge pipeline and the CLI surface.

use std::path::PathBuf;
use thiserror::Error;

/// Merge pipeline errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    /// A raw line matched none of the recognized forms (section header,
    /// comment, blank, `key=value`). Aborts the whole merge; no partial
    /// output is produced.
    #[error("line {line}: not a recognized configuration line: {text:?}")]
    UnrecognizedLine { line: usize, text: String },

    /// The anchor for a template insertion could not be located in the
    /// working output. Signals a defect in the merge itself, not a problem
    /// with user data.
    #[error("internal consistency error: anchor for template line {index} not found in working output")]
    AnchorNotFound { index: usize },
}

/// CLI-surface errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error("settings error: {0}")]
    Settings(String),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Settings(err.to_string())
    }
}
