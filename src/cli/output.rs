//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::CliError;

/// Map domain errors to a string for CLI output. Single place to adjust
/// wording or add stable error categories later.
pub fn map_error(e: &CliError) -> String {
    e.to_string()
}
