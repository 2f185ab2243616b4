//! CLI route: wires the file boundary to the merge pipeline.

use crate::cli::parse::Cli;
use crate::error::CliError;
use crate::fileio;
use crate::merge::merge;
use crate::render::render_lines;
use crate::scan::scan;
use crate::settings::{Settings, SettingsLoader};
use std::path::PathBuf;
use tracing::{debug, info};

/// Merge outcome handed back to the binary.
pub enum RunOutcome {
    /// Merged text to print on stdout.
    Stdout(String),
    /// Merged text was written to the given file.
    Written(PathBuf),
}

/// Load settings honoring an explicit `--config` path.
pub fn load_settings(cli: &Cli) -> Result<Settings, CliError> {
    match &cli.config {
        Some(path) => SettingsLoader::load_from_file(path),
        None => SettingsLoader::load(),
    }
}

/// Execute the merge described by the CLI arguments.
pub fn run(cli: &Cli, settings: &Settings) -> Result<RunOutcome, CliError> {
    let line_ending = cli.line_ending.unwrap_or(settings.output.line_ending);

    let template_raw = fileio::read_lines(&cli.template)?;
    let target_raw = fileio::read_lines(&cli.target)?;
    debug!(
        template_lines = template_raw.len(),
        target_lines = target_raw.len(),
        "input files read"
    );

    let template = scan(&template_raw)?;
    let target = scan(&target_raw)?;
    let merged = merge(&template, &target)?;
    let rendered = render_lines(&merged);
    info!(merged_lines = rendered.len(), "merge complete");

    match &cli.output {
        Some(path) => {
            fileio::write_lines(path, &rendered, line_ending)?;
            Ok(RunOutcome::Written(path.clone()))
        }
        None => Ok(RunOutcome::Stdout(fileio::join_lines(
            &rendered,
            line_ending,
        ))),
    }
}
