//! Inimerge CLI binary.
//!
//! Command-line interface for merging a template configuration file into an
//! existing one.

use clap::Parser;
use inimerge::cli::{self, Cli, RunOutcome};
use inimerge::logging::{init_logging, LoggingConfig};
use inimerge::settings::SettingsLoader;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and the settings file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Inimerge starting");

    let settings = match cli::load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Error loading settings: {}", e);
            eprintln!("{}", cli::map_error(&e));
            process::exit(1);
        }
    };

    match cli::run(&cli, &settings) {
        Ok(RunOutcome::Stdout(text)) => {
            info!("Merge completed");
            println!("{}", text);
        }
        Ok(RunOutcome::Written(path)) => {
            info!(output = %path.display(), "Merge completed");
        }
        Err(e) => {
            error!("Merge failed: {}", e);
            eprintln!("{}", cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and settings file.
/// Precedence: CLI flags override settings file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        SettingsLoader::load_from_file(config_path)
            .ok()
            .map(|s| s.logging)
            .unwrap_or_default()
    } else {
        SettingsLoader::load()
            .ok()
            .map(|s| s.logging)
            .unwrap_or_default()
    };

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
