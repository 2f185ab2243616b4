//! CLI parse: clap types for inimerge. No behavior; definitions only.

use crate::settings::LineEnding;
use clap::Parser;
use std::path::PathBuf;

/// Inimerge - non-destructive configuration file merge
#[derive(Parser)]
#[command(name = "inimerge")]
#[command(about = "Merge a template configuration file into an existing one, keeping existing values")]
pub struct Cli {
    /// Template file supplying new structure and defaults
    pub template: PathBuf,

    /// Existing file whose values are preserved
    pub target: PathBuf,

    /// Output file (prints to stdout when omitted)
    pub output: Option<PathBuf>,

    /// Settings file path (overrides default settings loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Line terminator for merged output (crlf or lf)
    #[arg(long)]
    pub line_ending: Option<LineEnding>,

    /// Enable verbose logging (default: off)
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
