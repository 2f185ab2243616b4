//! Command-line interface: argument definitions, routing, and error output.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::{load_settings, run, RunOutcome};
