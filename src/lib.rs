//! Inimerge: non-destructive configuration file merging.
//!
//! Merges a "template" configuration file (new defaults, possibly with new
//! keys, sections, and comments) into an "existing" configuration file,
//! producing output that gains the template's structure while keeping every
//! value the user already set.

pub mod cli;
pub mod error;
pub mod fileio;
pub mod line;
pub mod logging;
pub mod merge;
pub mod render;
pub mod scan;
pub mod settings;
