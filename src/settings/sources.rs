//! File sources for the settings builder.

pub mod global_file;
