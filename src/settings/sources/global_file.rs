//! Global settings file source: $XDG_CONFIG_HOME/inimerge/config.toml or
//! ~/.config/inimerge/config.toml.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to the global settings file, when a home directory can be resolved.
pub fn global_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "inimerge").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the global settings file source to the builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(path) = global_settings_path() {
        if path.exists() {
            builder = builder.add_source(File::from(path).required(false));
        } else {
            debug!(path = %path.display(), "no global settings file");
        }
    }
    Ok(builder)
}
