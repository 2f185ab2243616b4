//! Settings loading facade.

use super::{defaults, sources, Settings};
use crate::error::CliError;
use config::File;
use std::path::Path;

/// Loads settings from layered sources. Precedence, lowest to highest:
/// built-in defaults, then the global settings file.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from the default source chain.
    pub fn load() -> Result<Settings, CliError> {
        let builder = defaults::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate().map_err(CliError::Settings)?;
        Ok(settings)
    }

    /// Load settings from an explicit file, layered over defaults only.
    /// The file must exist.
    pub fn load_from_file(path: &Path) -> Result<Settings, CliError> {
        let builder = defaults::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate().map_err(CliError::Settings)?;
        Ok(settings)
    }
}
