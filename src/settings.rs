//! Tool settings: output policy and logging, layered from defaults, the
//! global settings file, and an explicit `--config` path.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod defaults;
mod facade;
mod sources;

pub use facade::SettingsLoader;
pub use sources::global_file::global_settings_path;

/// Root settings structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Output rendering settings
    #[serde(default)]
    pub output: OutputSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Line terminator used when joining merged output
    #[serde(default)]
    pub line_ending: LineEnding,
}

/// Line terminator for joined output. Defaults to CRLF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    /// The terminator as a literal.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

impl std::str::FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crlf" => Ok(LineEnding::Crlf),
            "lf" => Ok(LineEnding::Lf),
            other => Err(format!(
                "invalid line ending '{}' (expected 'crlf' or 'lf')",
                other
            )),
        }
    }
}

impl Settings {
    /// Validate the loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        self.logging.validate()
    }
}
