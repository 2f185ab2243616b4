//! Settings defaults applied before any file source.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("output.line_ending", "crlf")?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")
}
