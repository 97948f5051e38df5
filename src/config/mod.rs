//! The `config` module loads runtime settings for `chanwire`.
//!
//! Values come from an optional `config/default.{toml,json,yaml}` file and
//! from `CHANWIRE__`-prefixed environment variables (for example
//! `CHANWIRE__CODEC__DEFAULT_VSN=2.0.0`), layered over [`Settings::default`].

mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{CodecSettings, LogSettings, Settings};

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct containing the codec and logging configurations
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(
            Environment::with_prefix("CHANWIRE")
                .prefix_separator("__")
                .separator("__"),
        );

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        codec: CodecSettings {
            default_vsn: partial
                .codec
                .as_ref()
                .and_then(|c| c.default_vsn.clone())
                .unwrap_or(default.codec.default_vsn),
        },
        log: LogSettings {
            level: partial
                .log
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.log.level),
        },
    })
}
