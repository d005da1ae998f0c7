use std::collections::HashMap;
use std::path::Path;

use config::{Config, ConfigBuilder, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::error::CoreResult;

/// Default configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "calconv.toml";

/// Prefix for environment overrides, e.g. `CALCONV_LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "CALCONV";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub timezone: TimezoneSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Site-specific timezone naming rules layered over the built-in normalizer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimezoneSettings {
    /// Legacy or proprietary TZID mapped to an IANA identifier.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
    /// Vendor prefixes stripped in addition to the well-known ones.
    #[serde(default)]
    pub extra_prefixes: Vec<String>,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and `calconv.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Self::load_from(None)
    }

    /// ## Summary
    /// Loads configuration, reading `path` instead of `calconv.toml` when given.
    /// An explicitly named file must exist.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from(path: Option<&Path>) -> CoreResult<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE).required(false),
        };

        let settings = Self::builder()?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        tracing::debug!(
            aliases = settings.timezone.aliases.len(),
            extra_prefixes = settings.timezone.extra_prefixes.len(),
            "Configuration loaded"
        );

        Ok(settings)
    }

    /// ## Summary
    /// Parses settings from an in-memory TOML document, applying defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not match `Settings`.
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        Ok(Self::builder()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?)
    }

    fn builder() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder().set_default("logging.level", "info")?)
    }
}

/// ## Summary
/// Loads configuration from the `.env` file, environment variables and the config file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load_from(path)
}
