//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from an optional TOML file; the database location
//! can be overridden through the `PARCEL_DATABASE_URL` environment variable.
//!
//! # Example
//!
//! ```no_run
//! use parcel_tracker::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("parcel-tracker.toml")?;
//!     config.init_logging(0, false);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::adapter::outbound::sqlite::settings::DatabaseConfig;
use crate::error::{ConfigError, Result};

/// Environment variable overriding `database.url`.
pub const DATABASE_URL_ENV: &str = "PARCEL_DATABASE_URL";

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "parcel-tracker.toml";

/// Main application configuration.
///
/// Every section is optional; an empty file yields [`Config::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// SQLite database settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse and validate configuration from TOML text.
    ///
    /// Environment overrides are applied from the process environment.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the text does not parse or fails validation.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Like [`Config::parse_toml`], reading overrides through `env`.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the text does not parse or fails validation.
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the file cannot be read or is invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Defaults plus environment overrides, for running without a file.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if an override is invalid.
    pub fn from_env() -> Result<Self> {
        Self::parse_toml("")
    }

    /// Replace the database URL, e.g. from a command-line flag.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the URL is empty.
    pub fn with_database_url(mut self, url: impl Into<String>) -> Result<Self> {
        self.database.url = url.into();
        self.validate()?;
        Ok(self)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self, verbose: u8, quiet: bool) {
        self.logging.init(verbose, quiet);
    }

    fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env(DATABASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.database.url = url;
        }
    }

    fn validate(&self) -> Result<()> {
        self.database.validate()?;
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "logging.level",
            }
            .into());
        }
        Ok(())
    }
}
