//! Configuration resolution for CLI invocations.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::command::Cli;
use super::diagnostic::ConfigDiagnostic;
use super::CliError;
use crate::error::{ConfigError, Error};
use crate::infrastructure::config::settings::{Config, DEFAULT_CONFIG_FILE};

/// Pick the config file to read.
///
/// An explicit `--config` must exist; the default file is optional.
fn config_path(cli: &Cli) -> Option<PathBuf> {
    match &cli.config {
        Some(path) => Some(path.clone()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.exists().then_some(default)
        }
    }
}

fn load_file(path: &Path) -> Result<Config, CliError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| Error::from(ConfigError::ReadFile(e)))?;
    match Config::parse_toml(&content) {
        Ok(config) => Ok(config),
        Err(Error::Config(ConfigError::Parse(err))) => Err(CliError::Config(
            ConfigDiagnostic::from_toml(&path.display().to_string(), &content, &err),
        )),
        Err(e) => Err(e.into()),
    }
}

/// Resolve the effective configuration: file (or defaults), environment,
/// then the `--database` flag.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed or validated.
pub fn resolve(cli: &Cli) -> Result<Config, CliError> {
    let config = match config_path(cli) {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration");
            load_file(&path)?
        }
        None => Config::from_env()?,
    };

    match &cli.database {
        Some(url) => Ok(config.with_database_url(url.clone())?),
        None => Ok(config),
    }
}
