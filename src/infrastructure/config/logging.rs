//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// Single-line human-readable output.
    Compact,
    /// One JSON object per line.
    Json,
}

/// Logging configuration (`[logging]` table).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Level after applying `-v`/`-q` from the command line.
    ///
    /// Quiet wins over verbose.
    #[must_use]
    pub fn effective_level(&self, verbose: u8, quiet: bool) -> String {
        if quiet {
            return "warn".into();
        }
        match verbose {
            0 => self.level.clone(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Logs go to
    /// stderr so command output on stdout stays machine-readable.
    pub fn init(&self, verbose: u8, quiet: bool) {
        let level = self.effective_level(verbose, quiet);
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

        // A subscriber may already be installed (tests); keep the first one.
        let _ = match self.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Compact => builder.compact().try_init(),
            LogFormat::Pretty => builder.try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        let config = LoggingConfig::default();
        assert_eq!(config.effective_level(0, false), "info");
        assert_eq!(config.effective_level(1, false), "debug");
        assert_eq!(config.effective_level(3, false), "trace");
    }

    #[test]
    fn quiet_overrides_verbose() {
        let config = LoggingConfig::default();
        assert_eq!(config.effective_level(2, true), "warn");
    }

    #[test]
    fn format_parses_lowercase() {
        let config: LoggingConfig = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "info");
    }
}
