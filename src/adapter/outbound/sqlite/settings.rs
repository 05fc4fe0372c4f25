//! SQLite connection settings.

use serde::Deserialize;

use crate::error::ConfigError;

/// Default database location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "tracker.db";

/// Database configuration (`[database]` table).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite path, `file:` URI or `:memory:`.
    pub url: String,
    /// Maximum number of pooled connections.
    pub pool_size: u32,
    /// How long a connection waits on a locked database before failing.
    pub busy_timeout_ms: u64,
}

impl DatabaseConfig {
    /// Settings for the given URL with default pool parameters.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Settings for a private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` opens its own database, so the
    /// pool is pinned to a single connection.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: ":memory:".into(),
            pool_size: 1,
            ..Self::default()
        }
    }

    /// Check the settings for values the pool cannot work with.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for an empty URL or a zero pool size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.url",
                reason: "must not be empty".into(),
            });
        }
        if self.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.pool_size",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.into(),
            pool_size: 5,
            busy_timeout_ms: 5000,
        }
    }
}
