//! Miette-based error diagnostics for CLI error presentation.
//!
//! Configuration parse errors are shown with the offending TOML snippet and
//! a label on the failing span.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(parcel_tracker::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// The configuration file content.
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Suggestion for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Build a diagnostic from a TOML parse failure in `src`.
    #[must_use]
    pub fn from_toml(name: &str, src: &str, err: &toml::de::Error) -> Self {
        let span = err
            .span()
            .map_or_else(|| (0, 0).into(), |range| (range.start, range.len()).into());
        Self {
            message: format!("invalid configuration: {}", err.message().trim()),
            src: NamedSource::new(name, src.to_string()),
            span,
            help: Some(
                "supported sections are [database] (url, pool_size, busy_timeout_ms) \
                 and [logging] (level, format = pretty | compact | json)"
                    .into(),
            ),
        }
    }
}
