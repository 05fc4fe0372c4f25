//! Terminal output formatting.
//!
//! Human mode prints indented, colored lines to stdout. JSON mode prints one
//! object per line, `{"type": ..., "payload": ...}`, so scripts can consume
//! the output line by line. Errors always go to stderr.

use std::fmt::Display;

use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde_json::{json, Value};

/// Output mode chosen by the global CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Machine-readable JSON lines instead of text.
    pub json: bool,
    /// Drop informational text. Warnings, errors and JSON are kept.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }

    fn shows_text(self) -> bool {
        !self.json && !self.quiet
    }
}

static MODE: RwLock<OutputConfig> = RwLock::new(OutputConfig::new(false, false));

fn mode() -> OutputConfig {
    *MODE.read()
}

fn envelope(kind: &str, payload: Value) -> Value {
    json!({ "type": kind, "payload": payload })
}

/// Set the output mode for the rest of the process.
pub fn configure(config: OutputConfig) {
    *MODE.write() = config;
}

/// Whether JSON lines are being emitted.
#[must_use]
pub fn is_json() -> bool {
    mode().json
}

/// Print one JSON line of the given type.
pub fn record(kind: &str, payload: Value) {
    println!("{}", envelope(kind, payload));
}

/// Print a `label  value` pair.
pub fn field(label: &str, value: impl Display) {
    let mode = mode();
    if mode.json {
        record("field", json!({ "label": label, "value": value.to_string() }));
    } else if mode.shows_text() {
        println!("  {:<10} {value}", label.dimmed());
    }
}

pub fn success(message: &str) {
    let mode = mode();
    if mode.json {
        record("success", json!({ "message": message }));
    } else if mode.shows_text() {
        println!("  {} {message}", "✓".green());
    }
}

/// Print a non-fatal problem. Shown even in quiet mode.
pub fn warning(message: &str) {
    if is_json() {
        record("warning", json!({ "message": message }));
    } else {
        println!("  {} {message}", "!".yellow());
    }
}

/// Print a fatal error to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", envelope("error", json!({ "message": message })));
    } else {
        eprintln!("  {} {message}", "×".red());
    }
}

/// Print a bold heading.
pub fn section(title: &str) {
    let mode = mode();
    if mode.json {
        record("section", json!({ "title": title }));
    } else if mode.shows_text() {
        println!("{}", title.bold());
    }
}

/// Print a pre-rendered block such as a table, indented by two spaces.
pub fn lines(content: &str) {
    let mode = mode();
    if mode.json {
        record("lines", json!({ "content": content }));
    } else if mode.shows_text() {
        content.lines().for_each(|line| println!("  {line}"));
    }
}

pub fn highlight(value: impl Display) -> String {
    value.to_string().cyan().to_string()
}

pub fn muted(value: impl Display) -> String {
    value.to_string().dimmed().to_string()
}
