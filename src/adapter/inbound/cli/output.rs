//! Terminal output for CLI handlers.
//!
//! Human-readable output uses colored symbols; `--json` switches every line
//! to a `{"type": ..., "payload": ...}` object for scripting. Status messages
//! produced by a poll cycle are printed as-is so they can be piped elsewhere.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn current() -> OutputConfig {
    let cell = OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()));
    match cell.read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    let cell = OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()));
    match cell.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// One line of CLI output.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    Section(&'a str),
    Field(&'a str, String),
    Success(&'a str),
    Warning(&'a str),
    Error(&'a str),
    Message(&'a str),
}

impl Line<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Section(_) => "section",
            Self::Field(..) => "field",
            Self::Success(_) => "success",
            Self::Warning(_) => "warning",
            Self::Error(_) => "error",
            Self::Message(_) => "message",
        }
    }

    fn payload(&self) -> Value {
        match self {
            Self::Section(title) => json!({ "title": title }),
            Self::Field(label, value) => json!({ "label": label, "value": value }),
            Self::Success(message) | Self::Warning(message) | Self::Error(message) => {
                json!({ "message": message })
            }
            Self::Message(text) => json!({ "text": text }),
        }
    }

    fn to_json(&self) -> Value {
        json!({ "type": self.kind(), "payload": self.payload() })
    }

    /// Warnings, errors and status messages survive `--quiet`.
    const fn essential(&self) -> bool {
        matches!(self, Self::Warning(_) | Self::Error(_) | Self::Message(_))
    }

    fn render(&self) -> String {
        match self {
            Self::Section(title) => format!("\n{}", title.bold()),
            Self::Field(label, value) => format!("  {:<16} {}", label.dimmed(), value),
            Self::Success(message) => format!("  {} {}", "✓".green(), message),
            Self::Warning(message) => format!("  {} {}", "⚠".yellow(), message),
            Self::Error(message) => format!("  {} {}", "×".red(), message),
            Self::Message(text) => (*text).to_string(),
        }
    }
}

fn emit(line: &Line<'_>) {
    let config = current();
    let to_stderr = matches!(line, Line::Error(_));

    let text = if config.json {
        line.to_json().to_string()
    } else if config.quiet && !line.essential() {
        return;
    } else {
        line.render()
    };

    if to_stderr {
        eprintln!("{text}");
    } else {
        println!("{text}");
    }
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    emit(&Line::Field(label, value.to_string()));
}

/// Print a success line.
pub fn success(message: &str) {
    emit(&Line::Success(message));
}

/// Print a warning line. Shown even in quiet mode.
pub fn warning(message: &str) {
    emit(&Line::Warning(message));
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    emit(&Line::Error(message));
}

/// Print a section header.
pub fn section(title: &str) {
    emit(&Line::Section(title));
}

/// Print a homework status message verbatim. Shown even in quiet mode.
pub fn message(text: &str) {
    emit(&Line::Message(text));
}
