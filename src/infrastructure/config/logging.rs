//! Logging configuration and initialization.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
    /// Write logs to this file instead of stderr. The file is truncated on
    /// every start.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogFile`] if the log file cannot be created.
    #[allow(clippy::result_large_err)]
    pub fn init(&self) -> Result<()> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));
        let json = self.format == "json";

        match &self.file {
            Some(path) => {
                let file = File::create(path).map_err(ConfigError::LogFile)?;
                let builder = fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file));
                if json {
                    builder.json().init();
                } else {
                    builder.init();
                }
            }
            None => {
                let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
                if json {
                    builder.json().init();
                } else {
                    builder.init();
                }
            }
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            file: None,
        }
    }
}
