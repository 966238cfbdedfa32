//! Application configuration loading and validation.
//!
//! Non-secret tunables come from an optional TOML file; every key has a
//! default, so an absent file yields a working configuration. Secrets never
//! come from the file, see [`super::credentials::Credentials`].
//!
//! # Example
//!
//! ```no_run
//! use homework_notifier::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("config.toml")?;
//!     config.logging.init()?;
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use crate::adapter::outbound::practicum::DEFAULT_ENDPOINT;
use crate::application::PollerConfig;
use crate::domain::ValidationMode;
use crate::error::{ConfigError, Result};

/// Review API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Homework statuses endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Seconds to sleep between poll cycles (default: 600).
    #[serde(default = "default_retry_interval_secs")]
    pub retry_interval_secs: u64,
    /// Optional per-request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_retry_interval_secs() -> u64 {
    600
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            retry_interval_secs: default_retry_interval_secs(),
            request_timeout_secs: None,
        }
    }
}

/// Response validation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationConfig {
    /// Require `current_date` in addition to `homeworks`.
    #[serde(default)]
    pub strict_keys: bool,
}

/// Startup behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct StartupConfig {
    /// Refuse to start when a secret is missing. When false, the missing
    /// secrets are only reported and the loop starts anyway.
    #[serde(default = "default_true")]
    pub require_credentials: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            require_credentials: default_true(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub startup: StartupConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for an existing file.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.api.endpoint.is_empty() {
            return Err(ConfigError::MissingField { field: "endpoint" }.into());
        }
        self.endpoint_url()?;
        if self.api.retry_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.api.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than 0 when set".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }
        Ok(())
    }

    /// Parsed API endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the endpoint is not a URL.
    #[allow(clippy::result_large_err)]
    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.api.endpoint).map_err(|e| {
            ConfigError::InvalidValue {
                field: "endpoint",
                reason: e.to_string(),
            }
            .into()
        })
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.api.request_timeout_secs.map(Duration::from_secs)
    }

    #[must_use]
    pub fn poller_config(&self) -> PollerConfig {
        PollerConfig {
            retry_interval: Duration::from_secs(self.api.retry_interval_secs),
            validation: ValidationMode::from_strict_flag(self.validation.strict_keys),
        }
    }
}
