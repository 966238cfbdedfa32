//! Secrets read from the process environment.

use crate::error::{ConfigError, Result};

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const CHAT_ID: &str = "CHAT_ID";

/// The three secrets the notifier needs. Any of them may be missing.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub practicum_token: Option<String>,
    pub telegram_token: Option<String>,
    pub chat_id: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &self.practicum_token.as_ref().map(|_| "***"))
            .field("telegram_token", &self.telegram_token.as_ref().map(|_| "***"))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl Credentials {
    /// Read credentials from environment variables. Empty values count as
    /// missing.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            practicum_token: get(PRACTICUM_TOKEN),
            telegram_token: get(TELEGRAM_TOKEN),
            chat_id: get(CHAT_ID),
        }
    }

    /// Whether every secret is present.
    #[must_use]
    pub fn all_present(&self) -> bool {
        self.missing().is_empty()
    }

    /// Names of the environment variables that are not set.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (PRACTICUM_TOKEN, self.practicum_token.is_some()),
            (TELEGRAM_TOKEN, self.telegram_token.is_some()),
            (CHAT_ID, self.chat_id.is_some()),
        ]
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name)
        .collect()
    }

    /// Fail with the first missing secret, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] naming the variable.
    #[allow(clippy::result_large_err)]
    pub fn require_all(&self) -> Result<()> {
        match self.missing().first().copied() {
            Some(field) => Err(ConfigError::MissingField { field }.into()),
            None => Ok(()),
        }
    }

    /// Chat id parsed as an integer; `Ok(None)` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `CHAT_ID` is not an integer.
    #[allow(clippy::result_large_err)]
    pub fn chat_id(&self) -> Result<Option<i64>> {
        self.chat_id
            .as_deref()
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|e| {
                    ConfigError::InvalidValue {
                        field: CHAT_ID,
                        reason: e.to_string(),
                    }
                    .into()
                })
            })
            .transpose()
    }
}
