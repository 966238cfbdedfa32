//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::practicum::PracticumClient;
use crate::application::{Notifier, Poller};
use crate::error::Result;
use crate::infrastructure::config::credentials::Credentials;
use crate::infrastructure::config::settings::Config;
use crate::port::MessageSender;

/// Build the message sender for the configured bot.
#[cfg(feature = "telegram")]
pub fn build_sender(credentials: &Credentials) -> Arc<dyn MessageSender> {
    use crate::adapter::outbound::notifier::telegram::TelegramSender;

    let token = credentials.telegram_token.as_deref().unwrap_or_default();
    Arc::new(TelegramSender::new(token))
}

/// Build the message sender (non-Telegram variant).
///
/// Messages only go to the log when the `telegram` feature is disabled.
#[cfg(not(feature = "telegram"))]
pub fn build_sender(_credentials: &Credentials) -> Arc<dyn MessageSender> {
    use crate::adapter::outbound::notifier::log::LogSender;

    warn!("Built without the telegram feature, messages will only be logged");
    Arc::new(LogSender)
}

/// Check that the secrets are present.
///
/// With `startup.require_credentials` the first missing secret is an error;
/// otherwise the missing names are logged and startup continues.
///
/// # Errors
///
/// Returns a configuration error naming the first missing variable.
#[allow(clippy::result_large_err)]
pub fn check_credentials(config: &Config, credentials: &Credentials) -> Result<()> {
    if credentials.all_present() {
        return Ok(());
    }
    if config.startup.require_credentials {
        return credentials.require_all();
    }
    warn!(
        missing = ?credentials.missing(),
        "Credentials missing, continuing anyway"
    );
    Ok(())
}

/// Wire the poll loop from configuration and credentials.
///
/// # Errors
///
/// Returns an error if credentials are required but missing, `CHAT_ID` is
/// not an integer, or the HTTP client cannot be built.
#[allow(clippy::result_large_err)]
pub fn build_poller(config: &Config, credentials: &Credentials) -> Result<Poller> {
    check_credentials(config, credentials)?;

    let client = PracticumClient::new(
        config.endpoint_url()?,
        credentials.practicum_token.clone().unwrap_or_default(),
        config.request_timeout(),
    )?;
    let chat_id = credentials.chat_id()?.unwrap_or_default();
    let sender = build_sender(credentials);
    info!(
        endpoint = %client.endpoint(),
        transport = sender.name(),
        chat_id,
        "Poller wired"
    );

    Ok(Poller::new(
        Arc::new(client),
        Notifier::new(sender, chat_id),
        config.poller_config(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error};

    fn full_credentials() -> Credentials {
        Credentials {
            practicum_token: Some("p".into()),
            telegram_token: Some("123:abc".into()),
            chat_id: Some("42".into()),
        }
    }

    #[test]
    fn missing_secret_fails_fast_by_default() {
        let credentials = Credentials {
            telegram_token: None,
            ..full_credentials()
        };
        let result = check_credentials(&Config::default(), &credentials);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField {
                field: "TELEGRAM_TOKEN"
            }))
        ));
    }

    #[test]
    fn missing_secret_tolerated_when_not_required() {
        let mut config = Config::default();
        config.startup.require_credentials = false;
        assert!(check_credentials(&config, &Credentials::default()).is_ok());
    }

    #[tokio::test]
    async fn builds_poller_with_configured_interval() {
        let config = Config::parse_toml("[api]\nretry_interval_secs = 10\n").unwrap();
        let poller = build_poller(&config, &full_credentials()).unwrap();
        assert_eq!(poller.config().retry_interval.as_secs(), 10);
        assert!(poller.state().since.is_some());
    }

    #[tokio::test]
    async fn invalid_chat_id_is_rejected() {
        let credentials = Credentials {
            chat_id: Some("me".into()),
            ..full_credentials()
        };
        assert!(matches!(
            build_poller(&Config::default(), &credentials),
            Err(Error::Config(ConfigError::InvalidValue { field: "CHAT_ID", .. }))
        ));
    }
}
