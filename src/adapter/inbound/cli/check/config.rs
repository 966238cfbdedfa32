use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::credentials::{
    Credentials, CHAT_ID, PRACTICUM_TOKEN, TELEGRAM_TOKEN,
};
use crate::infrastructure::config::settings::Config;

/// Validate the configuration file and report which secrets are set.
///
/// Missing secrets are reported as warnings; only an invalid configuration
/// file or a malformed `CHAT_ID` fails the command.
pub fn execute_config(config_path: &Path, credentials: &Credentials) -> Result<()> {
    let config = Config::load_or_default(config_path)?;

    output::section("Configuration Check");
    if config_path.exists() {
        output::field("Config", config_path.display());
        output::success("Configuration file is valid");
    } else {
        output::field("Config", "defaults (file not found)");
    }

    output::section("Summary");
    output::field("Endpoint", &config.api.endpoint);
    output::field(
        "Retry interval",
        format!("{}s", config.api.retry_interval_secs),
    );
    output::field(
        "Request timeout",
        config
            .api
            .request_timeout_secs
            .map_or_else(|| "none".to_string(), |secs| format!("{secs}s")),
    );
    output::field("Strict keys", config.validation.strict_keys);
    output::field(
        "Require secrets",
        config.startup.require_credentials,
    );

    output::section("Secrets");
    credentials.chat_id()?;
    for (name, present) in [
        (PRACTICUM_TOKEN, credentials.practicum_token.is_some()),
        (TELEGRAM_TOKEN, credentials.telegram_token.is_some()),
        (CHAT_ID, credentials.chat_id.is_some()),
    ] {
        if present {
            output::success(&format!("{name} is set"));
        } else {
            output::warning(&format!("{name} is not set"));
        }
    }

    if credentials.all_present() {
        output::success("All secrets present");
    } else if config.startup.require_credentials {
        output::warning("The poll loop will refuse to start until every secret is set");
    } else {
        output::warning("The poll loop will start, but requests or deliveries will fail");
    }

    Ok(())
}
