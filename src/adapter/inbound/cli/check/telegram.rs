use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap::build_sender;
use crate::infrastructure::config::credentials::{Credentials, CHAT_ID, TELEGRAM_TOKEN};

const TEST_MESSAGE: &str = "homework-notifier: проверка связи";

/// Send a test message to the configured chat.
pub async fn execute_telegram(credentials: &Credentials) -> Result<()> {
    let Some(token) = credentials.telegram_token.as_deref() else {
        return Err(ConfigError::MissingField {
            field: TELEGRAM_TOKEN,
        }
        .into());
    };
    let chat_id = credentials
        .chat_id()?
        .ok_or(ConfigError::MissingField { field: CHAT_ID })?;

    output::section("Telegram Check");
    output::field("Bot token", mask_token(token));
    output::field("Chat ID", chat_id);

    let sender = build_sender(credentials);
    sender.send_text(chat_id, TEST_MESSAGE).await?;

    output::success("Test message sent");
    Ok(())
}

/// Keep only the bot id and the last few characters of a token.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() >= 15 {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{head}...{tail}")
    } else {
        let head: String = chars.iter().take(4).collect();
        format!("{head}...")
    }
}
