//! Message delivery port.

use async_trait::async_trait;

use crate::error::NotifyError;

/// Transport capable of delivering a plain text message to a chat.
///
/// Implementations report failures; the application-level `Notifier` is the
/// one that swallows them.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver `text` to `chat_id`.
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), NotifyError>;

    /// Transport name for logging.
    fn name(&self) -> &'static str;
}
