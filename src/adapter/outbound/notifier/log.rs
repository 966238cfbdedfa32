//! Log-only sender.

use async_trait::async_trait;
use tracing::info;

use crate::error::NotifyError;
use crate::port::MessageSender;

/// Sender that writes messages to the log instead of delivering them.
///
/// Used when the binary is built without the `telegram` feature.
pub struct LogSender;

#[async_trait]
impl MessageSender for LogSender {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), NotifyError> {
        info!(chat_id, text, "Message (log only)");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
