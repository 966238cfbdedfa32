//! Best-effort message delivery.

use std::sync::Arc;

use tracing::{error, info};

use crate::port::MessageSender;

/// Delivers messages to the configured chat and never fails.
///
/// Delivery errors are logged and dropped so that a broken transport cannot
/// take the poll loop down with it.
#[derive(Clone)]
pub struct Notifier {
    sender: Arc<dyn MessageSender>,
    chat_id: i64,
}

impl Notifier {
    #[must_use]
    pub fn new(sender: Arc<dyn MessageSender>, chat_id: i64) -> Self {
        Self { sender, chat_id }
    }

    #[must_use]
    pub const fn chat_id(&self) -> i64 {
        self.chat_id
    }

    /// Attempt to deliver `text`.
    pub async fn notify(&self, text: &str) {
        match self.sender.send_text(self.chat_id, text).await {
            Ok(()) => info!(
                chat_id = self.chat_id,
                transport = self.sender.name(),
                "Message sent"
            ),
            Err(e) => error!(
                chat_id = self.chat_id,
                transport = self.sender.name(),
                error = %e,
                "Failed to send message"
            ),
        }
    }
}
