//! Recording message sender.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::NotifyError;
use crate::port::MessageSender;

#[derive(Default)]
struct Record {
    sent: Vec<(i64, String)>,
    attempts: usize,
}

/// Thread-safe delivery recorder for notification assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingSender {
    record: Arc<Mutex<Record>>,
    fail: bool,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every delivery fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Successfully delivered `(chat_id, text)` pairs.
    pub fn sent(&self) -> Vec<(i64, String)> {
        self.lock().sent.clone()
    }

    /// Successfully delivered texts.
    pub fn texts(&self) -> Vec<String> {
        self.lock().sent.iter().map(|(_, text)| text.clone()).collect()
    }

    /// Delivery attempts, including failed ones.
    pub fn attempts(&self) -> usize {
        self.lock().attempts
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Record> {
        self.record.lock().expect("lock recording sender")
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), NotifyError> {
        let mut record = self.lock();
        record.attempts += 1;
        if self.fail {
            return Err(NotifyError::Delivery("recording sender set to fail".into()));
        }
        record.sent.push((chat_id, text.to_string()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
