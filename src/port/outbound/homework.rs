//! Homework source port.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::PollError;

/// Source of poll responses.
///
/// One call performs exactly one request; retrying is the caller's business.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetch homework statuses changed since `since` (unix seconds).
    ///
    /// When `since` is `None` the current time is used.
    async fn fetch(&self, since: Option<i64>) -> Result<Value, PollError>;
}
