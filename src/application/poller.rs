//! The poll loop.
//!
//! Each cycle fetches changes since the rolling timestamp, validates the
//! response, announces the first homework record and then sleeps for a fixed
//! interval. Failures of any kind are collapsed into one user-facing sentence
//! which is sent once per failure streak.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::Notifier;
use crate::domain::{current_date, extract_homeworks, format_status, ValidationMode};
use crate::error::PollError;
use crate::port::HomeworkSource;

/// Tunables of the poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    /// Pause between the end of one cycle and the start of the next.
    pub retry_interval: Duration,
    /// Key checks applied to each response.
    pub validation: ValidationMode,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            retry_interval: Duration::from_secs(600),
            validation: ValidationMode::Lenient,
        }
    }
}

/// State carried from one cycle to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound for the next fetch; `None` means "now".
    pub since: Option<i64>,
    /// Text of the last message handed to the notifier.
    pub last_message: Option<String>,
}

/// Result of a single cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The response carried no homework records.
    NoChanges,
    /// A status message was produced and handed to the notifier.
    Notified(String),
    /// The cycle failed; `notified` tells whether the failure message was sent.
    Failed { error: PollError, notified: bool },
}

pub struct Poller {
    source: Arc<dyn HomeworkSource>,
    notifier: Notifier,
    config: PollerConfig,
    state: PollState,
}

impl Poller {
    /// Create a poller whose first fetch starts from the current time.
    #[must_use]
    pub fn new(source: Arc<dyn HomeworkSource>, notifier: Notifier, config: PollerConfig) -> Self {
        Self {
            source,
            notifier,
            config,
            state: PollState {
                since: Some(chrono::Utc::now().timestamp()),
                last_message: None,
            },
        }
    }

    /// Override the timestamp used by the next fetch.
    #[must_use]
    pub fn with_since(mut self, since: Option<i64>) -> Self {
        self.state.since = since;
        self
    }

    #[must_use]
    pub fn state(&self) -> &PollState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &PollerConfig {
        &self.config
    }

    /// Run one cycle without sleeping.
    pub async fn poll_once(&mut self) -> CycleOutcome {
        match self.try_cycle().await {
            Ok(Some(message)) => CycleOutcome::Notified(message),
            Ok(None) => {
                debug!(since = ?self.state.since, "No homework updates");
                CycleOutcome::NoChanges
            }
            Err(error) => {
                warn!(error = %error, "Poll cycle failed");
                let notified = self.report_failure(&error).await;
                CycleOutcome::Failed { error, notified }
            }
        }
    }

    /// Poll forever, sleeping `retry_interval` after every cycle.
    pub async fn run(mut self) {
        info!(
            interval_secs = self.config.retry_interval.as_secs(),
            chat_id = self.notifier.chat_id(),
            "Poll loop started"
        );

        loop {
            self.poll_once().await;
            tokio::time::sleep(self.config.retry_interval).await;
        }
    }

    async fn try_cycle(&mut self) -> Result<Option<String>, PollError> {
        let response = self.source.fetch(self.state.since).await?;
        let homeworks = extract_homeworks(&response, self.config.validation)?;
        self.state.since = current_date(&response);

        let Some(first) = homeworks.first() else {
            return Ok(None);
        };

        let message = format_status(first)?;
        info!(message = %message, "Homework status changed");
        self.notifier.notify(&message).await;
        self.state.last_message = Some(message.clone());
        Ok(Some(message))
    }

    /// Send the failure sentence unless it was the last thing sent.
    async fn report_failure(&mut self, error: &PollError) -> bool {
        let text = error.user_message();
        if self.state.last_message.as_deref() == Some(text) {
            debug!("Failure already reported, not notifying again");
            return false;
        }

        self.state.last_message = Some(text.to_string());
        self.notifier.notify(text).await;
        true
    }
}
