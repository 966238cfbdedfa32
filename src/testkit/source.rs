//! Scripted homework source.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::PollError;
use crate::port::HomeworkSource;

#[derive(Default)]
struct Script {
    results: VecDeque<Result<Value, PollError>>,
    requested: Vec<Option<i64>>,
}

/// A source that pops one pre-loaded result per fetch.
///
/// Clones share the same script, so a test can keep a handle after moving a
/// clone into the poller. An exhausted script answers with a transport error.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    script: Arc<Mutex<Script>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, response: Value) {
        self.lock().results.push_back(Ok(response));
    }

    pub fn push_err(&self, error: PollError) {
        self.lock().results.push_back(Err(error));
    }

    /// `since` arguments of every fetch so far, in call order.
    pub fn requested_since(&self) -> Vec<Option<i64>> {
        self.lock().requested.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().expect("lock scripted source")
    }
}

#[async_trait]
impl HomeworkSource for ScriptedSource {
    async fn fetch(&self, since: Option<i64>) -> Result<Value, PollError> {
        let mut script = self.lock();
        script.requested.push(since);
        script
            .results
            .pop_front()
            .unwrap_or_else(|| Err(PollError::Transport("script exhausted".to_string())))
    }
}
