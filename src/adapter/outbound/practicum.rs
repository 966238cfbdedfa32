//! HTTP client for the homework review API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use crate::error::{PollError, Result};
use crate::port::HomeworkSource;

/// Default homework statuses endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Review API client authenticated with an OAuth token.
pub struct PracticumClient {
    client: Client,
    endpoint: Url,
    token: String,
}

impl PracticumClient {
    /// Build a client for `endpoint`.
    ///
    /// Without a `timeout` a request may wait on the server indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: Url, token: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
            token: token.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, since: Option<i64>) -> std::result::Result<Value, PollError> {
        // A zero timestamp counts as "not set", same as a missing one.
        let from_date = since
            .filter(|ts| *ts != 0)
            .unwrap_or_else(|| chrono::Utc::now().timestamp());

        debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Homework API request failed");
                PollError::from(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(status = status.as_u16(), "Response status code is not 200");
            return Err(PollError::NonSuccessStatus {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            error!(error = %e, "Response body is not valid JSON");
            PollError::Decode(e.to_string())
        })?;

        if !body.is_object() {
            error!("Response body is not a dictionary");
            return Err(PollError::UnexpectedShape {
                context: "response body is not a dictionary",
            });
        }

        Ok(body)
    }
}
