use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to open log file: {0}")]
    LogFile(#[source] std::io::Error),
}

/// Everything that can go wrong inside a single poll cycle.
///
/// The validation variants come from the response validator and the status
/// formatter; `Transport` and `Decode` come from the HTTP collaborator. The
/// poll loop treats all of them the same way (see [`PollError::user_message`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    #[error("response status code is not 200, but {status}")]
    NonSuccessStatus { status: u16 },

    #[error("unexpected shape: {context}")]
    UnexpectedShape { context: &'static str },

    #[error("there is no response")]
    EmptyResponse,

    #[error("there is no \"{field}\" in {context}")]
    MissingField {
        field: &'static str,
        context: &'static str,
    },

    #[error("unknown homework status: {status}")]
    UnknownStatus { status: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode response body: {0}")]
    Decode(String),
}

/// Fixed user-facing sentence sent when a poll cycle fails.
pub const FAILURE_MESSAGE: &str = "Сбой в работе программы";

impl PollError {
    /// Convert any poll failure into the message shown to the user.
    ///
    /// Every kind collapses to the same sentence; the distinction survives only
    /// in the logs.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NonSuccessStatus { .. }
            | Self::UnexpectedShape { .. }
            | Self::EmptyResponse
            | Self::MissingField { .. }
            | Self::UnknownStatus { .. }
            | Self::Transport(_)
            | Self::Decode(_) => FAILURE_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for PollError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Errors raised by a message sender when delivery fails.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("delivery failed: {0}")]
    Delivery(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Poll(#[from] PollError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
