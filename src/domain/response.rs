//! Validation of the poll response body.
//!
//! The API is expected to answer with
//! `{"homeworks": [...], "current_date": <unix seconds>}`, but the body is
//! handled as a raw [`Value`] so that malformed answers are detected here
//! rather than assumed away by a typed deserializer.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::PollError;

/// How strictly the top-level keys of a response are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Only `homeworks` is required.
    #[default]
    Lenient,
    /// Both `homeworks` and `current_date` are required.
    Strict,
}

impl ValidationMode {
    #[must_use]
    pub const fn from_strict_flag(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Returns true for values that count as "nothing": null, false, zero, and
/// empty strings, arrays or objects.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Unwrap a one-element array to its sole element.
///
/// The upstream occasionally answers with `[{...}]` instead of `{...}`.
#[must_use]
pub fn unwrap_single(value: &Value) -> &Value {
    match value.as_array() {
        Some(items) if items.len() == 1 => &items[0],
        _ => value,
    }
}

/// Extract the list of homework records from a decoded response.
///
/// # Errors
///
/// - [`PollError::EmptyResponse`] if the input is falsy
/// - [`PollError::UnexpectedShape`] if the (unwrapped) input is not an object
///   or `homeworks` is not an array
/// - [`PollError::MissingField`] if `homeworks` is absent, or in
///   [`ValidationMode::Strict`] if `current_date` is absent
pub fn extract_homeworks(response: &Value, mode: ValidationMode) -> Result<&[Value], PollError> {
    debug!("Checking poll response");

    if is_falsy(response) {
        error!("There is no response");
        return Err(PollError::EmptyResponse);
    }

    let response = unwrap_single(response);
    let Some(fields) = response.as_object() else {
        error!("Response is not a dictionary");
        return Err(PollError::UnexpectedShape {
            context: "response is not a dictionary",
        });
    };

    if !fields.contains_key("homeworks") {
        error!("There is no \"homeworks\" in response");
        return Err(PollError::MissingField {
            field: "homeworks",
            context: "response",
        });
    }
    if mode == ValidationMode::Strict && !fields.contains_key("current_date") {
        error!("There is no \"current_date\" in response");
        return Err(PollError::MissingField {
            field: "current_date",
            context: "response",
        });
    }

    match fields.get("homeworks") {
        Some(Value::Array(homeworks)) => Ok(homeworks.as_slice()),
        _ => {
            error!("The list of homeworks is not a list");
            Err(PollError::UnexpectedShape {
                context: "homeworks is not a list",
            })
        }
    }
}

/// Server timestamp carried by a response, if present and integral.
#[must_use]
pub fn current_date(response: &Value) -> Option<i64> {
    unwrap_single(response).get("current_date")?.as_i64()
}
