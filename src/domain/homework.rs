//! Homework records and their review verdicts.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use tracing::error;

use super::response::unwrap_single;
use crate::error::PollError;

/// Review status reported by the API for a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    /// The reviewer accepted the work.
    Approved,
    /// The work is being reviewed.
    Reviewing,
    /// The reviewer returned the work with remarks.
    Rejected,
}

impl HomeworkStatus {
    /// All recognised statuses.
    pub const ALL: [Self; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Status code as it appears on the wire.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Localized verdict sentence shown to the user.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for HomeworkStatus {
    type Err = PollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| PollError::UnknownStatus {
                status: s.to_string(),
            })
    }
}

/// A validated homework record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    name: String,
    status: HomeworkStatus,
}

impl Homework {
    pub fn new(name: impl Into<String>, status: HomeworkStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    /// Build a record from a decoded JSON value.
    ///
    /// A one-element array is unwrapped to its sole element first. Both
    /// `homework_name` and `status` must be present and the status must be
    /// one of the known codes.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::MissingField`] when a key is absent,
    /// [`PollError::UnknownStatus`] for an unrecognised status and
    /// [`PollError::UnexpectedShape`] when the value is not an object.
    pub fn from_value(record: &Value) -> Result<Self, PollError> {
        let record = unwrap_single(record);
        let Some(fields) = record.as_object() else {
            error!("Homework record is not a dictionary");
            return Err(PollError::UnexpectedShape {
                context: "homework record is not a dictionary",
            });
        };

        let Some(name) = fields.get("homework_name") else {
            error!("There is no homework_name in list of homeworks");
            return Err(PollError::MissingField {
                field: "homework_name",
                context: "homework record",
            });
        };
        let Some(status) = fields.get("status") else {
            error!("There is no status in list of homeworks");
            return Err(PollError::MissingField {
                field: "status",
                context: "homework record",
            });
        };

        let status = match status {
            Value::String(code) => code.parse(),
            other => Err(PollError::UnknownStatus {
                status: other.to_string(),
            }),
        }
        .map_err(|e| {
            error!(error = %e, "Incorrect status of homework");
            e
        })?;

        Ok(Self {
            name: display_name(name),
            status,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn status(&self) -> HomeworkStatus {
        self.status
    }

    /// Sentence announcing the status change of this homework.
    #[must_use]
    pub fn status_message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

/// Strings are used verbatim; any other JSON value is rendered as JSON.
fn display_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Format the status message for one homework record.
///
/// # Errors
///
/// See [`Homework::from_value`].
pub fn format_status(record: &Value) -> Result<String, PollError> {
    Homework::from_value(record).map(|homework| homework.status_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn approved_record_formats_exact_sentence() {
        let record = json!({"homework_name": "Project X", "status": "approved"});
        assert_eq!(
            format_status(&record).unwrap(),
            "Изменился статус проверки работы \"Project X\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn each_status_uses_its_verdict() {
        for status in HomeworkStatus::ALL {
            let record = json!({"homework_name": "hw", "status": status.code()});
            let message = format_status(&record).unwrap();
            assert!(message.ends_with(status.verdict()), "{message}");
        }
    }

    #[test]
    fn single_element_array_is_unwrapped() {
        let record = json!({"homework_name": "Project X", "status": "reviewing"});
        let wrapped = json!([record.clone()]);
        assert_eq!(format_status(&wrapped), format_status(&record));
    }

    #[test]
    fn missing_name_is_reported() {
        let record = json!({"status": "approved"});
        assert_eq!(
            format_status(&record),
            Err(PollError::MissingField {
                field: "homework_name",
                context: "homework record",
            })
        );
    }

    #[test]
    fn missing_status_is_reported() {
        let record = json!({"homework_name": "hw"});
        assert_eq!(
            format_status(&record),
            Err(PollError::MissingField {
                field: "status",
                context: "homework record",
            })
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        for status in [json!("pending"), json!("Approved"), json!(""), json!(1), json!(null)] {
            let record = json!({"homework_name": "hw", "status": status});
            assert!(
                matches!(format_status(&record), Err(PollError::UnknownStatus { .. })),
                "status {status} should be unknown"
            );
        }
    }

    #[test]
    fn non_object_record_is_unexpected_shape() {
        let record = json!("homework_name status");
        assert!(matches!(
            format_status(&record),
            Err(PollError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn parsed_record_equals_constructed_one() {
        let record = json!({"homework_name": "Project X", "status": "rejected"});
        let expected = Homework::new("Project X", HomeworkStatus::Rejected);

        assert_eq!(Homework::from_value(&record).unwrap(), expected);
        assert_eq!(format_status(&record).unwrap(), expected.status_message());
    }

    #[test]
    fn status_parses_from_code() {
        assert_eq!("rejected".parse(), Ok(HomeworkStatus::Rejected));
        assert_eq!(HomeworkStatus::Reviewing.to_string(), "reviewing");
    }

    #[test]
    fn non_string_name_is_rendered_as_json() {
        let record = json!({"homework_name": 42, "status": "rejected"});
        let homework = Homework::from_value(&record).unwrap();
        assert_eq!(homework.name(), "42");
        assert_eq!(homework.status(), HomeworkStatus::Rejected);
    }
}
