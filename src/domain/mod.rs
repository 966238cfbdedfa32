//! Homework records and poll response validation.

mod homework;
mod response;

pub use homework::{format_status, Homework, HomeworkStatus};
pub use response::{current_date, extract_homeworks, is_falsy, unwrap_single, ValidationMode};
