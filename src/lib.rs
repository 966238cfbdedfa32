//! Homework review status notifier.
//!
//! Polls the homework review API on a fixed interval and relays status
//! changes of submitted homework to a single Telegram chat.
//!
//! # Modules
//!
//! - [`domain`] - Homework records, verdicts and response validation
//! - [`port`] - Traits for the review API and message delivery
//! - [`application`] - Best-effort notifier and the poll loop
//! - [`adapter`] - reqwest and teloxide implementations of the ports, CLI
//! - [`infrastructure`] - Configuration, credentials, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - deliver messages through the Telegram Bot API
//! - `testkit` - scripted test doubles for integration tests
//!
//! # Example
//!
//! ```
//! use homework_notifier::domain::format_status;
//! use serde_json::json;
//!
//! let message = format_status(&json!({"homework_name": "hw1", "status": "reviewing"}))?;
//! assert_eq!(
//!     message,
//!     "Изменился статус проверки работы \"hw1\". Работа взята на проверку ревьюером."
//! );
//! # Ok::<(), homework_notifier::error::PollError>(())
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
