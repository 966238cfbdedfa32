//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] — [`ScriptedSource`], a [`HomeworkSource`](crate::port::HomeworkSource)
//!   that replays queued responses and records the timestamps it was asked for.
//! - [`sender`] — [`RecordingSender`], a [`MessageSender`](crate::port::MessageSender)
//!   that records deliveries and can be told to fail.

pub mod sender;
pub mod source;

pub use sender::RecordingSender;
pub use source::ScriptedSource;
