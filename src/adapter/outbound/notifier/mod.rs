//! Message sender adapters.
//!
//! - [`log::LogSender`] - writes messages to the log only
//! - [`telegram::TelegramSender`] - Telegram Bot API (requires `telegram` feature)

pub mod log;
#[cfg(feature = "telegram")]
pub mod telegram;
