//! Command-line entry point.

pub mod check;
pub mod command;
pub mod dispatch;
pub mod output;
pub mod run;

pub use dispatch::execute;
