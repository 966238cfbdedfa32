//! Command-line interface definitions.
//!
//! Without a subcommand the binary starts the poll loop, so a bare
//! `homework-notifier` behaves like `homework-notifier run`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Homework review status notifier
#[derive(Parser, Debug)]
#[command(name = "homework-notifier")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional, defaults apply if absent)
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the review API and relay status changes (default)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Arguments for `homework-notifier run`.
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Run a single poll cycle and exit
    #[arg(long)]
    pub once: bool,

    /// Override the starting `from_date` timestamp (unix seconds)
    #[arg(long)]
    pub since: Option<i64>,
}

/// Subcommands for `homework-notifier check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration and report which secrets are set
    Config,
    /// Send a test message to the configured chat
    Telegram,
}
