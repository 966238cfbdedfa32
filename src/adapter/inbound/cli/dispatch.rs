//! Routing of parsed commands to their handlers.

use super::command::{CheckCommand, Cli, Commands, RunArgs};
use super::{check, output, run};
use crate::error::Result;
use crate::infrastructure::config::credentials::Credentials;

/// Dispatch a parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));
    let credentials = Credentials::from_env();

    match cli.command {
        None => run::execute(&RunArgs::default(), &cli.config, &credentials).await,
        Some(Commands::Run(args)) => run::execute(&args, &cli.config, &credentials).await,
        Some(Commands::Check(CheckCommand::Config)) => {
            check::config::execute_config(&cli.config, &credentials)
        }
        Some(Commands::Check(CheckCommand::Telegram)) => {
            check::telegram::execute_telegram(&credentials).await
        }
    }
}
