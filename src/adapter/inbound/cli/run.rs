//! Handler for the `run` command.

use std::path::Path;

use tokio::signal;
use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::output;
use crate::application::CycleOutcome;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_poller;
use crate::infrastructure::config::credentials::Credentials;
use crate::infrastructure::config::settings::Config;

/// Execute the run command.
///
/// With `--once` a failed cycle is returned as an error so the exit code
/// reflects it.
pub async fn execute(args: &RunArgs, config_path: &Path, credentials: &Credentials) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    config.logging.init()?;
    info!(version = env!("CARGO_PKG_VERSION"), "homework-notifier starting");

    let mut poller = build_poller(&config, credentials)?;
    if let Some(since) = args.since {
        poller = poller.with_since(Some(since));
    }

    if args.once {
        let outcome = poller.poll_once().await;
        report_outcome(&outcome);
        return match outcome {
            CycleOutcome::Failed { error, .. } => Err(error.into()),
            CycleOutcome::NoChanges | CycleOutcome::Notified(_) => Ok(()),
        };
    }

    tokio::select! {
        () = poller.run() => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("homework-notifier stopped");
    Ok(())
}

fn report_outcome(outcome: &CycleOutcome) {
    match outcome {
        CycleOutcome::NoChanges => output::success("No homework updates"),
        CycleOutcome::Notified(message) => output::message(message),
        CycleOutcome::Failed { notified, .. } => {
            output::field("Failure reported", notified);
        }
    }
}
