//! Application services: best-effort notification and the poll loop.

mod notifier;
mod poller;

pub use notifier::Notifier;
pub use poller::{CycleOutcome, PollState, Poller, PollerConfig};
