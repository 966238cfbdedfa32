//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - the command line that drives the application
//! - [`outbound`] - the review API client and message senders

pub mod inbound;
pub mod outbound;
