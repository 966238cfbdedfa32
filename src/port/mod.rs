//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the poll loop and the outside world.
//! Adapters implement them for the review API and the Telegram Bot API;
//! the testkit implements them with scripted, in-memory doubles.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤   Poller + Notifier     ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌──────────────┐                                    ┌──────────────┐
//! │HomeworkSource│                                    │MessageSender │
//! │  (Practicum) │                                    │  (Telegram)  │
//! └──────────────┘                                    └──────────────┘
//! ```

pub mod outbound;

pub use outbound::{HomeworkSource, MessageSender};
