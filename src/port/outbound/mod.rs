//! Outbound ports: the review API and message delivery.

mod homework;
mod notifier;

pub use homework::HomeworkSource;
pub use notifier::MessageSender;
