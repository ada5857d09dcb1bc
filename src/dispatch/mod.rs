//! The broadcast pipeline: notification bus, filtering and dispatch.

pub mod bus;
pub mod dispatcher;
pub mod filter;

pub use bus::{ChatNotification, ChatObserver, NotificationBus};
pub use dispatcher::{BroadcastDispatcher, DispatchOutcome, OutgoingChat};
pub use filter::PatternFilter;
