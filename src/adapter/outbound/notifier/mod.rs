//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for chat backends. The log-only
//! notifier lives next to the port itself.

#[cfg(feature = "telegram")]
pub mod telegram;
