//! Telegram notification delivery.
//!
//! Formats monitor notifications as chat messages and sends them from a
//! background worker so the monitor never waits on the Telegram API.

mod format;

pub mod notifier;

pub use format::format_notification;
pub use notifier::TelegramNotifier;
