//! Inbound adapters (driving side): the CLI and the Telegram frontend.

pub mod cli;

#[cfg(feature = "telegram")]
pub mod telegram;
