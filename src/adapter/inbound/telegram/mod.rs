//! Telegram conversation frontend.
//!
//! Collects a transaction hash and a confirmation target from each chat and
//! hands validated requests to the [`SubscriptionRegistry`].
//!
//! [`SubscriptionRegistry`]: crate::application::registry::SubscriptionRegistry

mod bot;
mod command;
pub mod dialogue;

pub use bot::run_bot;
pub use command::{bot_commands, parse_command, CommandParseError, TelegramCommand};
pub use dialogue::{ChatFrontend, ConversationState, StartRequest};
