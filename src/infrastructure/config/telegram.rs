//! Telegram bot configuration.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

/// Telegram bot configuration.
///
/// The bot token is a secret and is read from `TELEGRAM_BOT_TOKEN`, never
/// from the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Enable the Telegram frontend.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Register the command list with Telegram on startup.
    #[serde(default = "default_true")]
    pub register_commands: bool,
    /// Bot API token, populated from the environment at load time.
    #[serde(skip)]
    pub bot_token: Option<String>,
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            register_commands: default_true(),
            bot_token: None,
        }
    }
}
