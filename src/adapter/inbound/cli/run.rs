//! Handler for the `run` command.

use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Upper bound on delivering queued notifications at shutdown.
#[cfg(feature = "telegram")]
const NOTIFIER_DRAIN_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Run the Telegram bot until Ctrl-C, then cancel every active monitor and
/// deliver notifications that are still queued.
#[cfg(feature = "telegram")]
pub async fn execute(config: Config) -> Result<()> {
    use std::sync::Arc;

    use teloxide::Bot;
    use tracing::{info, warn};

    use crate::adapter::inbound::telegram::{run_bot, ChatFrontend};
    use crate::adapter::outbound::notifier::telegram::TelegramNotifier;
    use crate::application::registry::SubscriptionRegistry;
    use crate::infrastructure::bootstrap::build_monitor;
    use crate::infrastructure::config::settings::BOT_TOKEN_ENV;
    use crate::port::outbound::notifier::Notifier;

    if !config.telegram.enabled {
        return Err(ConfigError::InvalidValue {
            field: "telegram.enabled",
            reason: "the Telegram frontend is disabled".to_string(),
        }
        .into());
    }
    let Some(token) = config.telegram.bot_token.clone() else {
        return Err(ConfigError::MissingField {
            field: BOT_TOKEN_ENV,
        }
        .into());
    };

    let bot = Bot::new(token);
    let notifier = Arc::new(TelegramNotifier::new(bot.clone()));
    let registry = SubscriptionRegistry::new(build_monitor(
        &config,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    ));
    let frontend = Arc::new(ChatFrontend::new(registry.clone()));

    run_bot(bot, frontend, config.telegram.register_commands).await;

    info!(active = registry.active_count(), "Bot stopped");
    registry.shutdown().await;

    if tokio::time::timeout(NOTIFIER_DRAIN_TIMEOUT, notifier.close())
        .await
        .is_err()
    {
        warn!("Timed out delivering queued notifications");
    }
    Ok(())
}

/// Without the `telegram` feature there is no frontend to run.
#[cfg(not(feature = "telegram"))]
pub async fn execute(_config: Config) -> Result<()> {
    Err(ConfigError::InvalidValue {
        field: "telegram",
        reason: "built without the `telegram` feature".to_string(),
    }
    .into())
}
