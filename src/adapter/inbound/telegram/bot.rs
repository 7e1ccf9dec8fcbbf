//! Telegram long-polling loop.
//!
//! Feeds every inbound text message to the [`ChatFrontend`], sends its
//! replies, then forwards any completed tracking request to the registry.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, warn};

use super::command::bot_commands;
use super::dialogue::ChatFrontend;
use crate::domain::SubscriberId;

/// Run the bot until the update listener stops (Ctrl-C).
pub async fn run_bot(bot: Bot, frontend: Arc<ChatFrontend>, register_commands: bool) {
    // Register commands with Telegram so they appear in the "/" menu
    if register_commands {
        if let Err(e) = register_bot_commands(&bot).await {
            warn!(error = %e, "Failed to register bot commands with Telegram");
        }
    }

    info!("Telegram command listener started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let frontend = Arc::clone(&frontend);
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            let subscriber = SubscriberId::new(msg.chat.id.0);
            let reply = frontend.handle_message(subscriber, text);

            for message in reply.messages {
                if let Err(e) = bot.send_message(msg.chat.id, message).await {
                    error!(chat_id = msg.chat.id.0, error = %e, "Failed to send Telegram reply");
                }
            }

            if let Some(request) = reply.start {
                frontend.begin(subscriber, request);
            }

            respond(())
        }
    })
    .await;
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
