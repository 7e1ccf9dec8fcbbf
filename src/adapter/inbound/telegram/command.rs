//! Telegram command parsing.

/// Supported Telegram commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelegramCommand {
    Start,
    Stop,
    Status,
    Help,
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// Accepts the `/command@BotName` form used in group chats. Arguments after
/// the command are ignored.
pub fn parse_command(text: &str) -> Result<TelegramCommand, CommandParseError> {
    let Some(raw_command) = text.split_whitespace().next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(TelegramCommand::Start),
        "/stop" => Ok(TelegramCommand::Stop),
        "/status" => Ok(TelegramCommand::Status),
        "/help" => Ok(TelegramCommand::Help),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Help text returned by `/help` and for unknown commands.
#[must_use]
pub const fn command_help() -> &'static str {
    "📋 Commands\n\n\
    /start - 🔎 Track a new transaction\n\
    /stop - ⏹️ Stop tracking the current transaction\n\
    /status - 📊 Show the transaction being tracked\n\
    /help - ❓ Show this help"
}

/// Command list registered with Telegram for the "/" menu.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("start", "Track a new transaction"),
        ("stop", "Stop tracking the current transaction"),
        ("status", "Show the transaction being tracked"),
        ("help", "Show available commands"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!(parse_command("/start"), Ok(TelegramCommand::Start));
        assert_eq!(parse_command("/stop"), Ok(TelegramCommand::Stop));
        assert_eq!(parse_command("/status"), Ok(TelegramCommand::Status));
        assert_eq!(parse_command("/help"), Ok(TelegramCommand::Help));
    }

    #[test]
    fn strips_bot_name_suffix() {
        assert_eq!(
            parse_command("/start@txwatch_bot"),
            Ok(TelegramCommand::Start)
        );
    }

    #[test]
    fn ignores_trailing_arguments_and_whitespace() {
        assert_eq!(parse_command("  /stop now "), Ok(TelegramCommand::Stop));
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(parse_command("hello"), Err(CommandParseError::NotACommand));
        assert_eq!(parse_command(""), Err(CommandParseError::NotACommand));
        assert_eq!(parse_command("   "), Err(CommandParseError::NotACommand));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            parse_command("/pause"),
            Err(CommandParseError::UnknownCommand("/pause".into()))
        );
    }

    #[test]
    fn every_registered_command_parses() {
        for (name, _) in bot_commands() {
            assert!(parse_command(&format!("/{name}")).is_ok(), "/{name}");
        }
    }
}
