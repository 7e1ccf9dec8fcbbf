//! Command-line interface definitions.
//!
//! Defines the CLI structure for the txwatch application using `clap`:
//! `run` starts the Telegram bot, `watch` tracks a single transaction from
//! the terminal.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Blockchain transaction confirmation watcher
#[derive(Parser, Debug)]
#[command(name = "txwatch")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the txwatch CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (requires TELEGRAM_BOT_TOKEN)
    Run,

    /// Track one transaction in the foreground and log the outcome
    Watch(WatchArgs),
}

/// Arguments for the `watch` command.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Transaction hash (64 hexadecimal characters)
    pub transaction: String,

    /// Confirmations to wait for (1-10)
    #[arg(short = 'n', long, default_value_t = 1)]
    pub confirmations: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_watch_with_defaults() {
        let cli = Cli::try_parse_from(["txwatch", "watch", "abc"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        match cli.command {
            Commands::Watch(args) => {
                assert_eq!(args.transaction, "abc");
                assert_eq!(args.confirmations, 1);
            }
            Commands::Run => panic!("expected watch"),
        }
    }

    #[test]
    fn parses_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["txwatch", "run", "--config", "/etc/txwatch.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/txwatch.toml"));
        assert!(matches!(cli.command, Commands::Run));
    }

    #[test]
    fn parses_confirmations_flag() {
        let cli = Cli::try_parse_from(["txwatch", "watch", "abc", "-n", "7"]).unwrap();
        let Commands::Watch(args) = cli.command else {
            panic!("expected watch");
        };
        assert_eq!(args.confirmations, 7);
    }

    #[test]
    fn rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["txwatch"]).is_err());
    }
}
