//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for sensitive values like `TELEGRAM_BOT_TOKEN`.
//!
//! # Example
//!
//! ```no_run
//! use txwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use super::explorer::ExplorerConfig;
use super::logging::LoggingConfig;
use super::monitor::MonitorConfig;
use super::telegram::TelegramAppConfig;
use crate::error::{ConfigError, Result};

/// Environment variable holding the Telegram bot token.
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Block explorer used for confirmation lookups.
    #[serde(default)]
    pub explorer: ExplorerConfig,

    /// Polling behaviour of each confirmation monitor.
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Telegram frontend configuration.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// File the configuration was read from; `None` when built from defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the bot token from the `TELEGRAM_BOT_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml(&content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist. [`Config::source`] tells the two cases apart.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for a file that exists.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Initialize tracing from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn apply_env(&mut self) {
        self.telegram.bot_token = std::env::var(BOT_TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty());
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        let base_url = self.explorer.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url",
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            }
            .into());
        }
        if self.explorer.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.explorer.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.monitor.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(
            config.explorer.base_url,
            "https://xmrchain.net/api/transaction"
        );
        assert_eq!(config.monitor.poll_interval_secs, 5);
        assert_eq!(config.monitor.transient_retries, 0);
        assert_eq!(config.logging.level, "info");
        assert!(config.telegram.enabled);
    }

    #[test]
    fn parses_all_sections() {
        let toml = r#"
[logging]
level = "debug"
format = "json"

[explorer]
base_url = "http://localhost:8081/api/transaction"
timeout_ms = 2500
connect_timeout_ms = 500

[monitor]
poll_interval_secs = 10
transient_retries = 3

[telegram]
enabled = false
register_commands = false
"#;
        let config = Config::parse_toml(toml).unwrap();
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.explorer.timeout_ms, 2500);
        assert_eq!(config.monitor.transient_retries, 3);
        assert_eq!(
            config.monitor.settings().poll_interval,
            std::time::Duration::from_secs(10)
        );
        assert!(!config.telegram.enabled);
        assert!(!config.telegram.register_commands);
    }

    #[test]
    fn rejects_empty_base_url() {
        let result = Config::parse_toml("[explorer]\nbase_url = \"  \"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "base_url" }))
        ));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let result = Config::parse_toml("[explorer]\nbase_url = \"ftp://example.com/tx\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "base_url",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_zero_poll_interval() {
        let result = Config::parse_toml("[monitor]\npoll_interval_secs = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let result = Config::parse_toml("[explorer]\ntimeout_ms = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "timeout_ms",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            Config::parse_toml("[monitor\n"),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }
}
