//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Directives appended to the configured level. The HTTP stack and the
/// Telegram client log every poll at `debug`, which drowns monitor output.
const QUIET_DEPENDENCIES: &[&str] = &["hyper=warn", "reqwest=warn", "teloxide=info"];

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    /// Unknown names fall back to `Pretty`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level or filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// `pretty`, `compact` or `json`.
    pub format: String,
}

impl LoggingConfig {
    /// Filter built from `level` plus the dependency overrides.
    #[must_use]
    pub fn directives(&self) -> String {
        let level = self.level.trim();
        let level = if level.is_empty() { "info" } else { level };
        std::iter::once(level)
            .chain(QUIET_DEPENDENCIES.iter().copied())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Install the global subscriber. `RUST_LOG` wins over the config.
    ///
    /// A second call in the same process is a no-op.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(self.directives()))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = match LogFormat::parse(&self.format) {
            LogFormat::Json => fmt().json().with_env_filter(filter).try_init(),
            LogFormat::Compact => fmt().compact().with_env_filter(filter).try_init(),
            LogFormat::Pretty => fmt().with_env_filter(filter).try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
