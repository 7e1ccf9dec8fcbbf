//! Block explorer connection settings.

use serde::Deserialize;

/// Block explorer HTTP configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplorerConfig {
    /// Base URL; the transaction hash is appended as the last path segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://xmrchain.net/api/transaction".to_string()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}
