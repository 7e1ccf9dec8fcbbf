//! Confirmation monitor settings.

use std::time::Duration;

use serde::Deserialize;

use crate::application::monitor::MonitorSettings;

/// Polling behaviour shared by every monitor.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Seconds between polls of the same transaction (default: 5).
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Consecutive transient lookup failures tolerated before giving up
    /// (default: 0, the first failure is terminal).
    #[serde(default)]
    pub transient_retries: u32,
}

const fn default_poll_interval_secs() -> u64 {
    5
}

impl MonitorConfig {
    /// Convert into the runtime settings consumed by the monitor.
    #[must_use]
    pub fn settings(&self) -> MonitorSettings {
        MonitorSettings {
            poll_interval: Duration::from_secs(self.poll_interval_secs),
            transient_retries: self.transient_retries,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            transient_retries: 0,
        }
    }
}
