//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::explorer::ExplorerClient;
use crate::application::monitor::ConfirmationMonitor;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::lookup::TransactionLookup;
use crate::port::outbound::notifier::Notifier;

/// Build the explorer-backed lookup from configuration.
pub(crate) fn build_lookup(config: &Config) -> Arc<dyn TransactionLookup> {
    info!(
        base_url = %config.explorer.base_url,
        timeout_ms = config.explorer.timeout_ms,
        "Explorer client configured"
    );
    Arc::new(ExplorerClient::from_config(&config.explorer))
}

/// Build the shared confirmation monitor that delivers through `notifier`.
pub(crate) fn build_monitor(config: &Config, notifier: Arc<dyn Notifier>) -> Arc<ConfirmationMonitor> {
    let settings = config.monitor.settings();
    info!(
        poll_interval_secs = settings.poll_interval.as_secs(),
        transient_retries = settings.transient_retries,
        "Confirmation monitor configured"
    );
    Arc::new(ConfirmationMonitor::new(
        build_lookup(config),
        notifier,
        settings,
    ))
}
