#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use txwatch::application::{ConfirmationMonitor, MonitorSettings};
use txwatch::domain::{
    SubscriberId, Subscription, SubscriptionId, TargetConfirmations, TransactionId,
};
use txwatch::port::{Notifier, TransactionLookup};

pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// A well-formed 64-character hash derived from `seed`.
pub fn hash(seed: u8) -> String {
    format!("{seed:02x}").repeat(32)
}

pub fn target(n: u32) -> TargetConfirmations {
    TargetConfirmations::new(n).expect("valid target")
}

pub fn subscription(subscriber: i64, tx: &str, target_confirmations: u32) -> Subscription {
    Subscription {
        id: SubscriptionId::new(1),
        subscriber: SubscriberId::new(subscriber),
        transaction_id: TransactionId::new(tx),
        target: target(target_confirmations),
    }
}

pub fn settings(transient_retries: u32) -> MonitorSettings {
    MonitorSettings {
        poll_interval: POLL_INTERVAL,
        transient_retries,
    }
}

pub fn monitor(
    lookup: Arc<dyn TransactionLookup>,
    notifier: Arc<dyn Notifier>,
    transient_retries: u32,
) -> Arc<ConfirmationMonitor> {
    Arc::new(ConfirmationMonitor::new(
        lookup,
        notifier,
        settings(transient_retries),
    ))
}
