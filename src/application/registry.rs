//! Subscriber to monitor-task registry.
//!
//! Each subscriber has at most one live monitor. Starting a new subscription
//! cancels the previous one under the same lock that installs the
//! replacement, so two tasks are never registered for one subscriber.
//!
//! Entries carry the [`SubscriptionId`] they were created for. A finishing
//! task only clears its own entry, never a newer replacement.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::monitor::ConfirmationMonitor;
use crate::domain::{
    SubscriberId, Subscription, SubscriptionId, TargetConfirmations, TransactionId,
};

/// Handle to one running monitor task.
struct ActiveMonitor {
    id: SubscriptionId,
    transaction_id: TransactionId,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

struct RegistryInner {
    monitor: Arc<ConfirmationMonitor>,
    active: Mutex<HashMap<SubscriberId, ActiveMonitor>>,
    next_id: AtomicU64,
}

impl RegistryInner {
    fn clear(&self, subscriber: SubscriberId, id: SubscriptionId) -> bool {
        let mut active = self.active.lock();
        match active.get(&subscriber) {
            Some(entry) if entry.id == id => {
                active.remove(&subscriber);
                debug!(%subscriber, subscription_id = %id, "Registry entry cleared");
                true
            }
            _ => false,
        }
    }
}

/// Clears the registry entry when the task ends, including by panic or abort.
struct TerminalGuard {
    inner: Arc<RegistryInner>,
    subscriber: SubscriberId,
    id: SubscriptionId,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.inner.clear(self.subscriber, self.id);
    }
}

/// Tracks the active monitor task of every subscriber.
///
/// Cheap to clone; clones share the same map.
#[derive(Clone)]
pub struct SubscriptionRegistry {
    inner: Arc<RegistryInner>,
}

impl SubscriptionRegistry {
    #[must_use]
    pub fn new(monitor: Arc<ConfirmationMonitor>) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                monitor,
                active: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Start tracking `transaction_id` for `subscriber`.
    ///
    /// Cancels any monitor already running for the subscriber, then spawns
    /// the new one and returns without waiting for it.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn start(
        &self,
        subscriber: SubscriberId,
        transaction_id: TransactionId,
        target: TargetConfirmations,
    ) -> SubscriptionId {
        let mut active = self.inner.active.lock();

        if let Some(previous) = active.remove(&subscriber) {
            previous.cancel.cancel();
            info!(
                %subscriber,
                subscription_id = %previous.id,
                transaction_id = %previous.transaction_id,
                "Superseded active subscription"
            );
        }

        let id = SubscriptionId::new(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let subscription = Subscription {
            id,
            subscriber,
            transaction_id: transaction_id.clone(),
            target,
        };
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_subscription(
            Arc::clone(&self.inner),
            subscription,
            cancel.clone(),
        ));

        active.insert(
            subscriber,
            ActiveMonitor {
                id,
                transaction_id,
                cancel,
                handle,
            },
        );
        id
    }

    /// Cancel the subscriber's active monitor. Returns false if none was running.
    pub fn cancel(&self, subscriber: SubscriberId) -> bool {
        let Some(entry) = self.inner.active.lock().remove(&subscriber) else {
            return false;
        };
        entry.cancel.cancel();
        info!(%subscriber, subscription_id = %entry.id, "Subscription cancelled");
        true
    }

    #[must_use]
    pub fn is_tracking(&self, subscriber: SubscriberId) -> bool {
        self.inner.active.lock().contains_key(&subscriber)
    }

    /// The subscriber's active subscription and the transaction it tracks.
    #[must_use]
    pub fn active_subscription(
        &self,
        subscriber: SubscriberId,
    ) -> Option<(SubscriptionId, TransactionId)> {
        self.inner
            .active
            .lock()
            .get(&subscriber)
            .map(|entry| (entry.id, entry.transaction_id.clone()))
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.inner.active.lock().len()
    }

    /// Cancel every monitor and wait for the tasks to unwind.
    pub async fn shutdown(&self) {
        let drained: Vec<ActiveMonitor> = self
            .inner
            .active
            .lock()
            .drain()
            .map(|(_, entry)| entry)
            .collect();

        if drained.is_empty() {
            return;
        }
        info!(count = drained.len(), "Cancelling active subscriptions");

        for entry in &drained {
            entry.cancel.cancel();
        }
        for entry in drained {
            let _ = entry.handle.await;
        }
    }
}

async fn run_subscription(
    inner: Arc<RegistryInner>,
    subscription: Subscription,
    cancel: CancellationToken,
) {
    let _guard = TerminalGuard {
        inner: Arc::clone(&inner),
        subscriber: subscription.subscriber,
        id: subscription.id,
    };
    inner.monitor.run(&subscription, &cancel).await;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::application::monitor::MonitorSettings;
    use crate::port::outbound::notifier::NullNotifier;
    use crate::testkit::lookup::ScriptedLookup;

    fn registry(lookup: ScriptedLookup) -> SubscriptionRegistry {
        let monitor = ConfirmationMonitor::new(
            Arc::new(lookup),
            Arc::new(NullNotifier),
            MonitorSettings {
                poll_interval: Duration::from_secs(5),
                transient_retries: 0,
            },
        );
        SubscriptionRegistry::new(Arc::new(monitor))
    }

    fn target(n: u32) -> TargetConfirmations {
        TargetConfirmations::new(n).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn clear_ignores_stale_ids() {
        let lookup = ScriptedLookup::new().script("tx", vec![Ok(0)]);
        let registry = registry(lookup);
        let subscriber = SubscriberId::new(7);

        let first = registry.start(subscriber, TransactionId::new("tx"), target(5));
        let second = registry.start(subscriber, TransactionId::new("tx"), target(5));
        assert!(second > first);

        assert!(!registry.inner.clear(subscriber, first));
        assert!(registry.is_tracking(subscriber));
        assert!(registry.inner.clear(subscriber, second));
        assert!(!registry.is_tracking(subscriber));

        registry.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_without_subscription_returns_false() {
        let registry = registry(ScriptedLookup::new());
        assert!(!registry.cancel(SubscriberId::new(1)));
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_everything() {
        let lookup = ScriptedLookup::new()
            .script("a", vec![Ok(0)])
            .script("b", vec![Ok(0)]);
        let registry = registry(lookup);

        registry.start(SubscriberId::new(1), TransactionId::new("a"), target(3));
        registry.start(SubscriberId::new(2), TransactionId::new("b"), target(3));
        assert_eq!(registry.active_count(), 2);

        registry.shutdown().await;
        assert_eq!(registry.active_count(), 0);
    }
}
