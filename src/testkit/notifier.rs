//! Recording [`Notifier`] for notification assertions in tests.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{SubscriberId, TransactionId};
use crate::port::outbound::notifier::{Notification, Notifier};

/// Thread-safe notification collector.
///
/// Clones share the same buffer, so one clone can be handed to the code
/// under test while the test keeps another for assertions.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in delivery order.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    /// Notifications that refer to `transaction_id`.
    #[must_use]
    pub fn for_transaction(&self, transaction_id: &TransactionId) -> Vec<Notification> {
        self.notifications
            .lock()
            .iter()
            .filter(|n| n.transaction_id() == transaction_id)
            .cloned()
            .collect()
    }

    /// Notifications addressed to `subscriber`.
    #[must_use]
    pub fn for_subscriber(&self, subscriber: SubscriberId) -> Vec<Notification> {
        self.notifications
            .lock()
            .iter()
            .filter(|n| n.subscriber == subscriber)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.lock().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }
}
