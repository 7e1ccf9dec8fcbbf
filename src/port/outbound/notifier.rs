//! Notifier port for subscriber notifications.
//!
//! This module defines the notifications the monitoring core emits and the
//! trait that delivers them to a subscriber.

use crate::domain::{SubscriberId, TargetConfirmations, TransactionId};

/// What happened to a tracked transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    /// The lookup failed and tracking stopped.
    LookupFailed {
        /// The transaction that could not be looked up.
        transaction_id: TransactionId,
        /// Human-readable failure reason.
        reason: String,
    },
    /// The transaction reached the requested confirmation count.
    TargetReached {
        /// The tracked transaction.
        transaction_id: TransactionId,
        /// The requested confirmation count.
        target: TargetConfirmations,
        /// The confirmation count observed on the final poll.
        confirmations: u64,
    },
    /// Tracking has ended; a new request is needed to track again.
    TrackingEnded {
        /// The transaction that is no longer tracked.
        transaction_id: TransactionId,
    },
}

/// A notification addressed to one subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Recipient.
    pub subscriber: SubscriberId,
    /// Payload.
    pub kind: NotificationKind,
}

impl Notification {
    #[must_use]
    pub fn new(subscriber: SubscriberId, kind: NotificationKind) -> Self {
        Self { subscriber, kind }
    }

    /// The transaction this notification refers to.
    #[must_use]
    pub fn transaction_id(&self) -> &TransactionId {
        match &self.kind {
            NotificationKind::LookupFailed { transaction_id, .. }
            | NotificationKind::TargetReached { transaction_id, .. }
            | NotificationKind::TrackingEnded { transaction_id } => transaction_id,
        }
    }
}

/// Trait for notification handlers.
///
/// Notifications are fire-and-forget: delivery failures are the
/// implementation's concern and are never retried by the caller.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - The `notify` method should not block or perform slow I/O synchronously
/// - Consider queuing to a background task for slow operations
pub trait Notifier: Send + Sync {
    /// Handle a notification.
    fn notify(&self, notification: Notification);
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// A logging notifier that logs notifications via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        use tracing::{info, warn};
        let subscriber = notification.subscriber;
        match notification.kind {
            NotificationKind::LookupFailed {
                transaction_id,
                reason,
            } => {
                warn!(
                    %subscriber,
                    transaction_id = %transaction_id,
                    reason = %reason,
                    "Transaction lookup failed"
                );
            }
            NotificationKind::TargetReached {
                transaction_id,
                target,
                confirmations,
            } => {
                info!(
                    %subscriber,
                    transaction_id = %transaction_id,
                    target = target.get(),
                    confirmations,
                    "Target confirmations reached"
                );
            }
            NotificationKind::TrackingEnded { transaction_id } => {
                info!(
                    %subscriber,
                    transaction_id = %transaction_id,
                    "Tracking ended"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_id_is_exposed_for_every_kind() {
        let tx = TransactionId::new("abc");
        let subscriber = SubscriberId::new(1);
        let kinds = [
            NotificationKind::LookupFailed {
                transaction_id: tx.clone(),
                reason: "404".into(),
            },
            NotificationKind::TargetReached {
                transaction_id: tx.clone(),
                target: TargetConfirmations::new(2).unwrap(),
                confirmations: 2,
            },
            NotificationKind::TrackingEnded {
                transaction_id: tx.clone(),
            },
        ];

        for kind in kinds {
            assert_eq!(Notification::new(subscriber, kind).transaction_id(), &tx);
        }
    }
}
