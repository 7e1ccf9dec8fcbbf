//! Per-subscription confirmation monitor.
//!
//! A monitor drives one [`Subscription`] from `Tracking` to exactly one
//! terminal [`MonitorState`]:
//!
//! - **Completed**: confirmations reached the target. Emits `TargetReached`
//!   followed by `TrackingEnded`.
//! - **Invalidated**: the lookup failed. Emits `LookupFailed`.
//! - **Cancelled**: the cancellation token fired. Emits nothing.
//!
//! The monitor suspends in two places, the lookup and the interval sleep.
//! Both race against the cancellation token, so a cancelled monitor never
//! issues another lookup.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::{MonitorState, Subscription, TransactionSnapshot};
use crate::error::LookupError;
use crate::port::outbound::lookup::TransactionLookup;
use crate::port::outbound::notifier::{Notification, NotificationKind, Notifier};

/// Polling behaviour of a monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorSettings {
    /// Wait between consecutive lookups of the same transaction.
    pub poll_interval: Duration,
    /// Consecutive transient failures tolerated before the subscription is
    /// invalidated. Zero makes the first failure terminal.
    pub transient_retries: u32,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            transient_retries: 0,
        }
    }
}

/// What the monitor does after evaluating one lookup result.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// Stay in `Tracking` and poll again after the interval.
    Wait,
    /// Enter a terminal state after delivering these notifications.
    Finish(MonitorState, Vec<NotificationKind>),
}

/// Polls a transaction until it reaches its target confirmations.
///
/// One instance is shared by every subscription; per-subscription state
/// lives on the stack of [`ConfirmationMonitor::run`].
pub struct ConfirmationMonitor {
    lookup: Arc<dyn TransactionLookup>,
    notifier: Arc<dyn Notifier>,
    settings: MonitorSettings,
}

impl ConfirmationMonitor {
    #[must_use]
    pub fn new(
        lookup: Arc<dyn TransactionLookup>,
        notifier: Arc<dyn Notifier>,
        settings: MonitorSettings,
    ) -> Self {
        Self {
            lookup,
            notifier,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &MonitorSettings {
        &self.settings
    }

    /// Track `subscription` until a terminal state is reached.
    ///
    /// Returns the terminal state. Never returns [`MonitorState::Tracking`].
    pub async fn run(
        &self,
        subscription: &Subscription,
        cancel: &CancellationToken,
    ) -> MonitorState {
        info!(
            subscriber = %subscription.subscriber,
            subscription_id = %subscription.id,
            transaction_id = %subscription.transaction_id,
            target = subscription.target.get(),
            source = self.lookup.source_name(),
            "Monitor started"
        );

        let mut transient_failures: u32 = 0;
        let mut polls: u64 = 0;

        loop {
            let result = tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    return self.finish(subscription, MonitorState::Cancelled, polls);
                }
                result = self.lookup.fetch(&subscription.transaction_id) => result,
            };
            polls += 1;

            match self.next_step(subscription, result, &mut transient_failures) {
                Step::Wait => {}
                Step::Finish(state, notifications) => {
                    // A cancel that landed during the final lookup wins.
                    if cancel.is_cancelled() {
                        return self.finish(subscription, MonitorState::Cancelled, polls);
                    }
                    for kind in notifications {
                        self.notifier
                            .notify(Notification::new(subscription.subscriber, kind));
                    }
                    return self.finish(subscription, state, polls);
                }
            }

            tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    return self.finish(subscription, MonitorState::Cancelled, polls);
                }
                () = tokio::time::sleep(self.settings.poll_interval) => {}
            }
        }
    }

    fn next_step(
        &self,
        subscription: &Subscription,
        result: Result<TransactionSnapshot, LookupError>,
        transient_failures: &mut u32,
    ) -> Step {
        let transaction_id = &subscription.transaction_id;
        match result {
            Ok(snapshot) if subscription.target.is_reached_by(snapshot.confirmations) => {
                Step::Finish(
                    MonitorState::Completed,
                    vec![
                        NotificationKind::TargetReached {
                            transaction_id: transaction_id.clone(),
                            target: subscription.target,
                            confirmations: snapshot.confirmations,
                        },
                        NotificationKind::TrackingEnded {
                            transaction_id: transaction_id.clone(),
                        },
                    ],
                )
            }
            Ok(snapshot) => {
                *transient_failures = 0;
                debug!(
                    subscription_id = %subscription.id,
                    transaction_id = %transaction_id,
                    confirmations = snapshot.confirmations,
                    target = subscription.target.get(),
                    "Below target, waiting"
                );
                Step::Wait
            }
            Err(err) if err.is_transient() && *transient_failures < self.settings.transient_retries => {
                *transient_failures += 1;
                warn!(
                    subscription_id = %subscription.id,
                    transaction_id = %transaction_id,
                    attempt = *transient_failures,
                    max_retries = self.settings.transient_retries,
                    error = %err,
                    "Transient lookup failure, retrying"
                );
                Step::Wait
            }
            Err(err) => {
                warn!(
                    subscription_id = %subscription.id,
                    transaction_id = %transaction_id,
                    error = %err,
                    "Lookup failed, invalidating subscription"
                );
                Step::Finish(
                    MonitorState::Invalidated,
                    vec![NotificationKind::LookupFailed {
                        transaction_id: transaction_id.clone(),
                        reason: err.to_string(),
                    }],
                )
            }
        }
    }

    fn finish(&self, subscription: &Subscription, state: MonitorState, polls: u64) -> MonitorState {
        info!(
            subscriber = %subscription.subscriber,
            subscription_id = %subscription.id,
            transaction_id = %subscription.transaction_id,
            state = %state,
            polls,
            "Monitor finished"
        );
        state
    }
}
