//! Handler for the `watch` command.

use std::sync::Arc;

use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::command::WatchArgs;
use crate::domain::{
    MonitorState, SubscriberId, Subscription, SubscriptionId, TargetConfirmations, TransactionId,
};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_monitor;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::notifier::LogNotifier;

/// Subscriber id used for terminal sessions.
const LOCAL_SUBSCRIBER: SubscriberId = SubscriberId::new(0);

/// Validate the arguments and track the transaction until a terminal state.
///
/// Ctrl-C cancels the monitor.
pub async fn execute(config: &Config, args: &WatchArgs) -> Result<MonitorState> {
    let subscription = Subscription {
        id: SubscriptionId::new(1),
        subscriber: LOCAL_SUBSCRIBER,
        transaction_id: TransactionId::parse(&args.transaction)?,
        target: TargetConfirmations::new(args.confirmations)?,
    };
    let monitor = build_monitor(config, Arc::new(LogNotifier));

    let cancel = CancellationToken::new();
    let signal_task = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
                cancel.cancel();
            }
        })
    };

    let state = monitor.run(&subscription, &cancel).await;
    signal_task.abort();
    Ok(state)
}

/// Process exit code for a terminal monitor state.
#[must_use]
pub fn exit_code(state: MonitorState) -> i32 {
    match state {
        MonitorState::Completed => 0,
        MonitorState::Invalidated | MonitorState::Tracking => 1,
        MonitorState::Cancelled => 130,
    }
}
