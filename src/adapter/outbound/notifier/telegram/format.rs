//! Message formatting for Telegram notifications.

use crate::port::outbound::notifier::NotificationKind;

/// Format a notification as a plain-text chat message.
#[must_use]
pub fn format_notification(kind: &NotificationKind) -> String {
    match kind {
        NotificationKind::LookupFailed {
            transaction_id,
            reason,
        } => format!(
            "❌ Could not look up transaction {}.\n\
            The hash may be wrong or the explorer is unavailable ({reason}).\n\
            Send /start to try again.",
            short_hash(transaction_id.as_str())
        ),
        NotificationKind::TargetReached {
            transaction_id,
            target,
            confirmations,
        } => format!(
            "✅ Transaction {transaction_id} has received {target} confirmations \
            (currently {confirmations})."
        ),
        NotificationKind::TrackingEnded { .. } => {
            "This transaction is no longer being tracked. \
            Send /start to track a new transaction."
                .to_string()
        }
    }
}

/// Shorten a hash for display, keeping both ends.
fn short_hash(hash: &str) -> String {
    const EDGE: usize = 8;
    if hash.len() <= EDGE * 2 + 1 || !hash.is_ascii() {
        return hash.to_string();
    }
    format!("{}…{}", &hash[..EDGE], &hash[hash.len() - EDGE..])
}
