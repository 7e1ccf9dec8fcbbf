//! Domain types: identifiers, subscriptions and monitor state.
//!
//! Nothing in here performs I/O.

pub mod id;
pub mod subscription;

pub use id::{SubscriberId, SubscriptionId, TransactionId, TRANSACTION_ID_LEN};
pub use subscription::{MonitorState, Subscription, TargetConfirmations, TransactionSnapshot};
