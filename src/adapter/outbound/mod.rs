//! Outbound adapters: the block explorer client and notification delivery.

pub mod explorer;
pub mod notifier;
