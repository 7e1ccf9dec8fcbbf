//! Application layer - the confirmation monitor and its registry.

pub mod monitor;
pub mod registry;

pub use monitor::{ConfirmationMonitor, MonitorSettings};
pub use registry::SubscriptionRegistry;
