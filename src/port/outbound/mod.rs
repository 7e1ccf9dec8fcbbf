//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the infrastructure the core depends on: the
//! block explorer and notification delivery.

pub mod lookup;
pub mod notifier;
