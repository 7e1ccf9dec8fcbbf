//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`lookup`]: `ScriptedLookup`, a per-transaction scripted
//!   [`TransactionLookup`](crate::port::outbound::lookup::TransactionLookup).
//! - [`notifier`]: `RecordingNotifier`, which keeps every notification.

pub mod lookup;
pub mod notifier;
