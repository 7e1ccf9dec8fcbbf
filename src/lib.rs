//! txwatch - blockchain transaction confirmation watcher.
//!
//! A user registers a transaction hash and a confirmation target; a
//! background monitor polls a block explorer and notifies the user once the
//! transaction has that many confirmations.
//!
//! # Architecture
//!
//! - **`domain`** - Identifiers, subscriptions and the monitor state machine
//! - **`port`** - Traits for the block explorer lookup and notifications
//! - **`application`** - `ConfirmationMonitor` (one polling loop per
//!   subscription) and `SubscriptionRegistry` (one live monitor per subscriber)
//! - **`adapter`** - Explorer HTTP client, Telegram frontend and notifier, CLI
//! - **`infrastructure`** - Configuration and wiring
//!
//! # Features
//!
//! - `telegram` - Telegram frontend and notifier (default)
//! - `testkit` - Scripted lookup and recording notifier for tests
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use txwatch::adapter::outbound::explorer::ExplorerClient;
//! use txwatch::application::{ConfirmationMonitor, MonitorSettings, SubscriptionRegistry};
//! use txwatch::domain::{SubscriberId, TargetConfirmations, TransactionId};
//! use txwatch::port::LogNotifier;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let lookup = Arc::new(ExplorerClient::new("https://xmrchain.net/api/transaction"));
//! let monitor = ConfirmationMonitor::new(lookup, Arc::new(LogNotifier), MonitorSettings::default());
//! let registry = SubscriptionRegistry::new(Arc::new(monitor));
//!
//! let tx = TransactionId::parse(&"ab".repeat(32))?;
//! registry.start(SubscriberId::new(1), tx, TargetConfirmations::new(3)?);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
