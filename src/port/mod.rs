//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (block explorers, chat services, logs).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Monitor + Registry     ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌──────────┐                                         ┌───────────┐
//! │ Explorer │                                         │ Notifier  │
//! │ Adapter  │                                         │  Adapter  │
//! └──────────┘                                         └───────────┘
//! ```

pub mod outbound;

pub use outbound::lookup::TransactionLookup;
pub use outbound::notifier::{LogNotifier, Notification, NotificationKind, Notifier, NullNotifier};
