//! Block explorer adapter implementing [`TransactionLookup`].
//!
//! [`TransactionLookup`]: crate::port::outbound::lookup::TransactionLookup

mod client;
pub mod dto;

pub use client::ExplorerClient;
