//! Transaction lookup port.
//!
//! Defines the single integration point with a block explorer: fetch the
//! current confirmation count of one transaction.

use async_trait::async_trait;

use crate::domain::{TransactionId, TransactionSnapshot};
use crate::error::LookupError;

/// Performs one lookup of a transaction's current data.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`); one instance is
///   shared by every running monitor.
/// - No retries: retry policy belongs to the caller.
/// - Failures are reported through [`LookupError`], never by panicking.
#[async_trait]
pub trait TransactionLookup: Send + Sync {
    /// Fetch a fresh snapshot for `transaction_id`.
    async fn fetch(&self, transaction_id: &TransactionId)
        -> Result<TransactionSnapshot, LookupError>;

    /// Name of the backing data source, for logs.
    fn source_name(&self) -> &'static str;
}
