//! Scripted [`TransactionLookup`] for deterministic monitor tests.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{TransactionId, TransactionSnapshot};
use crate::error::LookupError;
use crate::port::outbound::lookup::TransactionLookup;

/// One scripted lookup outcome: a confirmation count or an error.
pub type ScriptedResult = Result<u64, LookupError>;

#[derive(Default)]
struct Script {
    pending: VecDeque<ScriptedResult>,
    last: Option<ScriptedResult>,
    calls: usize,
}

/// A lookup that replays a per-transaction script.
///
/// Each `fetch` pops the next result for the transaction. Once a script is
/// exhausted its final result repeats forever. Transactions without a
/// script answer `NotFound { status: 404 }`.
#[derive(Default)]
pub struct ScriptedLookup {
    scripts: Mutex<HashMap<TransactionId, Script>>,
    latency: Option<Duration>,
}

impl ScriptedLookup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `results` for `transaction_id`.
    #[must_use]
    pub fn script(self, transaction_id: impl Into<TransactionId>, results: Vec<ScriptedResult>) -> Self {
        self.scripts
            .lock()
            .entry(transaction_id.into())
            .or_default()
            .pending
            .extend(results);
        self
    }

    /// Delay every lookup by `latency` (uses `tokio::time`, so paused
    /// clocks apply).
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of lookups started for `transaction_id`.
    #[must_use]
    pub fn calls(&self, transaction_id: impl Into<TransactionId>) -> usize {
        self.scripts
            .lock()
            .get(&transaction_id.into())
            .map_or(0, |script| script.calls)
    }

    /// Number of lookups started across all transactions.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.scripts.lock().values().map(|script| script.calls).sum()
    }

    fn next(&self, transaction_id: &TransactionId) -> ScriptedResult {
        let mut scripts = self.scripts.lock();
        let script = scripts.entry(transaction_id.clone()).or_default();
        script.calls += 1;
        if let Some(result) = script.pending.pop_front() {
            script.last = Some(result.clone());
            return result;
        }
        script
            .last
            .clone()
            .unwrap_or(Err(LookupError::NotFound { status: 404 }))
    }
}

#[async_trait]
impl TransactionLookup for ScriptedLookup {
    async fn fetch(
        &self,
        transaction_id: &TransactionId,
    ) -> Result<TransactionSnapshot, LookupError> {
        let result = self.next(transaction_id);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        result.map(|confirmations| TransactionSnapshot {
            transaction_id: transaction_id.clone(),
            confirmations,
        })
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}
