//! Block explorer REST client.
//!
//! Looks up a transaction with `GET <base_url>/<hash>` and reads the
//! confirmation count from `data.confirmations`.
//!
//! Status handling follows the explorer's limits: every non-success status
//! is reported as not found, because the explorer answers unknown hashes
//! and internal failures the same way. Transport failures, timeouts and
//! unreadable bodies are reported as transient.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::dto::TransactionResponse;
use crate::domain::{TransactionId, TransactionSnapshot};
use crate::error::LookupError;
use crate::infrastructure::config::explorer::ExplorerConfig;
use crate::port::outbound::lookup::TransactionLookup;

/// HTTP client for a block explorer transaction API.
///
/// Stateless apart from the connection pool inside `reqwest::Client`, so a
/// single instance can be shared by every monitor.
pub struct ExplorerClient {
    http: HttpClient,
    base_url: String,
}

impl ExplorerClient {
    /// Create a client with default HTTP settings.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Transaction endpoint prefix
    ///   (e.g., `https://xmrchain.net/api/transaction`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ExplorerConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    /// Full lookup URL for a transaction.
    #[must_use]
    pub fn transaction_url(&self, transaction_id: &TransactionId) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            transaction_id.as_str()
        )
    }

    fn transient(context: &str, err: &reqwest::Error) -> LookupError {
        if err.is_timeout() {
            LookupError::Transient(format!("{context}: request timed out"))
        } else {
            LookupError::Transient(format!("{context}: {err}"))
        }
    }
}

#[async_trait]
impl TransactionLookup for ExplorerClient {
    async fn fetch(
        &self,
        transaction_id: &TransactionId,
    ) -> Result<TransactionSnapshot, LookupError> {
        let url = self.transaction_url(transaction_id);
        debug!(url = %url, "Fetching transaction");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| Self::transient("request failed", &err))?;

        let status = response.status();
        if !status.is_success() {
            debug!(url = %url, status = status.as_u16(), "Explorer returned non-success status");
            return Err(LookupError::NotFound {
                status: status.as_u16(),
            });
        }

        let body: TransactionResponse = response
            .json()
            .await
            .map_err(|err| Self::transient("invalid response body", &err))?;

        Ok(TransactionSnapshot {
            transaction_id: transaction_id.clone(),
            confirmations: body.data.confirmations,
        })
    }

    fn source_name(&self) -> &'static str {
        "explorer"
    }
}
