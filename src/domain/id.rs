//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Length of a transaction hash in hexadecimal characters.
pub const TRANSACTION_ID_LEN: usize = 64;

/// Transaction identifier - newtype for type safety.
///
/// The monitoring core and the lookup client treat the value as opaque.
/// Use [`TransactionId::parse`] for untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a `TransactionId` without validating its format.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse user input into a transaction hash.
    ///
    /// Surrounding whitespace is ignored. The remainder must be exactly
    /// [`TRANSACTION_ID_LEN`] hexadecimal characters.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let len = trimmed.chars().count();
        if len != TRANSACTION_ID_LEN {
            return Err(ValidationError::TransactionLength { len });
        }
        if !trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::TransactionNotHex);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the transaction ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identity that receives notifications (a Telegram chat id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriberId(i64);

impl SubscriberId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registry-assigned identifier for one tracking request.
///
/// Increases monotonically, so a replacement subscription always compares
/// greater than the one it superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
