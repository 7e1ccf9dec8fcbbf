use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Outcome of a failed transaction lookup.
///
/// The explorer cannot tell an unknown hash apart from a server-side
/// failure, so every non-success status is reported as `NotFound`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("transaction not found (HTTP {status})")]
    NotFound { status: u16 },

    #[error("lookup failed: {0}")]
    Transient(String),
}

impl LookupError {
    /// True when retrying the same request might succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

/// Rejected user input. Never reaches the monitoring core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("transaction hash must be 64 characters, got {len}")]
    TransactionLength { len: usize },

    #[error("transaction hash must be hexadecimal")]
    TransactionNotHex,

    #[error("confirmations must be a number, got `{0}`")]
    ConfirmationsNotNumeric(String),

    #[error("confirmations must be between {min} and {max}, got {value}")]
    ConfirmationsOutOfRange { value: u64, min: u32, max: u32 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;
