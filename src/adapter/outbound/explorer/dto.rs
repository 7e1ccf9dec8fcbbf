//! Block explorer response payloads.

use serde::{Deserialize, Deserializer};

/// Body of a successful `GET /transaction/<hash>` response.
///
/// Only the fields the monitor needs are modelled; everything else in the
/// payload is ignored.
#[derive(Debug, Deserialize)]
pub struct TransactionResponse {
    pub data: TransactionData,
}

#[derive(Debug, Deserialize)]
pub struct TransactionData {
    #[serde(deserialize_with = "non_negative_count")]
    pub confirmations: u64,
}

/// Accept any JSON number and coerce it to a non-negative integer.
///
/// Negative values become zero and fractions are truncated.
fn non_negative_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(value) = number.as_u64() {
        return Ok(value);
    }
    if number.is_i64() {
        return Ok(0);
    }
    Ok(number
        .as_f64()
        .filter(|value| value.is_finite() && *value > 0.0)
        .map_or(0, |value| value.trunc() as u64))
}
