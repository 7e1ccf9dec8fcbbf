//! Subscription model and monitor state machine.

use std::fmt;

use crate::error::ValidationError;

use super::id::{SubscriberId, SubscriptionId, TransactionId};

/// Number of confirmations a subscriber wants to wait for.
///
/// Always within [`TargetConfirmations::MIN`]..=[`TargetConfirmations::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetConfirmations(u32);

impl TargetConfirmations {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 10;

    /// Create a target, rejecting values outside the allowed range.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::ConfirmationsOutOfRange {
                value: u64::from(value),
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Parse user input. Only plain decimal digits are accepted.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::ConfirmationsNotNumeric(trimmed.to_string()));
        }
        // Digits only, so the only possible failure is overflow.
        let value: u64 = trimmed.parse().unwrap_or(u64::MAX);
        let out_of_range = ValidationError::ConfirmationsOutOfRange {
            value,
            min: Self::MIN,
            max: Self::MAX,
        };
        let value = u32::try_from(value).map_err(|_| out_of_range.clone())?;
        Self::new(value).map_err(|_| out_of_range)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// True once `confirmations` meets or exceeds the target.
    #[must_use]
    pub fn is_reached_by(self, confirmations: u64) -> bool {
        confirmations >= u64::from(self.0)
    }
}

impl fmt::Display for TargetConfirmations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tracking request owned by a running monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub subscriber: SubscriberId,
    pub transaction_id: TransactionId,
    pub target: TargetConfirmations,
}

/// Confirmation data returned by a single lookup. Never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSnapshot {
    pub transaction_id: TransactionId,
    pub confirmations: u64,
}

/// Lifecycle of a monitor.
///
/// `Tracking` is the only non-terminal state. A monitor reaches exactly one
/// terminal state and never leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonitorState {
    /// Polling the explorer.
    Tracking,
    /// Target reached; both completion notifications delivered.
    Completed,
    /// Lookup failed; one failure notification delivered.
    Invalidated,
    /// Superseded or stopped; nothing delivered.
    Cancelled,
}

impl MonitorState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Tracking)
    }
}

impl fmt::Display for MonitorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Tracking => "tracking",
            Self::Completed => "completed",
            Self::Invalidated => "invalidated",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_accepts_bounds() {
        assert_eq!(TargetConfirmations::new(1).unwrap().get(), 1);
        assert_eq!(TargetConfirmations::new(10).unwrap().get(), 10);
    }

    #[test]
    fn target_rejects_zero_and_eleven() {
        assert!(TargetConfirmations::new(0).is_err());
        assert!(TargetConfirmations::new(11).is_err());
    }

    #[test]
    fn parse_trims_input() {
        assert_eq!(TargetConfirmations::parse(" 3 \n").unwrap().get(), 3);
    }

    #[test]
    fn parse_rejects_signs_and_decimals() {
        for input in ["-1", "+3", "2.5", "three", ""] {
            assert!(
                matches!(
                    TargetConfirmations::parse(input),
                    Err(ValidationError::ConfirmationsNotNumeric(_))
                ),
                "expected {input:?} to be rejected as non-numeric"
            );
        }
    }

    #[test]
    fn parse_rejects_huge_values_as_out_of_range() {
        let err = TargetConfirmations::parse("99999999999999999999999").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ConfirmationsOutOfRange { value: u64::MAX, .. }
        ));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(
            TargetConfirmations::parse("11").unwrap_err(),
            ValidationError::ConfirmationsOutOfRange {
                value: 11,
                min: 1,
                max: 10
            }
        );
    }

    #[test]
    fn target_reached_at_or_above() {
        let target = TargetConfirmations::new(3).unwrap();
        assert!(!target.is_reached_by(2));
        assert!(target.is_reached_by(3));
        assert!(target.is_reached_by(40));
    }

    #[test]
    fn only_tracking_is_non_terminal() {
        assert!(!MonitorState::Tracking.is_terminal());
        assert!(MonitorState::Completed.is_terminal());
        assert!(MonitorState::Invalidated.is_terminal());
        assert!(MonitorState::Cancelled.is_terminal());
    }
}
