//! Settlement error types.

use rust_decimal::Decimal;
use tally_shared::types::PersonId;
use thiserror::Error;

/// Errors that can occur while settling balances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// Credits and debits do not cancel out, so no complete settlement exists.
    #[error("Ledger is imbalanced. Credits: {credits}, Debits: {debits}")]
    ImbalancedLedger {
        /// Sum of positive balances.
        credits: Decimal,
        /// Sum of the magnitudes of negative balances.
        debits: Decimal,
    },

    /// Adding this person's balance overflows the settlement total.
    #[error("Balance of {person_id} overflows the settlement total")]
    AmountOverflow {
        /// The person whose balance could not be added.
        person_id: PersonId,
    },
}

impl SettlementError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ImbalancedLedger { .. } => "IMBALANCED_LEDGER",
            Self::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
        }
    }

    /// Returns the HTTP status code for this error.
    ///
    /// An imbalance is an aggregation bug, never a user error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::ImbalancedLedger { .. } => 500,
            Self::AmountOverflow { .. } => 422,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_imbalanced_ledger_error() {
        let err = SettlementError::ImbalancedLedger {
            credits: dec!(25.00),
            debits: dec!(20.00),
        };
        assert_eq!(err.error_code(), "IMBALANCED_LEDGER");
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(
            err.to_string(),
            "Ledger is imbalanced. Credits: 25.00, Debits: 20.00"
        );
    }

    #[test]
    fn test_amount_overflow_error() {
        let err = SettlementError::AmountOverflow {
            person_id: PersonId::from_u128(3),
        };
        assert_eq!(err.error_code(), "AMOUNT_OVERFLOW");
        assert_eq!(err.http_status_code(), 422);
        assert_eq!(
            err.to_string(),
            "Balance of 00000000-0000-0000-0000-000000000003 overflows the settlement total"
        );
    }
}
