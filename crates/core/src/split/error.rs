//! Splitter error types.

use tally_shared::types::{ExpenseId, PersonId};
use thiserror::Error;

/// Errors that can occur while splitting expenses across consumers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The expense has nobody to divide its cost across.
    #[error("Expense {expense_id} has an empty consumer group")]
    EmptyConsumerGroup {
        /// The offending expense.
        expense_id: ExpenseId,
    },

    /// The expense references someone absent from the roster.
    #[error("Expense {expense_id} references unknown person {person_id}")]
    UnknownPersonReference {
        /// The offending expense.
        expense_id: ExpenseId,
        /// The id missing from the roster.
        person_id: PersonId,
    },

    /// A running total no longer fits a `Decimal`.
    #[error("Amounts in expense {expense_id} overflow the supported range")]
    AmountOverflow {
        /// The expense whose amounts overflowed.
        expense_id: ExpenseId,
    },
}

impl SplitError {
    /// Returns the id of the expense that caused the failure.
    #[must_use]
    pub const fn expense_id(&self) -> ExpenseId {
        match self {
            Self::EmptyConsumerGroup { expense_id }
            | Self::UnknownPersonReference { expense_id, .. }
            | Self::AmountOverflow { expense_id } => *expense_id,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyConsumerGroup { .. } => "EMPTY_CONSUMER_GROUP",
            Self::UnknownPersonReference { .. } => "UNKNOWN_PERSON_REFERENCE",
            Self::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - the expense itself is malformed
            Self::EmptyConsumerGroup { .. } => 400,
            // 422 Unprocessable - the expense and roster disagree, or its
            // amounts cannot be accumulated
            Self::UnknownPersonReference { .. } | Self::AmountOverflow { .. } => 422,
        }
    }
}
