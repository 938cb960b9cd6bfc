//! Report error types.

use chrono::NaiveDate;
use tally_shared::AppError;
use thiserror::Error;

use crate::settlement::SettlementError;
use crate::split::SplitError;

/// Errors that can occur during report generation.
///
/// A failed computation never yields a partial report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// The week around the anchor date falls outside the supported calendar.
    #[error("No full week can be resolved around {anchor}")]
    WeekOutOfRange {
        /// The requested anchor date.
        anchor: NaiveDate,
    },

    /// Expenses could not be split.
    #[error(transparent)]
    Split(#[from] SplitError),

    /// Balances could not be settled.
    #[error(transparent)]
    Settlement(#[from] SettlementError),

    /// The roster or expense source failed.
    #[error("Data source failed: {0}")]
    Source(#[from] AppError),
}

impl ReportError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::WeekOutOfRange { .. } => "WEEK_OUT_OF_RANGE",
            Self::Split(err) => err.error_code(),
            Self::Settlement(err) => err.error_code(),
            Self::Source(err) => err.error_code(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidDateRange { .. } | Self::WeekOutOfRange { .. } => 400,
            Self::Split(err) => err.http_status_code(),
            Self::Settlement(err) => err.http_status_code(),
            Self::Source(err) => err.status_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tally_shared::types::ExpenseId;

    #[test]
    fn test_error_codes_delegate() {
        let split: ReportError = SplitError::EmptyConsumerGroup {
            expense_id: ExpenseId::from_u128(1),
        }
        .into();
        assert_eq!(split.error_code(), "EMPTY_CONSUMER_GROUP");
        assert_eq!(split.http_status_code(), 400);

        let settlement: ReportError = SettlementError::ImbalancedLedger {
            credits: dec!(1),
            debits: dec!(2),
        }
        .into();
        assert_eq!(settlement.error_code(), "IMBALANCED_LEDGER");
        assert_eq!(settlement.http_status_code(), 500);

        let source: ReportError = AppError::DataSource("offline".into()).into();
        assert_eq!(source.error_code(), "DATA_SOURCE_ERROR");
        assert_eq!(source.to_string(), "Data source failed: Data source error: offline");
    }

    #[test]
    fn test_invalid_date_range_display() {
        let err = ReportError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        };
        assert_eq!(err.error_code(), "INVALID_DATE_RANGE");
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(
            err.to_string(),
            "Invalid date range: start 2024-03-10 is after end 2024-03-04"
        );
    }

    #[test]
    fn test_week_out_of_range_display() {
        let err = ReportError::WeekOutOfRange {
            anchor: NaiveDate::MAX,
        };
        assert_eq!(err.error_code(), "WEEK_OUT_OF_RANGE");
        assert_eq!(err.http_status_code(), 400);
        assert!(err.to_string().starts_with("No full week can be resolved around"));
    }
}
