//! Report types.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;
use tally_shared::types::PersonId;

use super::error::ReportError;
use crate::settlement::Transfer;
use crate::split::{Balances, PersonBalance};

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    /// Creates a period covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if start > end {
            return Err(ReportError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the Monday-to-Sunday week containing `anchor`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::WeekOutOfRange` if the week starts or ends
    /// outside the supported calendar.
    pub fn week_containing(anchor: NaiveDate) -> Result<Self, ReportError> {
        let week = anchor.week(Weekday::Mon);
        match (week.checked_first_day(), week.checked_last_day()) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(ReportError::WeekOutOfRange { anchor }),
        }
    }

    /// First day of the period.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the period.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` falls within the period, both ends inclusive.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// The other side of a transfer, as seen from one person's statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counterparty {
    /// The other person.
    pub person_id: PersonId,
    /// Their display name.
    pub name: String,
    /// Amount transferred.
    pub amount: Decimal,
}

/// One person's view of a weekly report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonStatement {
    /// The person.
    pub person_id: PersonId,
    /// Display name.
    pub name: String,
    /// Total paid for purchases.
    pub total_spent: Decimal,
    /// Total share of consumed purchases.
    pub total_consumed: Decimal,
    /// `total_spent - total_consumed`.
    pub net: Decimal,
    /// Consumed share per item name.
    pub items: BTreeMap<String, Decimal>,
    /// Number of distinct items consumed.
    pub item_count: usize,
    /// Payments this person must make.
    pub owes_to: Vec<Counterparty>,
    /// Payments this person will receive.
    pub owed_by: Vec<Counterparty>,
}

/// Balances and settlement for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyReport {
    /// Period covered.
    pub period: Period,
    /// Per-person balances, ascending by id.
    pub balances: Balances,
    /// Settlement transfers, in settlement order.
    pub transfers: Vec<Transfer>,
}

impl WeeklyReport {
    /// Sum of all transfer amounts.
    #[must_use]
    pub fn total_transferred(&self) -> Decimal {
        self.transfers.iter().map(|t| t.amount).sum()
    }

    /// Builds per-person statements for everyone active in the period.
    ///
    /// People who neither bought nor consumed anything are left out.
    #[must_use]
    pub fn statements(&self) -> Vec<PersonStatement> {
        self.balances
            .values()
            .filter(|balance| !balance.is_idle())
            .map(|balance| self.statement_for(balance))
            .collect()
    }

    fn statement_for(&self, balance: &PersonBalance) -> PersonStatement {
        let counterparty = |person_id: PersonId, amount: Decimal| Counterparty {
            person_id,
            name: self
                .balances
                .get(&person_id)
                .map(|other| other.name.clone())
                .unwrap_or_default(),
            amount,
        };

        PersonStatement {
            person_id: balance.person_id,
            name: balance.name.clone(),
            total_spent: balance.total_spent,
            total_consumed: balance.total_consumed,
            net: balance.net,
            items: balance.item_totals.clone(),
            item_count: balance.item_totals.len(),
            owes_to: self
                .transfers
                .iter()
                .filter(|t| t.from == balance.person_id)
                .map(|t| counterparty(t.to, t.amount))
                .collect(),
            owed_by: self
                .transfers
                .iter()
                .filter(|t| t.to == balance.person_id)
                .map(|t| counterparty(t.from, t.amount))
                .collect(),
        }
    }
}
