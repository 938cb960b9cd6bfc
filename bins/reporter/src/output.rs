//! Presentation of a weekly report.
//!
//! Amounts are rounded here and nowhere else.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tally_core::report::{Counterparty, PersonStatement};
use tally_core::{ExpenseSummary, WeeklyReport};
use tally_shared::types::{PersonId, round_for_display};

/// The printed report.
#[derive(Debug, Serialize)]
pub struct ReportOutput {
    pub week_start_date: NaiveDate,
    pub week_end_date: NaiveDate,
    pub report: Vec<PersonStatement>,
    pub transfers: Vec<TransferLine>,
    pub expenses: Vec<ExpenseSummary>,
}

/// A settlement transfer with names resolved.
#[derive(Debug, Serialize)]
pub struct TransferLine {
    pub from: PersonId,
    pub from_name: String,
    pub to: PersonId,
    pub to_name: String,
    pub amount: Decimal,
}

impl ReportOutput {
    pub fn new(report: &WeeklyReport, expenses: Vec<ExpenseSummary>, scale: u32) -> Self {
        let name_of = |id: &PersonId| {
            report
                .balances
                .get(id)
                .map(|balance| balance.name.clone())
                .unwrap_or_default()
        };

        Self {
            week_start_date: report.period.start(),
            week_end_date: report.period.end(),
            report: report
                .statements()
                .into_iter()
                .map(|statement| round_statement(statement, scale))
                .collect(),
            transfers: report
                .transfers
                .iter()
                .map(|transfer| TransferLine {
                    from: transfer.from,
                    from_name: name_of(&transfer.from),
                    to: transfer.to,
                    to_name: name_of(&transfer.to),
                    amount: round_for_display(transfer.amount, scale),
                })
                .collect(),
            expenses,
        }
    }
}

fn round_statement(statement: PersonStatement, scale: u32) -> PersonStatement {
    let round_all = |parties: Vec<Counterparty>| -> Vec<Counterparty> {
        parties
            .into_iter()
            .map(|party| Counterparty {
                amount: round_for_display(party.amount, scale),
                ..party
            })
            .collect()
    };

    PersonStatement {
        total_spent: round_for_display(statement.total_spent, scale),
        total_consumed: round_for_display(statement.total_consumed, scale),
        net: round_for_display(statement.net, scale),
        items: statement
            .items
            .into_iter()
            .map(|(name, amount)| (name, round_for_display(amount, scale)))
            .collect::<BTreeMap<_, _>>(),
        owes_to: round_all(statement.owes_to),
        owed_by: round_all(statement.owed_by),
        ..statement
    }
}
