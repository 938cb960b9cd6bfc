//! Report generation service.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::error::ReportError;
use super::types::{Period, WeeklyReport};
use crate::expense::{Expense, ExpenseSource, ExpenseSummary, Person};
use crate::settlement::Settler;
use crate::split::{Balances, Splitter, net_balances};

/// Service for computing balances and settlement reports.
///
/// Holds no state besides its settlement tolerance; every call works on its
/// own freshly built structures, so one instance can serve concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportService {
    settler: Settler,
}

impl ReportService {
    /// Creates a report service that settles with `settler`.
    #[must_use]
    pub const fn new(settler: Settler) -> Self {
        Self { settler }
    }

    /// Computes per-person balances for expenses dated within `period`.
    ///
    /// Expenses outside the period are ignored.
    pub fn compute_balances(
        &self,
        period: Period,
        expenses: &[Expense],
        persons: &[Person],
    ) -> Result<Balances, ReportError> {
        let in_period: Vec<&Expense> = expenses
            .iter()
            .filter(|expense| period.contains(expense.date))
            .collect();

        debug!(
            start = %period.start(),
            end = %period.end(),
            expenses = in_period.len(),
            skipped = expenses.len() - in_period.len(),
            persons = persons.len(),
            "Aggregating expenses"
        );

        Splitter::aggregate(in_period, persons).map_err(|err| {
            warn!(
                expense_id = %err.expense_id(),
                code = err.error_code(),
                "Expense split failed"
            );
            ReportError::from(err)
        })
    }

    /// Computes balances and the transfers that settle them for `period`.
    pub fn compute_weekly_report(
        &self,
        period: Period,
        expenses: &[Expense],
        persons: &[Person],
    ) -> Result<WeeklyReport, ReportError> {
        let balances = self.compute_balances(period, expenses, persons)?;

        let transfers = self
            .settler
            .settle(&net_balances(&balances))
            .inspect_err(|err| warn!(error = %err, "Settlement failed"))?;

        let report = WeeklyReport {
            period,
            balances,
            transfers,
        };

        info!(
            start = %period.start(),
            end = %period.end(),
            transfers = report.transfers.len(),
            total = %report.total_transferred(),
            "Weekly report computed"
        );

        Ok(report)
    }

    /// Loads the week containing `anchor` from `source` and computes its balances.
    pub fn balances_from_source<S>(
        &self,
        source: &S,
        anchor: NaiveDate,
    ) -> Result<Balances, ReportError>
    where
        S: ExpenseSource + ?Sized,
    {
        let period = Period::week_containing(anchor)?;
        let (expenses, persons) = Self::load(source, period)?;
        self.compute_balances(period, &expenses, &persons)
    }

    /// Loads the week containing `anchor` from `source` and computes its report.
    pub fn weekly_report_from_source<S>(
        &self,
        source: &S,
        anchor: NaiveDate,
    ) -> Result<WeeklyReport, ReportError>
    where
        S: ExpenseSource + ?Sized,
    {
        let period = Period::week_containing(anchor)?;
        let (expenses, persons) = Self::load(source, period)?;
        self.compute_weekly_report(period, &expenses, &persons)
    }

    /// Lists expenses with payer and consumer names, oldest first.
    #[must_use]
    pub fn summarize_expenses(expenses: &[Expense], persons: &[Person]) -> Vec<ExpenseSummary> {
        let mut summaries: Vec<ExpenseSummary> = expenses
            .iter()
            .map(|expense| ExpenseSummary::new(expense, persons))
            .collect();
        summaries.sort_by_key(|summary| (summary.date, summary.id));
        summaries
    }

    fn load<S>(source: &S, period: Period) -> Result<(Vec<Expense>, Vec<Person>), ReportError>
    where
        S: ExpenseSource + ?Sized,
    {
        let expenses = source.expenses_between(period)?;
        let persons = source.roster()?;
        Ok((expenses, persons))
    }
}
