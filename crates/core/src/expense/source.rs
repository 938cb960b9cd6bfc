//! Read-only access to the household's roster and expense records.
//!
//! The engine never talks to storage itself. Callers hand it a snapshot
//! through this port; the in-memory implementation backs tests and the
//! reporter binary.

use tally_shared::{AppError, AppResult};

use super::types::{Expense, Person};
use crate::report::Period;

/// Read-only data source for expenses and the household roster.
pub trait ExpenseSource: Send + Sync {
    /// Returns every expense dated within `period`, both ends inclusive.
    fn expenses_between(&self, period: Period) -> AppResult<Vec<Expense>>;

    /// Returns every known person.
    fn roster(&self) -> AppResult<Vec<Person>>;
}

/// An immutable in-memory snapshot of the household.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    persons: Vec<Person>,
    expenses: Vec<Expense>,
}

impl InMemorySource {
    /// Creates a source from a roster and a list of expenses.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if two people share an id.
    pub fn new(persons: Vec<Person>, expenses: Vec<Expense>) -> AppResult<Self> {
        for (index, person) in persons.iter().enumerate() {
            if persons[..index].iter().any(|other| other.id == person.id) {
                return Err(AppError::Validation(format!(
                    "duplicate person id {}",
                    person.id
                )));
            }
        }

        Ok(Self { persons, expenses })
    }

    /// Number of expenses in the snapshot.
    #[must_use]
    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }
}

impl ExpenseSource for InMemorySource {
    fn expenses_between(&self, period: Period) -> AppResult<Vec<Expense>> {
        Ok(self
            .expenses
            .iter()
            .filter(|expense| period.contains(expense.date))
            .cloned()
            .collect())
    }

    fn roster(&self) -> AppResult<Vec<Person>> {
        Ok(self.persons.clone())
    }
}
