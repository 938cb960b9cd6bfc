//! Expense records, household roster, and the read-only data-source port.

pub mod source;
pub mod types;

pub use source::{ExpenseSource, InMemorySource};
pub use types::{Expense, ExpenseSummary, Item, Person};
