//! Core business logic for Tally.
//!
//! This crate contains pure business logic with ZERO storage or web dependencies.
//! It turns a household's expense records into balances and settlements.
//!
//! # Modules
//!
//! - `expense` - Expense records, roster, and the read-only data-source port
//! - `split` - Dividing expenses across consumers into per-person balances
//! - `settlement` - Greedy debt netting into transfers
//! - `report` - Period balances, weekly reports, and statements

pub mod expense;
pub mod report;
pub mod settlement;
pub mod split;

pub use expense::{Expense, ExpenseSource, ExpenseSummary, InMemorySource, Item, Person};
pub use report::{Period, ReportError, ReportService, WeeklyReport};
pub use settlement::{SettlementError, Settler, Transfer};
pub use split::{Balances, PersonBalance, SplitError, Splitter};
