//! Balance and settlement reports.
//!
//! This module composes the splitter and the settler into the operations
//! callers use:
//! - Period balances (who spent and consumed what)
//! - Weekly reports (balances plus settlement transfers)
//! - Per-person statements
//! - Expense listings with resolved names

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::{Counterparty, Period, PersonStatement, WeeklyReport};
