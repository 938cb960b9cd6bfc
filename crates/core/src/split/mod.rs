//! Expense splitting.
//!
//! This module turns raw expense records into per-person balances:
//! - Spending credited to the purchaser
//! - Even per-item shares charged to each consumer
//! - Itemized consumption breakdowns
//! - Net balances (spent minus consumed)

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use error::SplitError;
pub use service::Splitter;
pub use types::{Balances, PersonBalance, net_balances};
