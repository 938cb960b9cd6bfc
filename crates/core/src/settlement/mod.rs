//! Debt netting.
//!
//! Converts per-person net balances into point-to-point transfers that
//! settle every balance, in a reproducible order.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use error::SettlementError;
pub use service::Settler;
pub use types::Transfer;
