//! Decimal helpers for money amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are plain `rust_decimal::Decimal`; the household tracks a single currency.

use rust_decimal::prelude::*;

/// Magnitude at or below which a balance counts as settled.
///
/// Even splits such as `10 / 3` leave a residue in the 28th decimal place,
/// so exact comparison against zero is not usable for settled balances.
pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 9);

/// Returns true if `amount` is within `tolerance` of zero.
#[must_use]
pub fn is_negligible(amount: Decimal, tolerance: Decimal) -> bool {
    amount.abs() <= tolerance
}

/// Rounds an amount for presentation using Banker's Rounding.
///
/// Only the presentation edge rounds; aggregation and settlement stay exact.
#[must_use]
pub fn round_for_display(amount: Decimal, scale: u32) -> Decimal {
    amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
