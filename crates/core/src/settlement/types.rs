//! Settlement output types.

use rust_decimal::Decimal;
use serde::Serialize;
use tally_shared::types::PersonId;

/// A single payment that moves a debtor and a creditor toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transfer {
    /// Who pays (a debtor).
    pub from: PersonId,
    /// Who gets paid (a creditor).
    pub to: PersonId,
    /// Amount paid. Always positive.
    pub amount: Decimal,
}

/// A party with an outstanding balance during settlement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Party {
    pub(crate) id: PersonId,
    /// Magnitude still to be received (creditor) or paid (debtor).
    pub(crate) remaining: Decimal,
}
