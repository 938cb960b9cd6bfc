//! Settler: greedy debt netting.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tally_shared::types::{DEFAULT_TOLERANCE, PersonId, is_negligible};

use super::error::SettlementError;
use super::types::{Party, Transfer};

/// Turns net balances into a short list of payments that zeroes them all.
///
/// Creditors and debtors are matched greedily, lowest person id first on both
/// sides, and each step moves the smaller of the two outstanding magnitudes.
/// Every step retires at least one party, so `N` active parties need at most
/// `N - 1` transfers. Balances only ever move toward zero.
#[derive(Debug, Clone, Copy)]
pub struct Settler {
    tolerance: Decimal,
}

impl Default for Settler {
    fn default() -> Self {
        Self::with_tolerance(DEFAULT_TOLERANCE)
    }
}

impl Settler {
    /// Creates a settler treating magnitudes at or below `tolerance` as zero.
    #[must_use]
    pub const fn with_tolerance(tolerance: Decimal) -> Self {
        Self { tolerance }
    }

    /// Returns the zero tolerance.
    #[must_use]
    pub const fn tolerance(&self) -> Decimal {
        self.tolerance
    }

    /// Computes the transfers that settle `nets`.
    ///
    /// Positive values are owed money, negative values owe money. Values
    /// within tolerance of zero are ignored.
    ///
    /// A party is retired once its remainder is within tolerance, without a
    /// transfer for that remainder. Each party therefore ends within
    /// `tolerance` of zero after replay, and the amounts left unsettled add
    /// up to at most `N * tolerance` across `N` active parties.
    ///
    /// # Errors
    ///
    /// Returns `SettlementError::ImbalancedLedger` if credits and debits
    /// differ by more than the tolerance, or `SettlementError::AmountOverflow`
    /// if either side's sum does not fit a `Decimal`. No transfers are
    /// produced then.
    pub fn settle(
        &self,
        nets: &BTreeMap<PersonId, Decimal>,
    ) -> Result<Vec<Transfer>, SettlementError> {
        let (mut creditors, mut debtors) = self.partition(nets);

        let credits = Self::total(&creditors)?;
        let debits = Self::total(&debtors)?;
        if !is_negligible(credits - debits, self.tolerance) {
            return Err(SettlementError::ImbalancedLedger { credits, debits });
        }

        let mut transfers = Vec::with_capacity(creditors.len() + debtors.len());
        let (mut next_creditor, mut next_debtor) = (0, 0);

        while let (Some(creditor), Some(debtor)) = (
            creditors.get_mut(next_creditor),
            debtors.get_mut(next_debtor),
        ) {
            let amount = creditor.remaining.min(debtor.remaining);
            transfers.push(Transfer {
                from: debtor.id,
                to: creditor.id,
                amount,
            });

            creditor.remaining -= amount;
            debtor.remaining -= amount;

            if is_negligible(creditor.remaining, self.tolerance) {
                next_creditor += 1;
            }
            if is_negligible(debtor.remaining, self.tolerance) {
                next_debtor += 1;
            }
        }

        Ok(transfers)
    }

    fn total(parties: &[Party]) -> Result<Decimal, SettlementError> {
        parties.iter().try_fold(Decimal::ZERO, |acc, party| {
            acc.checked_add(party.remaining)
                .ok_or(SettlementError::AmountOverflow { person_id: party.id })
        })
    }

    /// Splits active balances into creditors and debtors, ascending by id.
    fn partition(&self, nets: &BTreeMap<PersonId, Decimal>) -> (Vec<Party>, Vec<Party>) {
        let mut creditors = Vec::new();
        let mut debtors = Vec::new();

        for (&id, &net) in nets {
            if is_negligible(net, self.tolerance) {
                continue;
            }
            if net.is_sign_positive() {
                creditors.push(Party { id, remaining: net });
            } else {
                debtors.push(Party {
                    id,
                    remaining: -net,
                });
            }
        }

        (creditors, debtors)
    }
}
