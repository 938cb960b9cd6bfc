//! Property-based tests for the settler.
//!
//! - Settlement completeness: replaying transfers zeroes every balance
//! - Transfer bound: at most N - 1 transfers for N active parties
//! - Conservation: transferred total equals the sum of credits
//! - Determinism: identical input yields identical output

use std::collections::BTreeMap;

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::{DEFAULT_TOLERANCE, PersonId, is_negligible};

use super::error::SettlementError;
use super::service::Settler;
use super::types::Transfer;

/// Strategy to generate a balanced ledger of 1..12 parties.
///
/// The last party absorbs the negated sum of the others.
fn balanced_nets() -> impl Strategy<Value = BTreeMap<PersonId, Decimal>> {
    prop::collection::vec(-100_000i64..100_000i64, 0..11).prop_map(|cents| {
        let mut nets: BTreeMap<PersonId, Decimal> = cents
            .iter()
            .enumerate()
            .map(|(i, c)| (PersonId::from_u128(i as u128 + 1), Decimal::new(*c, 2)))
            .collect();
        let sum: Decimal = nets.values().copied().sum();
        nets.insert(PersonId::from_u128(1_000), -sum);
        nets
    })
}

fn replay(
    nets: &BTreeMap<PersonId, Decimal>,
    transfers: &[Transfer],
) -> BTreeMap<PersonId, Decimal> {
    let mut running = nets.clone();
    for transfer in transfers {
        *running.entry(transfer.from).or_insert(Decimal::ZERO) += transfer.amount;
        *running.entry(transfer.to).or_insert(Decimal::ZERO) -= transfer.amount;
    }
    running
}

fn active_count(nets: &BTreeMap<PersonId, Decimal>) -> usize {
    nets.values()
        .filter(|net| !is_negligible(**net, DEFAULT_TOLERANCE))
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* balanced ledger, replaying the transfers SHALL zero every balance.
    #[test]
    fn prop_transfers_settle_every_balance(nets in balanced_nets()) {
        let transfers = Settler::default().settle(&nets).unwrap();
        let settled = replay(&nets, &transfers);

        for (id, balance) in &settled {
            prop_assert!(
                is_negligible(*balance, DEFAULT_TOLERANCE),
                "{} left with {}",
                id,
                balance
            );
        }
    }

    /// *For any* N active parties, settlement SHALL use at most N - 1 transfers.
    #[test]
    fn prop_transfer_count_bounded(nets in balanced_nets()) {
        let transfers = Settler::default().settle(&nets).unwrap();
        prop_assert!(transfers.len() <= active_count(&nets).saturating_sub(1));
    }

    /// *For any* balanced ledger, the transferred total SHALL equal total credits,
    /// and every transfer SHALL be positive and flow from a debtor to a creditor.
    #[test]
    fn prop_transfers_conserve_credits(nets in balanced_nets()) {
        let transfers = Settler::default().settle(&nets).unwrap();

        let credits: Decimal = nets.values().filter(|n| n.is_sign_positive()).copied().sum();
        let moved: Decimal = transfers.iter().map(|t| t.amount).sum();
        prop_assert_eq!(moved, credits);

        for t in &transfers {
            prop_assert!(t.amount > Decimal::ZERO);
            prop_assert!(nets[&t.from] < Decimal::ZERO);
            prop_assert!(nets[&t.to] > Decimal::ZERO);
        }
    }

    /// *For any* ledger, settling twice SHALL yield the identical sequence.
    #[test]
    fn prop_settle_deterministic(nets in balanced_nets()) {
        let settler = Settler::default();
        prop_assert_eq!(settler.settle(&nets).unwrap(), settler.settle(&nets).unwrap());
    }

    /// *For any* ledger that does not sum to zero, settlement SHALL fail.
    #[test]
    fn prop_imbalance_rejected(
        nets in balanced_nets(),
        skew in 1i64..100_000i64,
    ) {
        let mut skewed = nets;
        *skewed.entry(PersonId::from_u128(2_000)).or_insert(Decimal::ZERO) += Decimal::new(skew, 2);

        let result = Settler::default().settle(&skewed);
        prop_assert!(
            matches!(result, Err(SettlementError::ImbalancedLedger { .. })),
            "expected imbalance, got {:?}",
            result
        );
    }
}
