//! Property-based tests for the splitter.
//!
//! - Balance invariant: nets sum to zero
//! - Item-sum invariant: itemized totals equal total consumption
//! - Spending conservation: total spent equals total expense cost

use std::collections::BTreeSet;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::{ExpenseId, PersonId};

use super::service::Splitter;
use crate::expense::{Expense, Item, Person};

const HOUSEHOLD: u128 = 5;

fn roster() -> Vec<Person> {
    (1..=HOUSEHOLD)
        .map(|n| Person::new(PersonId::from_u128(n), format!("Roommate {n}")))
        .collect()
}

/// Strategy to generate item costs (0.00 to 999.99).
fn item_strategy() -> impl Strategy<Value = Item> {
    (
        prop_oneof![Just("rice"), Just("meat"), Just("veg"), Just("milk")],
        0i64..100_000i64,
    )
        .prop_map(|(name, cents)| Item::new(name, Decimal::new(cents, 2)))
}

/// Strategy to generate one expense over the fixed household.
fn expense_strategy() -> impl Strategy<Value = Expense> {
    (
        1..=HOUSEHOLD,
        prop::collection::btree_set(1..=HOUSEHOLD, 1..=3),
        prop::collection::vec(item_strategy(), 1..5),
    )
        .prop_map(|(purchaser, consumers, items)| Expense {
            id: ExpenseId::new(),
            date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            meal_type: "dinner".to_string(),
            items,
            purchased_by: PersonId::from_u128(purchaser),
            consumed_by: consumers
                .into_iter()
                .map(PersonId::from_u128)
                .collect::<BTreeSet<_>>(),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* set of expenses, the net balances SHALL sum to zero (within 1e-9).
    #[test]
    fn prop_nets_sum_to_zero(
        expenses in prop::collection::vec(expense_strategy(), 0..20),
    ) {
        let balances = Splitter::aggregate(&expenses, &roster()).unwrap();
        let sum: Decimal = balances.values().map(|b| b.net).sum();

        prop_assert!(
            sum.abs() <= Decimal::new(1, 9),
            "nets should sum to zero, got {}",
            sum
        );
    }

    /// *For every* person, itemized totals SHALL sum exactly to total consumption.
    #[test]
    fn prop_item_totals_sum_to_consumption(
        expenses in prop::collection::vec(expense_strategy(), 0..20),
    ) {
        let balances = Splitter::aggregate(&expenses, &roster()).unwrap();

        for balance in balances.values() {
            let items: Decimal = balance.item_totals.values().copied().sum();
            prop_assert_eq!(items, balance.total_consumed);
        }
    }

    /// *For any* set of expenses, total spending SHALL equal the total cost of all expenses.
    #[test]
    fn prop_spending_matches_expense_costs(
        expenses in prop::collection::vec(expense_strategy(), 0..20),
    ) {
        let balances = Splitter::aggregate(&expenses, &roster()).unwrap();

        let spent: Decimal = balances.values().map(|b| b.total_spent).sum();
        let cost: Decimal = expenses.iter().filter_map(Expense::total_cost).sum();
        prop_assert_eq!(spent, cost);
    }

    /// *For any* roster, every person SHALL have exactly one record.
    #[test]
    fn prop_every_person_reported(
        expenses in prop::collection::vec(expense_strategy(), 0..5),
    ) {
        let balances = Splitter::aggregate(&expenses, &roster()).unwrap();
        prop_assert_eq!(balances.len(), roster().len());
    }
}
