//! Per-person balance records produced by the splitter.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tally_shared::types::PersonId;

use crate::expense::Person;

/// Balance records keyed by person, iterated in ascending id order.
pub type Balances = BTreeMap<PersonId, PersonBalance>;

/// What one person spent and consumed over a period.
///
/// `total_consumed` is always the sum of `item_totals`, and
/// `net = total_spent - total_consumed`. Positive `net` means the household
/// owes this person; negative means they owe the household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonBalance {
    /// The person.
    pub person_id: PersonId,
    /// Display name.
    pub name: String,
    /// Total paid for purchases.
    pub total_spent: Decimal,
    /// Total share of consumed purchases.
    pub total_consumed: Decimal,
    /// Consumed share per item name.
    pub item_totals: BTreeMap<String, Decimal>,
    /// `total_spent - total_consumed`.
    pub net: Decimal,
}

impl PersonBalance {
    /// Creates a zeroed balance for a person.
    #[must_use]
    pub fn new(person: &Person) -> Self {
        Self {
            person_id: person.id,
            name: person.name.clone(),
            total_spent: Decimal::ZERO,
            total_consumed: Decimal::ZERO,
            item_totals: BTreeMap::new(),
            net: Decimal::ZERO,
        }
    }

    /// Adds a purchase paid by this person.
    ///
    /// Returns `None` and leaves the balance untouched if a total would
    /// overflow.
    #[must_use = "an overflowed amount is not recorded"]
    pub fn add_spent(&mut self, amount: Decimal) -> Option<()> {
        let total_spent = self.total_spent.checked_add(amount)?;
        let net = total_spent.checked_sub(self.total_consumed)?;
        self.total_spent = total_spent;
        self.net = net;
        Some(())
    }

    /// Adds this person's share of one item.
    ///
    /// Returns `None` and leaves the balance untouched if a total would
    /// overflow.
    #[must_use = "an overflowed share is not recorded"]
    pub fn add_item_share(&mut self, item: &str, share: Decimal) -> Option<()> {
        let previous = self.item_totals.get(item).copied();
        let item_total = previous.unwrap_or(Decimal::ZERO).checked_add(share)?;
        self.item_totals.insert(item.to_string(), item_total);

        // Consumption is derived from the itemized totals so the two can never drift.
        let totals = self
            .item_totals
            .values()
            .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(*amount))
            .and_then(|consumed| Some((consumed, self.total_spent.checked_sub(consumed)?)));

        if let Some((total_consumed, net)) = totals {
            self.total_consumed = total_consumed;
            self.net = net;
            return Some(());
        }

        match previous {
            Some(amount) => self.item_totals.insert(item.to_string(), amount),
            None => self.item_totals.remove(item),
        };
        None
    }

    /// Returns true if the person neither spent nor consumed anything.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.total_spent.is_zero() && self.item_totals.is_empty()
    }
}

/// Extracts the net balance of every person.
#[must_use]
pub fn net_balances(balances: &Balances) -> BTreeMap<PersonId, Decimal> {
    balances
        .iter()
        .map(|(id, balance)| (*id, balance.net))
        .collect()
}
