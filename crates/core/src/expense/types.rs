//! Household reference data and expense records.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{ExpenseId, PersonId};

/// A household member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier.
    pub id: PersonId,
    /// Display name.
    pub name: String,
}

impl Person {
    /// Creates a new person.
    #[must_use]
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A named cost component of an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name (e.g., "rice"). Older records store it under `item`.
    #[serde(alias = "item")]
    pub name: String,
    /// Cost of the item. Never negative.
    pub cost: Decimal,
}

impl Item {
    /// Creates a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: Decimal) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

/// A recorded household purchase.
///
/// `consumed_by` is a set, so listing the same person twice does not change
/// their share. An empty set is rejected by the splitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier.
    pub id: ExpenseId,
    /// Date of purchase.
    pub date: NaiveDate,
    /// Meal the purchase was for (e.g., "dinner").
    #[serde(alias = "mealType")]
    pub meal_type: String,
    /// Itemized costs, in entry order.
    pub items: Vec<Item>,
    /// Who paid.
    #[serde(alias = "purchasedBy")]
    pub purchased_by: PersonId,
    /// Who shares the cost.
    #[serde(alias = "consumedBy")]
    pub consumed_by: BTreeSet<PersonId>,
}

impl Expense {
    /// Sum of all item costs, or `None` if the sum overflows `Decimal`.
    #[must_use]
    pub fn total_cost(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.cost))
    }
}

/// An expense enriched with display names and its total, as listed to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseSummary {
    /// Expense identifier.
    pub id: ExpenseId,
    /// Date of purchase.
    pub date: NaiveDate,
    /// Meal type.
    pub meal_type: String,
    /// Itemized costs.
    pub items: Vec<Item>,
    /// Who paid.
    pub purchased_by: PersonId,
    /// Display name of the payer, if present in the roster.
    pub purchased_by_name: Option<String>,
    /// Who shares the cost, ascending by id.
    pub consumed_by: Vec<PersonId>,
    /// Display names of the consumers; unknown ids are skipped.
    pub consumed_by_names: Vec<String>,
    /// Sum of all item costs; `None` if it does not fit a `Decimal`.
    pub total_cost: Option<Decimal>,
}

impl ExpenseSummary {
    /// Builds a summary for `expense`, resolving names against `persons`.
    #[must_use]
    pub fn new(expense: &Expense, persons: &[Person]) -> Self {
        let name_of = |id: PersonId| {
            persons
                .iter()
                .find(|person| person.id == id)
                .map(|person| person.name.clone())
        };

        Self {
            id: expense.id,
            date: expense.date,
            meal_type: expense.meal_type.clone(),
            items: expense.items.clone(),
            purchased_by: expense.purchased_by,
            purchased_by_name: name_of(expense.purchased_by),
            consumed_by: expense.consumed_by.iter().copied().collect(),
            consumed_by_names: expense
                .consumed_by
                .iter()
                .filter_map(|id| name_of(*id))
                .collect(),
            total_cost: expense.total_cost(),
        }
    }
}
