//! Splitter: divides each expense across its consumers.

use rust_decimal::Decimal;

use super::error::SplitError;
use super::types::{Balances, PersonBalance};
use crate::expense::{Expense, Person};

/// Aggregates expenses into per-person balances.
///
/// Each expense's cost is credited in full to its purchaser, and every item
/// is divided evenly across the consumer group. Consumption is itemized, so a
/// person's `item_totals` always sum to their `total_consumed`.
pub struct Splitter;

impl Splitter {
    /// Aggregates `expenses` into one balance record per roster person.
    ///
    /// Persons with no activity still appear, with zero balances. The sum of
    /// all `net` values is zero up to decimal division residue.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::EmptyConsumerGroup` if an expense has no consumers,
    /// `SplitError::UnknownPersonReference` if an expense names someone
    /// absent from `persons`, or `SplitError::AmountOverflow` if a total no
    /// longer fits a `Decimal`. Nothing is returned for the other expenses.
    pub fn aggregate<'a, I>(expenses: I, persons: &[Person]) -> Result<Balances, SplitError>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut balances: Balances = persons
            .iter()
            .map(|person| (person.id, PersonBalance::new(person)))
            .collect();

        for expense in expenses {
            Self::apply(&mut balances, expense)?;
        }

        Ok(balances)
    }

    /// Applies a single expense to the running balances.
    fn apply(balances: &mut Balances, expense: &Expense) -> Result<(), SplitError> {
        if expense.consumed_by.is_empty() {
            return Err(SplitError::EmptyConsumerGroup {
                expense_id: expense.id,
            });
        }

        let unknown = |person_id| SplitError::UnknownPersonReference {
            expense_id: expense.id,
            person_id,
        };

        // Reject the whole expense before touching any balance.
        if let Some(missing) = std::iter::once(&expense.purchased_by)
            .chain(&expense.consumed_by)
            .find(|id| !balances.contains_key(*id))
        {
            return Err(unknown(*missing));
        }

        let overflow = || SplitError::AmountOverflow {
            expense_id: expense.id,
        };

        balances
            .get_mut(&expense.purchased_by)
            .ok_or_else(|| unknown(expense.purchased_by))?
            .add_spent(expense.total_cost().ok_or_else(overflow)?)
            .ok_or_else(overflow)?;

        let consumers = Decimal::from(expense.consumed_by.len());
        for consumer in &expense.consumed_by {
            let balance = balances
                .get_mut(consumer)
                .ok_or_else(|| unknown(*consumer))?;
            for item in &expense.items {
                let share = item.cost.checked_div(consumers).ok_or_else(overflow)?;
                balance
                    .add_item_share(&item.name, share)
                    .ok_or_else(overflow)?;
            }
        }

        Ok(())
    }
}
