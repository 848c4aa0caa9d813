use crate::model::{Balance, Expense, Money, Participant, ParticipantId};
use fxhash::FxHashMap;

/// Folds an expense history into one net balance per participant.
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Returns one [`Balance`] per participant, in roster order.
    ///
    /// The payer is credited with the full amount and every split entry is
    /// debited its share. Ids that are not in `participants` are skipped, as
    /// are contributions that would push a balance past what [`Money`] can
    /// represent.
    pub fn compute(&self, participants: &[Participant], expenses: &[Expense]) -> Vec<Balance> {
        let mut running: FxHashMap<&ParticipantId, Money> = participants
            .iter()
            .map(|participant| (&participant.id, Money::ZERO))
            .collect();

        for expense in expenses {
            match running.get_mut(&expense.paid_by) {
                Some(total) => match total.checked_add(expense.amount) {
                    Some(credited) => *total = credited,
                    None => tracing::warn!(
                        expense_id = %expense.id,
                        participant_id = %expense.paid_by,
                        amount = %expense.amount,
                        "Balance would overflow; credit ignored"
                    ),
                },
                None => tracing::warn!(
                    expense_id = %expense.id,
                    participant_id = %expense.paid_by,
                    amount = %expense.amount,
                    "Payer is not in the roster; credit ignored"
                ),
            }

            for (participant_id, share) in &expense.splits {
                match running.get_mut(participant_id) {
                    Some(total) => match total.checked_sub(*share) {
                        Some(debited) => *total = debited,
                        None => tracing::warn!(
                            expense_id = %expense.id,
                            participant_id = %participant_id,
                            share = %share,
                            "Balance would overflow; debit ignored"
                        ),
                    },
                    None => tracing::warn!(
                        expense_id = %expense.id,
                        participant_id = %participant_id,
                        share = %share,
                        "Split participant is not in the roster; debit ignored"
                    ),
                }
            }
        }

        tracing::debug!(
            participant_count = participants.len(),
            expense_count = expenses.len(),
            "Computed balances"
        );

        participants
            .iter()
            .map(|participant| Balance {
                participant_id: participant.id.clone(),
                value: running.get(&participant.id).copied().unwrap_or(Money::ZERO),
            })
            .collect()
    }
}

pub fn compute_balances(participants: &[Participant], expenses: &[Expense]) -> Vec<Balance> {
    BalanceAggregator.compute(participants, expenses)
}
