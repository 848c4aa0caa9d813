use crate::model::{Balance, Money, ParticipantId, Settlement};
use fxhash::FxHashMap;

/// Balances within one cent of zero count as settled.
pub const SETTLEMENT_TOLERANCE: Money = Money::CENT;

/// Greedy largest-creditor / largest-debtor settlement planning.
///
/// The result is not guaranteed to have the fewest possible payments, but it
/// is deterministic and produces at most `creditors + debtors - 1` entries.
pub struct SettlementPlanner;

struct Position<'a> {
    participant_id: &'a ParticipantId,
    remaining: Money,
}

impl SettlementPlanner {
    /// Plans payments that bring every balance to within
    /// [`SETTLEMENT_TOLERANCE`] of zero. `balances` is not modified.
    pub fn plan(&self, balances: &[Balance]) -> Vec<Settlement> {
        let mut creditors: Vec<Position<'_>> = balances
            .iter()
            .filter(|balance| balance.value > SETTLEMENT_TOLERANCE)
            .map(Position::from)
            .collect();
        let mut debtors: Vec<Position<'_>> = balances
            .iter()
            .filter(|balance| balance.value < -SETTLEMENT_TOLERANCE)
            .map(Position::from)
            .collect();

        // Stable sorts: equal balances keep their input order.
        creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
        debtors.sort_by(|a, b| a.remaining.cmp(&b.remaining));

        let mut settlements =
            Vec::with_capacity((creditors.len() + debtors.len()).saturating_sub(1));
        let mut creditor_idx = 0;
        let mut debtor_idx = 0;

        while creditor_idx < creditors.len() && debtor_idx < debtors.len() {
            let creditor = &mut creditors[creditor_idx];
            let debtor = &mut debtors[debtor_idx];

            let amount = creditor.remaining.min(-debtor.remaining);
            if amount > SETTLEMENT_TOLERANCE {
                settlements.push(Settlement {
                    from: debtor.participant_id.clone(),
                    to: creditor.participant_id.clone(),
                    amount,
                });
                creditor.remaining -= amount;
                debtor.remaining += amount;
            }

            if creditor.remaining <= SETTLEMENT_TOLERANCE {
                creditor_idx += 1;
            }
            if debtor.remaining >= -SETTLEMENT_TOLERANCE {
                debtor_idx += 1;
            }
        }

        tracing::debug!(
            creditor_count = creditors.len(),
            debtor_count = debtors.len(),
            settlement_count = settlements.len(),
            "Planned settlements"
        );

        settlements
    }
}

impl<'a> From<&'a Balance> for Position<'a> {
    fn from(balance: &'a Balance) -> Self {
        Self {
            participant_id: &balance.participant_id,
            remaining: balance.value,
        }
    }
}

pub fn compute_settlements(balances: &[Balance]) -> Vec<Settlement> {
    SettlementPlanner.plan(balances)
}

/// Applies `settlements` to a copy of `balances`: the payer's balance rises
/// by the amount and the receiver's falls by it.
pub fn apply_settlements(balances: &[Balance], settlements: &[Settlement]) -> Vec<Balance> {
    let mut adjustments: FxHashMap<&ParticipantId, Money> = FxHashMap::default();
    for settlement in settlements {
        *adjustments.entry(&settlement.from).or_insert(Money::ZERO) += settlement.amount;
        *adjustments.entry(&settlement.to).or_insert(Money::ZERO) -= settlement.amount;
    }

    balances
        .iter()
        .map(|balance| Balance {
            participant_id: balance.participant_id.clone(),
            value: balance.value
                + adjustments
                    .get(&balance.participant_id)
                    .copied()
                    .unwrap_or(Money::ZERO),
        })
        .collect()
}
