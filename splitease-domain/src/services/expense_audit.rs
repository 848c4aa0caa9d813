use crate::{
    model::{Expense, ExpenseId, Money, Participant, ParticipantId},
    services::SETTLEMENT_TOLERANCE,
};
use fxhash::FxHashSet;

/// Data-integrity findings for an expense list.
///
/// Balance computation never rejects these; callers that want strict input
/// run [`audit_expenses`] first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpenseIssue {
    NonPositiveAmount {
        expense_id: ExpenseId,
        amount: Money,
    },
    UnknownPayer {
        expense_id: ExpenseId,
        participant_id: ParticipantId,
    },
    UnknownSplitParticipant {
        expense_id: ExpenseId,
        participant_id: ParticipantId,
    },
    NegativeShare {
        expense_id: ExpenseId,
        participant_id: ParticipantId,
        share: Money,
    },
    SplitSumMismatch {
        expense_id: ExpenseId,
        split_total: Money,
        amount: Money,
    },
}

pub fn audit_expenses(participants: &[Participant], expenses: &[Expense]) -> Vec<ExpenseIssue> {
    let roster: FxHashSet<&ParticipantId> =
        participants.iter().map(|participant| &participant.id).collect();
    let mut issues = Vec::new();

    for expense in expenses {
        if !expense.amount.is_positive() {
            issues.push(ExpenseIssue::NonPositiveAmount {
                expense_id: expense.id,
                amount: expense.amount,
            });
        }
        if !roster.contains(&expense.paid_by) {
            issues.push(ExpenseIssue::UnknownPayer {
                expense_id: expense.id,
                participant_id: expense.paid_by.clone(),
            });
        }
        for (participant_id, share) in &expense.splits {
            if !roster.contains(participant_id) {
                issues.push(ExpenseIssue::UnknownSplitParticipant {
                    expense_id: expense.id,
                    participant_id: participant_id.clone(),
                });
            }
            if share.is_negative() {
                issues.push(ExpenseIssue::NegativeShare {
                    expense_id: expense.id,
                    participant_id: participant_id.clone(),
                    share: *share,
                });
            }
        }

        let split_total = expense.split_total();
        if !split_total.approx_eq(expense.amount, SETTLEMENT_TOLERANCE) {
            issues.push(ExpenseIssue::SplitSumMismatch {
                expense_id: expense.id,
                split_total,
                amount: expense.amount,
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Splits};
    use chrono::{DateTime, Utc};

    fn expense(paid_by: &str, amount: i64, splits: &[(&str, i64)]) -> Expense {
        Expense {
            id: ExpenseId(7),
            description: "audit".into(),
            amount: Money::from_i64(amount),
            paid_by: ParticipantId::new(paid_by),
            splits: splits
                .iter()
                .map(|(id, share)| (ParticipantId::new(*id), Money::from_i64(*share)))
                .collect::<Splits>(),
            category: Category::Utilities,
            date: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    fn roster() -> Vec<Participant> {
        vec![Participant::new("a", "A"), Participant::new("b", "B")]
    }

    #[test]
    fn well_formed_expense_has_no_issues() {
        let issues = audit_expenses(&roster(), &[expense("a", 40, &[("a", 20), ("b", 20)])]);
        assert!(issues.is_empty());
    }

    #[test]
    fn removed_participant_is_reported() {
        let issues = audit_expenses(&roster(), &[expense("gone", 40, &[("a", 20), ("gone", 20)])]);
        assert_eq!(
            issues,
            vec![
                ExpenseIssue::UnknownPayer {
                    expense_id: ExpenseId(7),
                    participant_id: ParticipantId::new("gone"),
                },
                ExpenseIssue::UnknownSplitParticipant {
                    expense_id: ExpenseId(7),
                    participant_id: ParticipantId::new("gone"),
                },
            ]
        );
    }

    #[test]
    fn mismatched_and_negative_values_are_reported() {
        let issues = audit_expenses(&roster(), &[expense("a", 0, &[("a", 5), ("b", -1)])]);
        assert_eq!(
            issues,
            vec![
                ExpenseIssue::NonPositiveAmount {
                    expense_id: ExpenseId(7),
                    amount: Money::ZERO,
                },
                ExpenseIssue::NegativeShare {
                    expense_id: ExpenseId(7),
                    participant_id: ParticipantId::new("b"),
                    share: Money::from_i64(-1),
                },
                ExpenseIssue::SplitSumMismatch {
                    expense_id: ExpenseId(7),
                    split_total: Money::from_i64(4),
                    amount: Money::ZERO,
                },
            ]
        );
    }
}
