use crate::{format_member_label, format_money};
use splitease_application::MemberDirectory;
use splitease_domain::Expense;
use splitease_i18n as i18n;
use std::fmt::Write as _;

pub struct HistoryPresenter;

impl HistoryPresenter {
    /// One block per expense, in the order given (the ledger keeps newest first).
    pub fn render(expenses: &[Expense], member_directory: &dyn MemberDirectory) -> String {
        if expenses.is_empty() {
            return format!("{}\n", i18n::NO_EXPENSES);
        }

        let mut reply = String::with_capacity(expenses.len() * 128);
        for (idx, expense) in expenses.iter().enumerate() {
            if idx > 0 {
                reply.push('\n');
            }
            let _ = writeln!(
                &mut reply,
                "#{} {} {} [{}] {}",
                expense.id,
                expense.date.format("%Y-%m-%d"),
                expense.description,
                expense.category,
                format_money(expense.amount)
            );
            let _ = writeln!(
                &mut reply,
                "  {}: {}",
                i18n::PAID_BY,
                format_member_label(&expense.paid_by, member_directory)
            );
            for (participant_id, share) in &expense.splits {
                let _ = writeln!(
                    &mut reply,
                    "  - {}: {}",
                    format_member_label(participant_id, member_directory),
                    format_money(*share)
                );
            }
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use splitease_domain::{Category, ExpenseId, Money, Participant, ParticipantId, Splits};

    fn members() -> Vec<Participant> {
        vec![Participant::new("A", "Alice"), Participant::new("B", "Bob")]
    }

    fn taxi() -> Expense {
        let mut splits = Splits::default();
        splits.insert(ParticipantId::new("A"), Money::new(625, 2));
        splits.insert(ParticipantId::new("B"), Money::new(625, 2));
        Expense {
            id: ExpenseId(2),
            description: "Taxi".into(),
            amount: Money::new(1250, 2),
            paid_by: ParticipantId::new("A"),
            splits,
            category: Category::Transportation,
            date: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_time(NaiveTime::MIN)
                .and_utc(),
        }
    }

    #[test]
    fn empty_history() {
        assert_eq!(
            HistoryPresenter::render(&[], &members()).trim_end(),
            i18n::NO_EXPENSES
        );
    }

    #[test]
    fn expense_block_lists_payer_and_shares() {
        let reply = HistoryPresenter::render(&[taxi()], &members());

        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(lines[0], "#2 2024-05-01 Taxi [transportation] $12.50");
        assert_eq!(lines[1], format!("  {}: Alice", i18n::PAID_BY));
        assert_eq!(lines[2], "  - Alice: $6.25");
        assert_eq!(lines[3], "  - Bob: $6.25");
    }

    #[test]
    fn blocks_are_separated_by_blank_line() {
        let reply = HistoryPresenter::render(&[taxi(), taxi()], &members());

        assert_eq!(reply.matches("\n\n").count(), 1);
    }
}
