use crate::{
    format_member_label, format_money,
    text_table::{Alignment, TextTableBuilder},
};
use splitease_application::MemberDirectory;
use splitease_domain::Settlement;
use splitease_i18n as i18n;
use std::{borrow::Cow, fmt::Write as _};

pub struct SettlementPresenter;

impl SettlementPresenter {
    /// Table of suggested payments followed by one sentence per payment.
    pub fn render(settlements: &[Settlement], member_directory: &dyn MemberDirectory) -> String {
        if settlements.is_empty() {
            return format!("{}\n", i18n::EVERYONE_SETTLED);
        }

        let mut reply = Self::build_settlement_table(settlements, member_directory);
        reply.push('\n');
        for settlement in settlements {
            let _ = writeln!(
                &mut reply,
                "- {}: {}",
                i18n::should_pay(
                    format_member_label(&settlement.from, member_directory),
                    format_member_label(&settlement.to, member_directory),
                ),
                format_money(settlement.amount)
            );
        }
        reply
    }

    pub fn build_settlement_table(
        settlements: &[Settlement],
        member_directory: &dyn MemberDirectory,
    ) -> String {
        let headers = [
            Cow::Borrowed(i18n::FROM),
            Cow::Borrowed(i18n::TO),
            Cow::Borrowed(i18n::AMOUNT),
        ];
        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&headers)
            .rows(settlements.iter().map(|settlement| {
                [
                    Cow::Borrowed(format_member_label(&settlement.from, member_directory)),
                    Cow::Borrowed(format_member_label(&settlement.to, member_directory)),
                    Cow::Owned(format_money(settlement.amount)),
                ]
            }))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitease_domain::{Money, ParticipantId};
    use std::collections::HashMap;

    fn settlement(from: &str, to: &str, amount: i64) -> Settlement {
        Settlement {
            from: ParticipantId::new(from),
            to: ParticipantId::new(to),
            amount: Money::from_i64(amount),
        }
    }

    #[test]
    fn empty_plan_reports_everyone_settled() {
        let directory: HashMap<ParticipantId, String> = HashMap::new();

        let reply = SettlementPresenter::render(&[], &directory);

        assert_eq!(reply.trim_end(), i18n::EVERYONE_SETTLED);
    }

    #[test]
    fn render_uses_display_names() {
        let mut directory = HashMap::new();
        directory.insert(ParticipantId::new("A"), "Alice".to_string());
        directory.insert(ParticipantId::new("B"), "Bob".to_string());

        let reply = SettlementPresenter::render(&[settlement("B", "A", 30)], &directory);

        assert!(reply.starts_with(i18n::FROM));
        assert!(reply.contains(&format!(
            "- {}: $30.00",
            i18n::should_pay("Bob", "Alice")
        )));
    }

    #[test]
    fn table_has_one_row_per_settlement() {
        let directory: HashMap<ParticipantId, String> = HashMap::new();
        let settlements = [settlement("C", "A", 10), settlement("D", "B", 40)];

        let table = SettlementPresenter::build_settlement_table(&settlements, &directory);

        assert_eq!(table.lines().count(), 4);
        assert!(table.lines().skip(2).all(|line| line.contains(i18n::UNKNOWN)));
    }
}
