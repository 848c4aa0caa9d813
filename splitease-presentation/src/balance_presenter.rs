use crate::{
    format_member_label, format_money,
    text_table::{Alignment, TextTableBuilder},
};
use splitease_application::MemberDirectory;
use splitease_domain::{Balance, Money, SETTLEMENT_TOLERANCE};
use splitease_i18n as i18n;
use std::borrow::Cow;

pub struct BalancePresenter;

impl BalancePresenter {
    pub fn render(balances: &[Balance], member_directory: &dyn MemberDirectory) -> String {
        let headers = [
            Cow::Borrowed(i18n::MEMBER),
            Cow::Borrowed(i18n::STATUS),
            Cow::Borrowed(i18n::AMOUNT),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&headers);

        for balance in balances {
            builder = builder.row([
                Cow::Borrowed(format_member_label(
                    &balance.participant_id,
                    member_directory,
                )),
                Cow::Borrowed(status_label(balance.value)),
                Cow::Owned(format_money(balance.value)),
            ]);
        }

        builder.build()
    }
}

/// Label for a balance; anything within one cent of zero is settled.
pub fn status_label(value: Money) -> &'static str {
    if value > SETTLEMENT_TOLERANCE {
        i18n::IS_OWED
    } else if value < -SETTLEMENT_TOLERANCE {
        i18n::OWES
    } else {
        i18n::SETTLED_UP
    }
}
