use splitease_application::{LedgerError, ScriptParseError, ScriptRunError};
use splitease_domain::{Money, SplitError};
use splitease_i18n as i18n;

pub fn format_split_error(error: &SplitError) -> String {
    match error {
        SplitError::NoParticipants => i18n::NO_PARTICIPANTS.to_owned(),
        SplitError::NegativeShare {
            participant_id,
            share,
        } => i18n::negative_share(participant_id, share),
        SplitError::Mismatch { total, amount } => i18n::split_mismatch(total, amount),
    }
}

pub fn format_ledger_error(error: &LedgerError) -> String {
    match error {
        LedgerError::EmptyName => i18n::EMPTY_NAME.to_owned(),
        LedgerError::DuplicateParticipant(id) => i18n::duplicate_participant(id),
        LedgerError::DuplicateEmail(email) => i18n::duplicate_email(email),
        LedgerError::CannotRemoveOwner(id) => i18n::cannot_remove_owner(id),
        LedgerError::UnknownParticipant(id) => i18n::unknown_participant(id),
        LedgerError::EmptyDescription => i18n::EMPTY_DESCRIPTION.to_owned(),
        LedgerError::NonPositiveAmount(amount) => i18n::non_positive_amount(amount),
        LedgerError::AmountTooLarge(amount) => {
            i18n::amount_too_large(amount, Money::MAX_EXPENSE)
        }
        LedgerError::UnknownPayer(id) => i18n::unknown_payer(id),
        LedgerError::UnknownExpense(id) => i18n::unknown_expense(id),
        LedgerError::Split(err) => format_split_error(err),
    }
}

pub fn format_script_run_error(error: &ScriptRunError) -> String {
    i18n::at_line(error.line, format_ledger_error(&error.source))
}

pub fn format_script_parse_error(error: &ScriptParseError) -> String {
    match error {
        ScriptParseError::MissingMembersDeclaration => {
            i18n::MISSING_MEMBERS_DECLARATION.to_owned()
        }
        ScriptParseError::SyntaxError { line, detail } => i18n::syntax_error(*line, detail),
        ScriptParseError::InvalidAmount { line, literal } => {
            i18n::at_line(*line, i18n::invalid_amount(literal))
        }
        ScriptParseError::InvalidDate { line, literal } => {
            i18n::at_line(*line, i18n::invalid_date(literal))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use splitease_domain::{ExpenseId, ParticipantId};

    #[rstest]
    #[case::syntax(
        ScriptParseError::SyntaxError { line: 3, detail: "unexpected token".to_string() },
        Some(3)
    )]
    #[case::amount(
        ScriptParseError::InvalidAmount { line: 5, literal: "1.2.3".to_string() },
        Some(5)
    )]
    #[case::date(
        ScriptParseError::InvalidDate { line: 6, literal: "2024-13-01".to_string() },
        Some(6)
    )]
    #[case::missing_members(ScriptParseError::MissingMembersDeclaration, None)]
    fn parse_errors_mention_line(#[case] error: ScriptParseError, #[case] line: Option<usize>) {
        let message = format_script_parse_error(&error);

        assert!(!message.is_empty());
        if let Some(line) = line {
            assert!(message.contains(&line.to_string()));
        }
    }

    #[rstest]
    #[case::unknown_expense(LedgerError::UnknownExpense(ExpenseId(9)), "9")]
    #[case::unknown_payer(LedgerError::UnknownPayer(ParticipantId::new("zed")), "zed")]
    #[case::owner(LedgerError::CannotRemoveOwner(ParticipantId::new("you")), "you")]
    #[case::amount(LedgerError::NonPositiveAmount(Money::ZERO), "0.00")]
    #[case::too_large(LedgerError::AmountTooLarge(Money::from_i64(2_000_000_000)), "2000000000")]
    #[case::mismatch(
        LedgerError::Split(SplitError::Mismatch {
            total: Money::from_i64(50),
            amount: Money::from_i64(60),
        }),
        "50.00"
    )]
    fn ledger_errors_include_subject(#[case] error: LedgerError, #[case] needle: &str) {
        assert!(format_ledger_error(&error).contains(needle));
    }

    #[test]
    fn run_error_carries_line() {
        let error = ScriptRunError {
            line: 12,
            source: LedgerError::EmptyDescription,
        };

        let message = format_script_run_error(&error);

        assert!(message.contains(i18n::EMPTY_DESCRIPTION));
        assert!(message.contains("12"));
    }
}
