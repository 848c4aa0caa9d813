#![warn(clippy::uninlined_format_args)]

pub mod balance_presenter;
pub mod error_presenter;
pub mod history_presenter;
pub mod settlement_presenter;
pub mod text_table;

pub use balance_presenter::BalancePresenter;
pub use error_presenter::{
    format_ledger_error, format_script_parse_error, format_script_run_error, format_split_error,
};
pub use history_presenter::HistoryPresenter;
pub use settlement_presenter::SettlementPresenter;

use splitease_application::MemberDirectory;
use splitease_domain::{Money, ParticipantId};
use splitease_i18n as i18n;

fn format_member_label<'a>(
    participant_id: &ParticipantId,
    member_directory: &'a dyn MemberDirectory,
) -> &'a str {
    member_directory
        .display_name(participant_id)
        .unwrap_or(i18n::UNKNOWN)
}

fn format_money(amount: Money) -> String {
    format!("${}", amount.abs())
}
