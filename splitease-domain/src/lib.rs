#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::SplitError;
pub use model::{
    Balance, Category, Expense, ExpenseId, Money, Participant, ParticipantId, Settlement, Splits,
};
pub use services::{
    BalanceAggregator, ExpenseIssue, SETTLEMENT_TOLERANCE, SettlementPlanner, SplitPolicy,
    apply_settlements, audit_expenses, compute_balances, compute_settlements,
};
