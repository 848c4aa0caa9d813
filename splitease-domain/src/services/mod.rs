pub mod balance_aggregator;
pub mod expense_audit;
pub mod settlement_planner;
pub mod split_policy;

pub use balance_aggregator::{BalanceAggregator, compute_balances};
pub use expense_audit::{ExpenseIssue, audit_expenses};
pub use settlement_planner::{
    SETTLEMENT_TOLERANCE, SettlementPlanner, apply_settlements, compute_settlements,
};
pub use split_policy::SplitPolicy;
