use splitease_domain::{ExpenseId, Money, ParticipantId, SplitError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Participant name must not be empty")]
    EmptyName,
    #[error("Participant '{0}' already exists")]
    DuplicateParticipant(ParticipantId),
    #[error("A participant with e-mail '{0}' already exists")]
    DuplicateEmail(String),
    #[error("The ledger owner '{0}' cannot be removed")]
    CannotRemoveOwner(ParticipantId),
    #[error("Unknown participant '{0}'")]
    UnknownParticipant(ParticipantId),
    #[error("Expense description must not be empty")]
    EmptyDescription,
    #[error("Expense amount must be positive (found {0})")]
    NonPositiveAmount(Money),
    #[error("Expense amount {0} exceeds the limit of {limit}", limit = Money::MAX_EXPENSE)]
    AmountTooLarge(Money),
    #[error("Payer '{0}' is not in the roster")]
    UnknownPayer(ParticipantId),
    #[error("Unknown expense #{0}")]
    UnknownExpense(ExpenseId),
    #[error(transparent)]
    Split(#[from] SplitError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptParseError {
    #[error("Script is missing the `MEMBERS := ...` declaration on its first line")]
    MissingMembersDeclaration,
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
    #[error("Invalid amount '{literal}' at line {line}")]
    InvalidAmount { line: usize, literal: String },
    #[error("Invalid date '{literal}' at line {line} (expected YYYY-MM-DD)")]
    InvalidDate { line: usize, literal: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {source}")]
pub struct ScriptRunError {
    pub line: usize,
    pub source: LedgerError,
}
