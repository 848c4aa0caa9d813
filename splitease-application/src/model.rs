use crate::ledger::ExpenseDraft;
use splitease_domain::{
    Balance, Expense, ExpenseId, ExpenseIssue, Participant, ParticipantId, Settlement,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the balance table.
    Balances,
    /// Print balances followed by suggested settlements.
    Settle,
    /// Print the expense history, newest first.
    History,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStatement {
    Join(Participant),
    Leave(ParticipantId),
    Expense(ExpenseDraft),
    Delete(ExpenseId),
    Command(Command),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStatementWithLine {
    pub line: usize,
    pub statement: ScriptStatement,
}

/// A parsed ledger script: the initial roster (owner first) and the
/// statements that follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    members: Vec<Participant>,
    members_line: usize,
    statements: Vec<ScriptStatementWithLine>,
}

impl Script {
    /// The member declaration is assumed to sit on line 1; see
    /// [`Script::with_members_line`].
    pub fn new(members: Vec<Participant>, statements: Vec<ScriptStatementWithLine>) -> Self {
        Self {
            members,
            members_line: 1,
            statements,
        }
    }

    pub fn with_members_line(mut self, line: usize) -> Self {
        self.members_line = line;
        self
    }

    pub fn members(&self) -> &[Participant] {
        &self.members
    }

    /// Line reported for errors raised while seeding the roster.
    pub fn members_line(&self) -> usize {
        self.members_line
    }

    pub fn statements(&self) -> &[ScriptStatementWithLine] {
        &self.statements
    }

    pub fn has_commands(&self) -> bool {
        self.statements
            .iter()
            .any(|stmt| matches!(stmt.statement, ScriptStatement::Command(_)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSummary {
    pub balances: Vec<Balance>,
    pub settlements: Vec<Settlement>,
    /// Integrity findings; these never block the computation.
    pub issues: Vec<ExpenseIssue>,
}

/// Ledger state captured when a command runs.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSnapshot {
    pub participants: Vec<Participant>,
    pub expenses: Vec<Expense>,
    pub summary: LedgerSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptOutput {
    /// `None` for the implicit summary of a script without commands.
    pub line: Option<usize>,
    pub command: Command,
    pub snapshot: LedgerSnapshot,
}
