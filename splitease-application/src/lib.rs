#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod ledger;
pub mod ledger_processor;
pub mod model;
pub mod ports;

pub use error::{LedgerError, ScriptParseError, ScriptRunError};
pub use ledger::{ExpenseDraft, Ledger, SplitMethod};
pub use ledger_processor::{LedgerProcessor, ScriptRun};
pub use model::{
    Command, LedgerSnapshot, LedgerSummary, Script, ScriptOutput, ScriptStatement,
    ScriptStatementWithLine,
};
pub use ports::{MemberDirectory, ScriptParser};
