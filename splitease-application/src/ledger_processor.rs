use crate::{
    error::{LedgerError, ScriptParseError, ScriptRunError},
    ledger::Ledger,
    model::{
        Command, LedgerSnapshot, LedgerSummary, Script, ScriptOutput, ScriptStatement,
        ScriptStatementWithLine,
    },
    ports::ScriptParser,
};
use splitease_domain::{audit_expenses, compute_balances, compute_settlements};

/// Result of running a whole script against a fresh ledger.
#[derive(Debug)]
pub struct ScriptRun {
    pub ledger: Ledger,
    pub outputs: Vec<ScriptOutput>,
}

#[derive(Clone, Copy)]
pub struct LedgerProcessor<'a> {
    parser: &'a dyn ScriptParser,
}

impl<'a> LedgerProcessor<'a> {
    pub fn new(parser: &'a dyn ScriptParser) -> Self {
        Self { parser }
    }

    pub fn parse_script(&self, content: &str) -> Result<Script, ScriptParseError> {
        self.parser.parse(content)
    }

    /// Recomputes balances and settlements from the ledger's current state.
    pub fn summarize(&self, ledger: &Ledger) -> LedgerSummary {
        let balances = compute_balances(ledger.participants(), ledger.expenses());
        let settlements = compute_settlements(&balances);
        let issues = audit_expenses(ledger.participants(), ledger.expenses());

        for issue in &issues {
            tracing::warn!(?issue, "Ledger expense failed audit");
        }
        tracing::debug!(
            participant_count = ledger.participants().len(),
            expense_count = ledger.expenses().len(),
            settlement_count = settlements.len(),
            issue_count = issues.len(),
            "Summarized ledger"
        );

        LedgerSummary {
            balances,
            settlements,
            issues,
        }
    }

    /// Seeds a ledger from the script's member declaration and runs every
    /// statement against it.
    pub fn run_script(&self, script: &Script) -> Result<ScriptRun, ScriptRunError> {
        let mut ledger = Ledger::from_members(script.members().iter().cloned())
            .map_err(|source| ScriptRunError {
                line: script.members_line(),
                source,
            })?;
        let outputs = self.run_script_on(&mut ledger, script)?;
        Ok(ScriptRun { ledger, outputs })
    }

    /// Applies the script's statements to `ledger` in order. A script with no
    /// commands produces a single trailing [`Command::Settle`] output.
    pub fn run_script_on(
        &self,
        ledger: &mut Ledger,
        script: &Script,
    ) -> Result<Vec<ScriptOutput>, ScriptRunError> {
        let mut outputs = Vec::new();

        for ScriptStatementWithLine { line, statement } in script.statements() {
            let line = *line;
            if let ScriptStatement::Command(command) = statement {
                outputs.push(self.capture(ledger, Some(line), *command));
                continue;
            }

            self.apply(ledger, statement)
                .map_err(|source| ScriptRunError { line, source })?;
        }

        if !script.has_commands() {
            outputs.push(self.capture(ledger, None, Command::Settle));
        }

        Ok(outputs)
    }

    fn apply(&self, ledger: &mut Ledger, statement: &ScriptStatement) -> Result<(), LedgerError> {
        match statement {
            ScriptStatement::Join(participant) => ledger.add_participant(participant.clone()),
            ScriptStatement::Leave(participant_id) => {
                ledger.remove_participant(participant_id).map(|_| ())
            }
            ScriptStatement::Expense(draft) => ledger.add_expense(draft.clone()).map(|_| ()),
            ScriptStatement::Delete(expense_id) => ledger.delete_expense(*expense_id).map(|_| ()),
            ScriptStatement::Command(_) => Ok(()),
        }
    }

    fn capture(&self, ledger: &Ledger, line: Option<usize>, command: Command) -> ScriptOutput {
        ScriptOutput {
            line,
            command,
            snapshot: LedgerSnapshot {
                participants: ledger.participants().to_vec(),
                expenses: ledger.expenses().to_vec(),
                summary: self.summarize(ledger),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{ExpenseDraft, SplitMethod};
    use chrono::{DateTime, Utc};
    use rstest::{fixture, rstest};
    use splitease_domain::{Category, ExpenseId, ExpenseIssue, Money, Participant, ParticipantId};

    struct StubParser;

    impl ScriptParser for StubParser {
        fn parse(&self, _content: &str) -> Result<Script, ScriptParseError> {
            Err(ScriptParseError::MissingMembersDeclaration)
        }
    }

    static STUB_PARSER: StubParser = StubParser;

    #[fixture]
    fn processor() -> LedgerProcessor<'static> {
        LedgerProcessor::new(&STUB_PARSER)
    }

    fn members() -> Vec<Participant> {
        vec![
            Participant::new("A", "Alice"),
            Participant::new("B", "Bob"),
            Participant::new("C", "Carol"),
        ]
    }

    fn expense(line: usize, paid_by: &str, amount: i64) -> ScriptStatementWithLine {
        ScriptStatementWithLine {
            line,
            statement: ScriptStatement::Expense(ExpenseDraft {
                description: "Dinner".into(),
                amount: Money::from_i64(amount),
                paid_by: ParticipantId::new(paid_by),
                category: Category::Food,
                date: Some(DateTime::<Utc>::UNIX_EPOCH),
                split: SplitMethod::EqualAll,
            }),
        }
    }

    fn command(line: usize, command: Command) -> ScriptStatementWithLine {
        ScriptStatementWithLine {
            line,
            statement: ScriptStatement::Command(command),
        }
    }

    #[rstest]
    fn parse_delegates_to_port(processor: LedgerProcessor<'static>) {
        assert_eq!(
            processor.parse_script("anything"),
            Err(ScriptParseError::MissingMembersDeclaration)
        );
    }

    #[rstest]
    fn script_without_commands_yields_final_summary(processor: LedgerProcessor<'static>) {
        let script = Script::new(members(), vec![expense(2, "A", 90)]);

        let run = processor.run_script(&script).unwrap();

        assert_eq!(run.outputs.len(), 1);
        let output = &run.outputs[0];
        assert_eq!(output.line, None);
        assert_eq!(output.command, Command::Settle);
        let settlements: Vec<(&str, &str, Money)> = output
            .snapshot
            .summary
            .settlements
            .iter()
            .map(|s| (s.from.as_str(), s.to.as_str(), s.amount))
            .collect();
        assert_eq!(
            settlements,
            vec![
                ("B", "A", Money::from_i64(30)),
                ("C", "A", Money::from_i64(30)),
            ]
        );
    }

    #[rstest]
    fn commands_capture_state_at_their_line(processor: LedgerProcessor<'static>) {
        let script = Script::new(
            members(),
            vec![
                expense(2, "A", 90),
                command(3, Command::Balances),
                ScriptStatementWithLine {
                    line: 4,
                    statement: ScriptStatement::Delete(ExpenseId(1)),
                },
                command(5, Command::Settle),
            ],
        );

        let run = processor.run_script(&script).unwrap();

        assert_eq!(run.outputs.len(), 2);
        assert_eq!(run.outputs[0].line, Some(3));
        assert_eq!(run.outputs[0].snapshot.expenses.len(), 1);
        assert_eq!(run.outputs[1].line, Some(5));
        assert!(run.outputs[1].snapshot.expenses.is_empty());
        assert!(run.outputs[1].snapshot.summary.settlements.is_empty());
        assert!(run.ledger.expenses().is_empty());
    }

    #[rstest]
    fn leaving_member_drops_their_balance(processor: LedgerProcessor<'static>) {
        let script = Script::new(
            members(),
            vec![
                expense(2, "A", 90),
                ScriptStatementWithLine {
                    line: 3,
                    statement: ScriptStatement::Leave(ParticipantId::new("C")),
                },
            ],
        );

        let run = processor.run_script(&script).unwrap();
        let summary = &run.outputs[0].snapshot.summary;

        let balances: Vec<(&str, Money)> = summary
            .balances
            .iter()
            .map(|b| (b.participant_id.as_str(), b.value))
            .collect();
        assert_eq!(
            balances,
            vec![("A", Money::from_i64(60)), ("B", Money::from_i64(-30))]
        );
        assert_eq!(
            summary.issues,
            vec![ExpenseIssue::SplitSumMismatch {
                expense_id: ExpenseId(1),
                split_total: Money::from_i64(60),
                amount: Money::from_i64(90),
            }]
        );
    }

    #[rstest]
    fn ledger_errors_carry_line(processor: LedgerProcessor<'static>) {
        let script = Script::new(members(), vec![expense(7, "ghost", 10)]);

        let err = processor.run_script(&script).unwrap_err();

        assert_eq!(
            err,
            ScriptRunError {
                line: 7,
                source: LedgerError::UnknownPayer(ParticipantId::new("ghost")),
            }
        );
    }

    #[rstest]
    fn summarize_is_idempotent(processor: LedgerProcessor<'static>) {
        let script = Script::new(members(), vec![expense(2, "B", 45)]);
        let run = processor.run_script(&script).unwrap();

        assert_eq!(processor.summarize(&run.ledger), processor.summarize(&run.ledger));
    }
}
