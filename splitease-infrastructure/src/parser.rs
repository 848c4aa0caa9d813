use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use splitease_application::{
    Command, ExpenseDraft, Script, ScriptParseError, ScriptParser, ScriptStatement,
    ScriptStatementWithLine, SplitMethod,
};
use splitease_domain::{Category, ExpenseId, Money, Participant, ParticipantId};
use splitease_parser::{
    Command as ParserCommand, ExpenseEntry, MemberDecl, ParseError, SplitSpec,
    Statement as ParserStatement, parse_program,
};

#[derive(Default)]
pub struct SplitEaseScriptParser;

impl ScriptParser for SplitEaseScriptParser {
    fn parse(&self, content: &str) -> Result<Script, ScriptParseError> {
        let program = parse_program(content).map_err(|err| match err {
            ParseError::MissingMembersDeclaration => ScriptParseError::MissingMembersDeclaration,
            ParseError::SyntaxError { line, detail } => {
                ScriptParseError::SyntaxError { line, detail }
            }
        })?;

        let members_line = program.members_line;
        let members = program.members.into_iter().map(to_participant).collect();
        let statements = program
            .statements
            .into_iter()
            .map(|stmt| -> Result<ScriptStatementWithLine, ScriptParseError> {
                let line = stmt.line;
                let statement = match stmt.statement {
                    ParserStatement::Join(member) => ScriptStatement::Join(to_participant(member)),
                    ParserStatement::Leave(id) => ScriptStatement::Leave(ParticipantId::new(id)),
                    ParserStatement::Expense(entry) => {
                        ScriptStatement::Expense(to_expense_draft(line, entry)?)
                    }
                    ParserStatement::Command(ParserCommand::Delete(id)) => {
                        ScriptStatement::Delete(ExpenseId(id))
                    }
                    ParserStatement::Command(ParserCommand::Balances) => {
                        ScriptStatement::Command(Command::Balances)
                    }
                    ParserStatement::Command(ParserCommand::Settle) => {
                        ScriptStatement::Command(Command::Settle)
                    }
                    ParserStatement::Command(ParserCommand::History) => {
                        ScriptStatement::Command(Command::History)
                    }
                };
                Ok(ScriptStatementWithLine { line, statement })
            })
            .collect::<Result<Vec<_>, ScriptParseError>>()?;

        tracing::debug!(statement_count = statements.len(), "Parsed ledger script");

        Ok(Script::new(members, statements).with_members_line(members_line))
    }
}

fn to_participant(member: MemberDecl<'_>) -> Participant {
    let participant = Participant::new(member.id, member.name.unwrap_or(member.id));
    match member.email {
        Some(email) => participant.with_email(email),
        None => participant,
    }
}

fn to_money(line: usize, literal: &str) -> Result<Money, ScriptParseError> {
    literal
        .parse::<Money>()
        .map_err(|_| ScriptParseError::InvalidAmount {
            line,
            literal: literal.to_owned(),
        })
}

// Dates are taken as midnight UTC.
fn to_date(line: usize, literal: &str) -> Result<DateTime<Utc>, ScriptParseError> {
    NaiveDate::parse_from_str(literal, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| ScriptParseError::InvalidDate {
            line,
            literal: literal.to_owned(),
        })
}

fn to_expense_draft(
    line: usize,
    entry: ExpenseEntry<'_>,
) -> Result<ExpenseDraft, ScriptParseError> {
    let split = match entry.split {
        SplitSpec::Everyone => SplitMethod::EqualAll,
        SplitSpec::Among(ids) => {
            SplitMethod::EqualAmong(ids.into_iter().map(ParticipantId::new).collect())
        }
        SplitSpec::Shares(shares) => SplitMethod::Custom(
            shares
                .into_iter()
                .map(|(id, share)| {
                    to_money(line, share).map(|share| (ParticipantId::new(id), share))
                })
                .collect::<Result<_, ScriptParseError>>()?,
        ),
    };

    Ok(ExpenseDraft {
        description: entry.description.into(),
        amount: to_money(line, entry.amount)?,
        paid_by: ParticipantId::new(entry.payer),
        category: entry.category.map(Category::from_name).unwrap_or_default(),
        date: entry.date.map(|date| to_date(line, date)).transpose()?,
        split,
    })
}
