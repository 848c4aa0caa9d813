#![warn(clippy::uninlined_format_args)]

mod i18n;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till, take_until, take_while1},
    character::complete::{char, digit1, multispace1, u64},
    combinator::{opt, recognize, verify},
    multi::{many0, separated_list1},
    sequence::delimited,
};

/// `id "Display Name" <email>`; name and e-mail are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDecl<'a> {
    pub id: &'a str,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitSpec<'a> {
    /// Equal shares across the whole roster (`to everyone`, or no `to`).
    Everyone,
    /// Equal shares across the listed ids.
    Among(Vec<&'a str>),
    /// `id=amount` pairs. Amounts are kept as literals.
    Shares(Vec<(&'a str, &'a str)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseEntry<'a> {
    pub payer: &'a str,
    pub amount: &'a str,
    pub description: &'a str,
    pub category: Option<&'a str>,
    pub date: Option<&'a str>,
    pub split: SplitSpec<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Balances,
    Settle,
    History,
    Delete(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    Join(MemberDecl<'a>),
    Leave(&'a str),
    Expense(ExpenseEntry<'a>),
    Command(Command),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementWithLine<'a> {
    pub line: usize,
    pub statement: Statement<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program<'a> {
    pub members: Vec<MemberDecl<'a>>,
    /// 1-based line of the `MEMBERS :=` declaration.
    pub members_line: usize,
    pub statements: Vec<StatementWithLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Missing `MEMBERS := ...` declaration.")]
    MissingMembersDeclaration,
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-').parse(input)
}

fn sp(input: &str) -> IResult<&str, &str> {
    fn fullwidth_space(input: &str) -> IResult<&str, &str> {
        take_while1(|c: char| c == '\u{3000}').parse(input)
    }

    fn comment(input: &str) -> IResult<&str, &str> {
        delimited(tag("/*"), take_until("*/"), tag("*/")).parse(input)
    }

    fn line_comment(input: &str) -> IResult<&str, &str> {
        recognize((tag("//"), take_till(|c| c == '\n'))).parse(input)
    }

    recognize(many0(alt((
        multispace1,
        fullwidth_space,
        comment,
        line_comment,
    ))))
    .parse(input)
}

fn comma(input: &str) -> IResult<&str, char> {
    (sp, alt((char(','), char('，'))), sp)
        .map(|(_, c, _)| c)
        .parse(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|c| c == '"'), char('"')).parse(input)
}

fn email(input: &str) -> IResult<&str, &str> {
    delimited(char('<'), take_till(|c| c == '>'), char('>')).parse(input)
}

// $12.50, 90, ¥1000
fn amount(input: &str) -> IResult<&str, &str> {
    (
        opt(alt((char('$'), char('¥')))),
        recognize((digit1, opt((char('.'), digit1)))),
    )
        .map(|(_, literal)| literal)
        .parse(input)
}

// 2024-05-01
fn date(input: &str) -> IResult<&str, &str> {
    recognize((digit1, char('-'), digit1, char('-'), digit1)).parse(input)
}

fn member_decl(input: &str) -> IResult<&str, MemberDecl<'_>> {
    (
        identifier,
        opt((sp, quoted).map(|(_, name)| name)),
        opt((sp, email).map(|(_, email)| email)),
    )
        .map(|(id, name, email)| MemberDecl { id, name, email })
        .parse(input)
}

// MEMBERS := you "You", alice "Alice" <alice@example.com>, bob
fn members_decl(input: &str) -> IResult<&str, Vec<MemberDecl<'_>>> {
    (
        tag("MEMBERS"),
        sp,
        tag(":="),
        sp,
        separated_list1(comma, member_decl),
    )
        .map(|(_, _, _, _, members)| members)
        .parse(input)
}

fn split_entry(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    (
        identifier,
        opt((sp, char('='), sp, amount).map(|(_, _, _, amount)| amount)),
    )
        .parse(input)
}

fn split_spec(input: &str) -> IResult<&str, SplitSpec<'_>> {
    alt((
        verify(identifier, |id: &str| {
            id.eq_ignore_ascii_case("everyone") || id == "全員"
        })
        .map(|_| SplitSpec::Everyone),
        separated_list1(comma, split_entry).map_res(|entries| {
            if entries.iter().all(|(_, share)| share.is_none()) {
                Ok(SplitSpec::Among(entries.into_iter().map(|(id, _)| id).collect()))
            } else if entries.iter().all(|(_, share)| share.is_some()) {
                Ok(SplitSpec::Shares(
                    entries
                        .into_iter()
                        .filter_map(|(id, share)| share.map(|share| (id, share)))
                        .collect(),
                ))
            } else {
                Err("cannot mix listed members with explicit shares")
            }
        }),
    ))
    .parse(input)
}

// {payer} paid {amount} for "{description}" [#category] [on YYYY-MM-DD] [to {split}]
fn expense(input: &str) -> IResult<&str, ExpenseEntry<'_>> {
    (
        identifier,
        sp,
        tag_no_case("paid"),
        sp,
        amount,
        sp,
        tag_no_case("for"),
        sp,
        quoted,
        opt((sp, char('#'), identifier).map(|(_, _, category)| category)),
        opt((sp, tag_no_case("on"), sp, date).map(|(_, _, _, date)| date)),
        opt((sp, tag_no_case("to"), sp, split_spec).map(|(_, _, _, split)| split)),
    )
        .map(
            |(payer, _, _, _, amount, _, _, _, description, category, date, split)| ExpenseEntry {
                payer,
                amount,
                description,
                category,
                date,
                split: split.unwrap_or(SplitSpec::Everyone),
            },
        )
        .parse(input)
}

fn join(input: &str) -> IResult<&str, MemberDecl<'_>> {
    (tag_no_case("join"), multispace1, sp, member_decl)
        .map(|(_, _, _, member)| member)
        .parse(input)
}

fn leave(input: &str) -> IResult<&str, &str> {
    (tag_no_case("leave"), multispace1, sp, identifier)
        .map(|(_, _, _, id)| id)
        .parse(input)
}

fn command(input: &str) -> IResult<&str, Command> {
    alt((
        alt((tag_no_case("!balances"), tag("!残高"))).map(|_| Command::Balances),
        alt((tag_no_case("!settle"), tag("!清算"))).map(|_| Command::Settle),
        alt((tag_no_case("!history"), tag("!履歴"))).map(|_| Command::History),
        (alt((tag_no_case("!delete"), tag("!削除"))), sp, opt(char('#')), u64)
            .map(|(_, _, _, id)| Command::Delete(id)),
    ))
    .parse(input)
}

// Expenses go before join/leave so a payer may be named `join` or `leave`.
fn statement(input: &str) -> IResult<&str, Statement<'_>> {
    alt((
        command.map(Statement::Command),
        expense.map(Statement::Expense),
        join.map(Statement::Join),
        leave.map(Statement::Leave),
    ))
    .parse(input)
}

fn statement_with_sp(input: &str) -> IResult<&str, Statement<'_>> {
    (sp, statement, sp).map(|(_, stmt, _)| stmt).parse(input)
}

fn members_with_sp(input: &str) -> IResult<&str, Vec<MemberDecl<'_>>> {
    (sp, members_decl, sp)
        .map(|(_, members, _)| members)
        .parse(input)
}

fn parse_line<'a, T>(
    line: &'a str,
    line_no: usize,
    parser: fn(&'a str) -> IResult<&'a str, T>,
) -> Result<T, ParseError> {
    match parser(line) {
        Ok((rest, value)) => {
            if rest.trim().is_empty() {
                Ok(value)
            } else {
                Err(ParseError::SyntaxError {
                    line: line_no,
                    detail: i18n::syntax_error_unparsed_detail(rest.trim()),
                })
            }
        }
        Err(e) => Err(ParseError::SyntaxError {
            line: line_no,
            detail: i18n::syntax_error_detail(e),
        }),
    }
}

/// Parses a ledger script. The first non-blank line must declare the initial
/// members; every following non-blank line is one statement.
pub fn parse_program(input: &str) -> Result<Program<'_>, ParseError> {
    let mut members: Option<(usize, Vec<MemberDecl<'_>>)> = None;
    let mut statements = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let (rest, _) = sp(line).map_err(|e| ParseError::SyntaxError {
            line: line_no,
            detail: i18n::syntax_error_detail(e),
        })?;
        if rest.trim().is_empty() {
            continue;
        }

        if members.is_none() {
            if !rest.starts_with("MEMBERS") {
                return Err(ParseError::MissingMembersDeclaration);
            }
            members = Some((line_no, parse_line(line, line_no, members_with_sp)?));
            continue;
        }

        let statement = parse_line(line, line_no, statement_with_sp)?;
        statements.push(StatementWithLine {
            line: line_no,
            statement,
        });
    }

    let Some((members_line, members)) = members else {
        return Err(ParseError::MissingMembersDeclaration);
    };

    Ok(Program {
        members,
        members_line,
        statements,
    })
}
