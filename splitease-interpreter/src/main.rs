#![warn(clippy::uninlined_format_args)]

use std::{borrow::Cow, env, fs, process};

use splitease_application::{Command, LedgerProcessor, ScriptOutput};
use splitease_infrastructure::SplitEaseScriptParser;
use splitease_presentation::{
    BalancePresenter, HistoryPresenter, SettlementPresenter, format_script_parse_error,
    format_script_run_error,
};
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let Some(path) = env::args().nth(1) else {
        return Err("Usage: splitease-interpreter <file.ledger>".into());
    };

    let source =
        fs::read_to_string(&path).map_err(|err| format!("Failed to read '{path}': {err}"))?;
    tracing::debug!(path = %path, bytes = source.len(), "Loaded ledger script");

    let processor = LedgerProcessor::new(&SplitEaseScriptParser);

    let script = processor
        .parse_script(&source)
        .map_err(|err| format_script_parse_error(&err))?;
    let run = processor
        .run_script(&script)
        .map_err(|err| format_script_run_error(&err))?;

    for (index, output) in run.outputs.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print!("{}", render_output(output));
    }

    Ok(())
}

fn render_output(output: &ScriptOutput) -> String {
    let snapshot = &output.snapshot;
    let directory = &snapshot.participants;

    match output.command {
        Command::Balances => BalancePresenter::render(&snapshot.summary.balances, directory),
        Command::Settle => format!(
            "{}\n{}",
            BalancePresenter::render(&snapshot.summary.balances, directory),
            SettlementPresenter::render(&snapshot.summary.settlements, directory)
        ),
        Command::History => HistoryPresenter::render(&snapshot.expenses, directory),
    }
}
