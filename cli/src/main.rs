use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use ledger::accounts::AccountId;
use ledger::clock::{SystemClock, last_month};
use ledger::ingest::{IngestError, IngestFileUseCase, IngestOptions, IngestReport};
use ledger::month::YearMonth;
use ledger::repository::{
    AccountingRepository, InMemoryAccountingRepository, LedgerError, Totals, Transaction, TransactionKind, summarize,
};
use ledger::statements::StatementKind;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "pf", about = "Personal finance statement ingestion")]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ingest a bank statement CSV and print its transactions.
    Ingest(IngestArgs),
    /// Print the chart of accounts.
    Accounts,
}

#[derive(Args, Debug)]
struct IngestArgs {
    /// Statement CSV file.
    filepath: PathBuf,

    /// Only ingest rows from this month (yyyy-mm).
    #[arg(short, long, env = "PF_MONTH")]
    month: Option<YearMonth>,

    #[arg(long, value_enum, env = "PF_BANK", default_value_t = Bank::Auto)]
    bank: Bank,

    /// Print JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Bank {
    /// Detect from the header row.
    Auto,
    /// DBS credit card statement.
    Dbs,
    /// OCBC account statement.
    Ocbc,
}

impl Bank {
    fn kind(self) -> Option<StatementKind> {
        match self {
            Self::Auto => None,
            Self::Dbs => Some(StatementKind::DbsCreditCard),
            Self::Ocbc => Some(StatementKind::OcbcAccount),
        }
    }
}

fn main() -> ExitCode {
    let cli = parse_cli();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "pf failed");
            ExitCode::FAILURE
        }
    }
}

/// Parse arguments; the `--month` help shows last month as an example.
fn parse_cli() -> Cli {
    let example = last_month(&SystemClock);
    let command = Cli::command().mut_subcommand("ingest", |sc| {
        sc.mut_arg("month", |arg| arg.help(format!("Only ingest rows from this month (yyyy-mm, e.g. {example})")))
    });
    let matches = command.get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Ingest(args) => run_ingest(args),
        Command::Accounts => {
            print!("{}", render_accounts());
            Ok(())
        }
    }
}

fn run_ingest(args: IngestArgs) -> Result<(), CliError> {
    let mut repo = InMemoryAccountingRepository::new();
    let options = IngestOptions { month: args.month, kind: args.bank.kind() };
    let report = IngestFileUseCase::new().execute(&args.filepath, options, &mut repo)?;

    let transactions = repo.list_transactions()?;
    let totals = summarize(&transactions)?;

    let rendered = if args.json {
        render_json(&report, &transactions, &totals)?
    } else {
        render_table(&report, &transactions, &totals)
    };
    println!("{rendered}");
    Ok(())
}

// =============================================================================
// RENDERING
// =============================================================================

fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Expense => "expense",
        TransactionKind::Income => "income",
    }
}

fn render_table(report: &IngestReport, transactions: &[Transaction], totals: &Totals) -> String {
    let mut out = String::new();
    let month = report.month.map_or_else(|| "all".to_owned(), |m| m.to_string());
    let _ = writeln!(
        out,
        "{} statement, month {month}: {} recorded, {} skipped",
        report.kind, report.recorded, report.rows_skipped
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<10}  {:<7}  {:>14}  {:>14}  NAME", "DATE", "KIND", "DEBIT", "CREDIT");
    for tx in transactions {
        let _ = writeln!(
            out,
            "{:<10}  {:<7}  {:>14}  {:>14}  {}",
            tx.transacted_on.to_string(),
            kind_label(tx.kind),
            tx.debit.to_string(),
            tx.credit.to_string(),
            tx.name
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<19}  {:>14}  {:>14}", "TOTAL", totals.debit.to_string(), totals.credit.to_string());
    let _ = write!(out, "{:<19}  {:>14}", "NET", totals.net.to_string());
    out
}

fn render_json(report: &IngestReport, transactions: &[Transaction], totals: &Totals) -> Result<String, CliError> {
    let value = json!({
        "report": report,
        "transactions": transactions,
        "totals": totals,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

fn render_accounts() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<4}  {:<28}  {:<9}  DESCRIPTION", "CODE", "NAME", "KIND");
    for account in AccountId::ALL {
        let kind = format!("{:?}", account.kind());
        let _ = writeln!(
            out,
            "{:<4}  {:<28}  {kind:<9}  {}",
            account.code(),
            account.name(),
            account.description()
        );
    }
    out
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
