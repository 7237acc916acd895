//! Bank statement CSV parsers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Banks export statements as CSV with a block of metadata rows (card and
//! account numbers) above the real header. Each parser knows how many rows
//! to skip, recognises its own header, and normalizes lines into
//! [`StatementRow`]s.
//!
//! The metadata block is sensitive: it is only compared against the expected
//! header and never deserialized or logged. The CSV reader drops fully empty
//! lines, so a metadata block with blank lines yields fewer records than
//! `skip_rows`; the header is the first of the leading `skip_rows + 1`
//! records that matches.

pub mod dbs;
pub mod ocbc;

use std::fmt;
use std::str::FromStr;

use csv::StringRecord;
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::debug;

use crate::accounts::AccountId;
use crate::money::{AmountError, MicroSgd};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StatementError {
    #[error("failed to read csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("expected more than {skip} rows in {kind} statement, found {found}")]
    TooFewRows { kind: StatementKind, skip: usize, found: usize },
    #[error("unrecognised header for {kind} statement")]
    UnexpectedHeader { kind: StatementKind },
    #[error("could not detect statement type")]
    UnknownFormat,
    #[error("line {line}: {source}")]
    Row { line: u64, source: csv::Error },
    #[error("line {line}: {source}")]
    Amount { line: u64, source: AmountError },
    #[error("invalid date '{0}'")]
    InvalidDate(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// DBS credit card transactions export.
    DbsCreditCard,
    /// OCBC bank account transactions export.
    OcbcAccount,
}

impl StatementKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DbsCreditCard => "dbs",
            Self::OcbcAccount => "ocbc",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatementKind {
    type Err = StatementError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dbs" => Ok(Self::DbsCreditCard),
            "ocbc" => Ok(Self::OcbcAccount),
            _ => Err(StatementError::UnknownFormat),
        }
    }
}

/// One normalized statement line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementRow {
    /// 1-based line in the source file.
    pub line: u64,
    pub transacted_on: Date,
    pub description: String,
    /// Money out (purchase, withdrawal).
    pub debit: MicroSgd,
    /// Money in (refund, deposit).
    pub credit: MicroSgd,
}

pub trait StatementParser {
    fn kind(&self) -> StatementKind;

    /// Ledger account the statement's money moves through.
    fn account(&self) -> AccountId;

    /// Number of metadata rows above the header.
    fn skip_rows(&self) -> usize;

    /// Whether `header` is this statement's column header.
    fn matches_header(&self, header: &StringRecord) -> bool;

    /// Deserialize one data record.
    ///
    /// # Errors
    ///
    /// Returns [`StatementError`] if the record is malformed.
    fn parse_record(&self, record: &StringRecord, header: &StringRecord) -> Result<StatementRow, StatementError>;
}

/// Parsers tried in order during detection.
#[must_use]
pub fn parsers() -> Vec<Box<dyn StatementParser>> {
    vec![Box::new(dbs::DbsCreditCardParser), Box::new(ocbc::OcbcAccountParser)]
}

#[must_use]
pub fn parser_for(kind: StatementKind) -> Box<dyn StatementParser> {
    match kind {
        StatementKind::DbsCreditCard => Box::new(dbs::DbsCreditCardParser),
        StatementKind::OcbcAccount => Box::new(ocbc::OcbcAccountParser),
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// A parsed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    pub account: AccountId,
    pub rows: Vec<StatementRow>,
}

/// Parse `raw` as `kind`, or detect the kind from the header when `None`.
///
/// # Errors
///
/// Returns [`StatementError`] when the CSV is unreadable, the format cannot
/// be detected, or any data row is malformed.
pub fn parse_statement(raw: &str, kind: Option<StatementKind>) -> Result<Statement, StatementError> {
    let table = read_table(raw)?;

    let parser = match kind {
        Some(kind) => parser_for(kind),
        None => detect(&table).ok_or(StatementError::UnknownFormat)?,
    };

    let skip = parser.skip_rows();
    let header_at = match header_position(&table, &*parser) {
        Some(idx) => idx,
        None if table.len() <= skip => {
            return Err(StatementError::TooFewRows { kind: parser.kind(), skip, found: table.len() });
        }
        None => return Err(StatementError::UnexpectedHeader { kind: parser.kind() }),
    };

    let header = &table[header_at];
    let rows = table[header_at + 1..]
        .iter()
        .filter(|record| !is_blank(record))
        .map(|record| parser.parse_record(record, header))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(kind = %parser.kind(), rows = rows.len(), "parsed statement");
    Ok(Statement { kind: parser.kind(), account: parser.account(), rows })
}

fn detect(table: &[StringRecord]) -> Option<Box<dyn StatementParser>> {
    parsers()
        .into_iter()
        .find(|parser| header_position(table, &**parser).is_some())
}

/// Index of the header row within the leading `skip_rows + 1` records.
fn header_position(table: &[StringRecord], parser: &dyn StatementParser) -> Option<usize> {
    table.iter().take(parser.skip_rows() + 1).position(|record| parser.matches_header(record))
}

fn read_table(raw: &str) -> Result<Vec<StringRecord>, StatementError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    Ok(reader.records().collect::<Result<Vec<_>, _>>()?)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

/// Compare a header row against expected column names, ignoring a UTF-8 BOM
/// and trailing empty columns.
fn header_is(header: &StringRecord, expected: &[&str]) -> bool {
    let mut columns: Vec<&str> = header.iter().map(|c| c.trim_start_matches('\u{feff}')).collect();
    while columns.last().is_some_and(|c| c.is_empty()) {
        columns.pop();
    }
    columns == expected
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

fn parse_amount(raw: &str, line: u64) -> Result<MicroSgd, StatementError> {
    MicroSgd::parse(raw).map_err(|source| StatementError::Amount { line, source })
}

/// Two-digit years are taken as 20xx.
fn expand_year(date: &str, separator: char) -> String {
    match date.rsplit_once(separator) {
        Some((head, year)) if year.len() == 2 => format!("{head}{separator}20{year}"),
        _ => date.to_owned(),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
