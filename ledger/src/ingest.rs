//! Ingest a bank statement file into a ledger.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry point for `pf ingest`. Reads the file, picks a parser (explicit or
//! detected from the header), applies the month filter, and records each
//! remaining row: debits become expenses, credits become incomes, both
//! posted against the statement's account.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::month::YearMonth;
use crate::repository::{AccountingRepository, LedgerError, NewTransaction};
use crate::statements::{self, StatementError, StatementKind};

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("error reading file at '{path}': {source}")]
    Read { path: String, source: std::io::Error },
    #[error(transparent)]
    Statement(#[from] StatementError),
    #[error("line {line}: {source}")]
    Ledger { line: u64, source: LedgerError },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Keep only rows transacted in this month.
    pub month: Option<YearMonth>,
    /// Skip detection and parse as this statement kind.
    pub kind: Option<StatementKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub kind: StatementKind,
    pub month: Option<YearMonth>,
    pub rows_read: usize,
    /// Rows dropped by the month filter.
    pub rows_skipped: usize,
    pub recorded: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IngestFileUseCase;

impl IngestFileUseCase {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Read `path` and record its rows into `repo`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError`] if the file cannot be read, the statement
    /// cannot be parsed, or a row is rejected by the ledger.
    pub fn execute(
        &self,
        path: &Path,
        options: IngestOptions,
        repo: &mut impl AccountingRepository,
    ) -> Result<IngestReport, IngestError> {
        info!(path = %path.display(), month = ?options.month.map(|m| m.to_string()), "ingesting file");

        let raw = std::fs::read_to_string(path)
            .map_err(|source| IngestError::Read { path: path.display().to_string(), source })?;

        self.execute_str(&raw, options, repo)
    }

    /// Record the rows of an in-memory statement into `repo`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError`] if the statement cannot be parsed or a row is
    /// rejected by the ledger.
    pub fn execute_str(
        &self,
        raw: &str,
        options: IngestOptions,
        repo: &mut impl AccountingRepository,
    ) -> Result<IngestReport, IngestError> {
        let statement = statements::parse_statement(raw, options.kind)?;
        let rows_read = statement.rows.len();

        let mut rows_skipped = 0;
        let mut recorded = 0;
        for row in statement.rows {
            if options.month.is_some_and(|month| !month.contains(row.transacted_on)) {
                rows_skipped += 1;
                continue;
            }

            debug!(line = row.line, description = %row.description, "processing row");
            let line = row.line;
            let params = NewTransaction {
                name: row.description,
                description: String::new(),
                transacted_on: row.transacted_on,
                debit: row.debit,
                credit: row.credit,
                account: statement.account,
            };

            let result = if params.debit.is_zero() {
                repo.create_income(params)
            } else {
                repo.create_expense(params)
            };
            result.map_err(|source| IngestError::Ledger { line, source })?;
            recorded += 1;
        }

        let report = IngestReport { kind: statement.kind, month: options.month, rows_read, rows_skipped, recorded };
        info!(kind = %report.kind, rows_read, rows_skipped, recorded, "ingest completed");
        Ok(report)
    }
}

#[cfg(test)]
#[path = "ingest_test.rs"]
mod tests;
