//! Personal-finance ledger: money, chart of accounts, statement parsing and
//! the ingest use case shared by the `pf` CLI.
//!
//! ARCHITECTURE
//! ============
//! Bank exports are parsed into normalized [`statements::StatementRow`]s,
//! filtered by [`month::YearMonth`], and recorded as journal entries with
//! postings in an [`repository::AccountingRepository`]. Amounts are exact
//! integers in millionths of a dollar ([`money::MicroSgd`]).

pub mod accounts;
pub mod clock;
pub mod ingest;
pub mod money;
pub mod month;
pub mod repository;
pub mod statements;
