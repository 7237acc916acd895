//! OCBC bank account statement export.
//!
//! Five metadata rows, then:
//! `Transaction date, Value date, Description, Withdrawals(SGD), Deposits(SGD)`.

use csv::StringRecord;
use serde::{Deserialize, Deserializer};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use super::{StatementError, StatementKind, StatementParser, StatementRow};
use crate::accounts::AccountId;

/// Metadata rows above the header (account number, balances, ...).
pub const OCBC_ACCOUNT_SKIP_ROWS: usize = 5;

pub const OCBC_ACCOUNT_HEADER: [&str; 5] =
    ["Transaction date", "Value date", "Description", "Withdrawals(SGD)", "Deposits(SGD)"];

const OCBC_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day padding:none]/[month padding:none]/[year]");

/// One line of the OCBC account export, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountTransactionItem {
    #[serde(rename = "Transaction date", deserialize_with = "deserialize_ocbc_date")]
    pub transaction_date: Date,
    #[serde(rename = "Value date", deserialize_with = "deserialize_ocbc_date")]
    pub value_date: Date,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Withdrawals(SGD)", default)]
    pub withdrawals_sgd: String,
    #[serde(rename = "Deposits(SGD)", default)]
    pub deposits_sgd: String,
}

/// Parse an OCBC date: `22/12/2025`, `2/1/2026` or `22/12/25`.
///
/// # Errors
///
/// Returns [`StatementError::InvalidDate`] for anything else.
pub fn parse_ocbc_date(raw: &str) -> Result<Date, StatementError> {
    let normalized = super::expand_year(raw.trim(), '/');
    Date::parse(&normalized, OCBC_DATE_FORMAT).map_err(|_| StatementError::InvalidDate(raw.to_owned()))
}

fn deserialize_ocbc_date<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_ocbc_date(&raw).map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OcbcAccountParser;

impl StatementParser for OcbcAccountParser {
    fn kind(&self) -> StatementKind {
        StatementKind::OcbcAccount
    }

    fn account(&self) -> AccountId {
        AccountId::BankAccount
    }

    fn skip_rows(&self) -> usize {
        OCBC_ACCOUNT_SKIP_ROWS
    }

    fn matches_header(&self, header: &StringRecord) -> bool {
        super::header_is(header, &OCBC_ACCOUNT_HEADER)
    }

    fn parse_record(&self, record: &StringRecord, header: &StringRecord) -> Result<StatementRow, StatementError> {
        let line = super::record_line(record);
        let item: AccountTransactionItem = record
            .deserialize(Some(header))
            .map_err(|source| StatementError::Row { line, source })?;

        Ok(StatementRow {
            line,
            transacted_on: item.transaction_date,
            description: item.description,
            debit: super::parse_amount(&item.withdrawals_sgd, line)?,
            credit: super::parse_amount(&item.deposits_sgd, line)?,
        })
    }
}

#[cfg(test)]
#[path = "ocbc_test.rs"]
mod tests;
