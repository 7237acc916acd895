//! DBS credit card statement export.
//!
//! Six metadata rows, then:
//! `Transaction Date, Transaction Posting Date, Transaction Description,
//! Payment Type, Transaction Status, Debit Amount, Credit Amount`.
//! Each line carries either a debit (purchase) or a credit (payment/refund).

use csv::StringRecord;
use serde::{Deserialize, Deserializer};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use super::{StatementError, StatementKind, StatementParser, StatementRow};
use crate::accounts::AccountId;

/// Metadata rows above the header (card number, statement period, ...).
pub const DBS_CREDIT_CARD_SKIP_ROWS: usize = 6;

pub const DBS_CREDIT_CARD_HEADER: [&str; 7] = [
    "Transaction Date",
    "Transaction Posting Date",
    "Transaction Description",
    "Payment Type",
    "Transaction Status",
    "Debit Amount",
    "Credit Amount",
];

const DBS_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day padding:none] [month repr:short case_sensitive:false] [year]");

/// One line of the DBS credit card export, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreditCardItem {
    #[serde(rename = "Transaction Date", deserialize_with = "deserialize_dbs_date")]
    pub transaction_date: Date,
    #[serde(rename = "Transaction Posting Date", deserialize_with = "deserialize_dbs_date")]
    pub transaction_posting_date: Date,
    #[serde(rename = "Transaction Description")]
    pub transaction_description: String,
    /// e.g. "Contactless", "Online/In-App Payment".
    #[serde(rename = "Payment Type", default)]
    pub payment_type: String,
    /// e.g. "Settled".
    #[serde(rename = "Transaction Status", default)]
    pub transaction_status: String,
    #[serde(rename = "Debit Amount", default)]
    pub debit_amount: String,
    #[serde(rename = "Credit Amount", default)]
    pub credit_amount: String,
}

/// Parse a DBS date: `13 Dec 2025`, `13-Dec-2025` or `22-Oct-25`.
///
/// # Errors
///
/// Returns [`StatementError::InvalidDate`] for anything else.
pub fn parse_dbs_date(raw: &str) -> Result<Date, StatementError> {
    let normalized = super::expand_year(&raw.trim().replace('-', " "), ' ');
    Date::parse(&normalized, DBS_DATE_FORMAT).map_err(|_| StatementError::InvalidDate(raw.to_owned()))
}

fn deserialize_dbs_date<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_dbs_date(&raw).map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DbsCreditCardParser;

impl StatementParser for DbsCreditCardParser {
    fn kind(&self) -> StatementKind {
        StatementKind::DbsCreditCard
    }

    fn account(&self) -> AccountId {
        AccountId::CreditCard
    }

    fn skip_rows(&self) -> usize {
        DBS_CREDIT_CARD_SKIP_ROWS
    }

    fn matches_header(&self, header: &StringRecord) -> bool {
        super::header_is(header, &DBS_CREDIT_CARD_HEADER)
    }

    fn parse_record(&self, record: &StringRecord, header: &StringRecord) -> Result<StatementRow, StatementError> {
        let line = super::record_line(record);
        let item: CreditCardItem = record
            .deserialize(Some(header))
            .map_err(|source| StatementError::Row { line, source })?;

        Ok(StatementRow {
            line,
            transacted_on: item.transaction_date,
            description: item.transaction_description,
            debit: super::parse_amount(&item.debit_amount, line)?,
            credit: super::parse_amount(&item.credit_amount, line)?,
        })
    }
}

#[cfg(test)]
#[path = "dbs_test.rs"]
mod tests;
