//! Double-entry ledger storage.
//!
//! DESIGN
//! ======
//! Journal entries and postings live in append-only vectors; the vector index
//! is the id. A `Transaction` is a read model that joins one journal entry
//! with the sum of its postings.
//!
//! ERROR HANDLING
//! ==============
//! Params are validated before anything is appended, so a rejected call
//! leaves the ledger untouched.

use serde::{Deserialize, Serialize};
use time::Date;
use tracing::debug;

use crate::accounts::AccountId;
use crate::money::MicroSgd;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("transaction '{name}' has both a debit and a credit")]
    BothSides { name: String },
    #[error("transaction '{name}' has neither a debit nor a credit")]
    NoAmount { name: String },
    #[error("transaction '{name}' has a negative amount")]
    NegativeAmount { name: String },
    #[error("posting {posting_id} references unknown journal entry {journal_entry_id}")]
    DanglingPosting { posting_id: u64, journal_entry_id: u64 },
    #[error("totals overflowed while summing journal entry {0}")]
    Overflow(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

/// Input for recording an expense or income.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub name: String,
    pub description: String,
    pub transacted_on: Date,
    pub debit: MicroSgd,
    pub credit: MicroSgd,
    /// Account the money moved through (bank account, credit card, ...).
    pub account: AccountId,
}

impl NewTransaction {
    /// Exactly one side must carry a positive amount.
    ///
    /// # Errors
    ///
    /// Returns the matching [`LedgerError`] variant when the amounts are
    /// negative, both set, or both zero.
    pub fn validate(&self) -> Result<(), LedgerError> {
        let name = || self.name.clone();
        if self.debit.is_negative() || self.credit.is_negative() {
            return Err(LedgerError::NegativeAmount { name: name() });
        }
        match (self.debit.is_zero(), self.credit.is_zero()) {
            (false, false) => Err(LedgerError::BothSides { name: name() }),
            (true, true) => Err(LedgerError::NoAmount { name: name() }),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub id: u64,
    pub kind: TransactionKind,
    pub name: String,
    pub description: String,
    pub date: Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Posting {
    pub id: u64,
    pub journal_entry_id: u64,
    pub account: AccountId,
    pub name: String,
    pub description: String,
    pub debit: MicroSgd,
    pub credit: MicroSgd,
}

/// Journal entry joined with the totals of its postings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: u64,
    pub kind: TransactionKind,
    pub name: String,
    pub description: String,
    pub transacted_on: Date,
    pub debit: MicroSgd,
    pub credit: MicroSgd,
    pub posting_ids: Vec<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub debit: MicroSgd,
    pub credit: MicroSgd,
    /// Credit minus debit; negative when more money went out than came in.
    pub net: MicroSgd,
}

// =============================================================================
// REPOSITORY
// =============================================================================

pub trait AccountingRepository {
    /// Record money going out; returns the journal entry id.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] if the params fail validation.
    fn create_expense(&mut self, params: NewTransaction) -> Result<u64, LedgerError>;

    /// Record money coming in; returns the journal entry id.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] if the params fail validation.
    fn create_income(&mut self, params: NewTransaction) -> Result<u64, LedgerError>;

    /// All transactions ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] if a posting is orphaned or totals overflow.
    fn list_transactions(&self) -> Result<Vec<Transaction>, LedgerError>;
}

#[derive(Debug, Default)]
pub struct InMemoryAccountingRepository {
    journal_entries: Vec<JournalEntry>,
    postings: Vec<Posting>,
}

impl InMemoryAccountingRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn journal_entries(&self) -> &[JournalEntry] {
        &self.journal_entries
    }

    #[must_use]
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    fn record(&mut self, kind: TransactionKind, params: NewTransaction) -> Result<u64, LedgerError> {
        params.validate()?;

        let journal_entry_id = self.journal_entries.len() as u64;
        self.journal_entries.push(JournalEntry {
            id: journal_entry_id,
            kind,
            name: params.name.clone(),
            description: params.description.clone(),
            date: params.transacted_on,
        });

        let posting_id = self.postings.len() as u64;
        self.postings.push(Posting {
            id: posting_id,
            journal_entry_id,
            account: params.account,
            name: params.name,
            description: params.description,
            debit: params.debit,
            credit: params.credit,
        });

        debug!(journal_entry_id, posting_id, ?kind, "recorded transaction");
        Ok(journal_entry_id)
    }
}

impl AccountingRepository for InMemoryAccountingRepository {
    fn create_expense(&mut self, params: NewTransaction) -> Result<u64, LedgerError> {
        self.record(TransactionKind::Expense, params)
    }

    fn create_income(&mut self, params: NewTransaction) -> Result<u64, LedgerError> {
        self.record(TransactionKind::Income, params)
    }

    fn list_transactions(&self) -> Result<Vec<Transaction>, LedgerError> {
        let mut transactions: Vec<Transaction> = self
            .journal_entries
            .iter()
            .map(|entry| Transaction {
                id: entry.id,
                kind: entry.kind,
                name: entry.name.clone(),
                description: entry.description.clone(),
                transacted_on: entry.date,
                debit: MicroSgd::ZERO,
                credit: MicroSgd::ZERO,
                posting_ids: Vec::new(),
            })
            .collect();

        for posting in &self.postings {
            let journal_entry_id = posting.journal_entry_id;
            let tx = usize::try_from(journal_entry_id)
                .ok()
                .and_then(|idx| transactions.get_mut(idx))
                .ok_or(LedgerError::DanglingPosting { posting_id: posting.id, journal_entry_id })?;

            tx.debit = tx.debit.checked_add(posting.debit).ok_or(LedgerError::Overflow(journal_entry_id))?;
            tx.credit = tx.credit.checked_add(posting.credit).ok_or(LedgerError::Overflow(journal_entry_id))?;
            tx.posting_ids.push(posting.id);
        }

        Ok(transactions)
    }
}

/// Sum debits and credits across transactions.
///
/// # Errors
///
/// Returns [`LedgerError::Overflow`] if a running total leaves `i64`.
pub fn summarize(transactions: &[Transaction]) -> Result<Totals, LedgerError> {
    let mut totals = Totals::default();
    for tx in transactions {
        totals.debit = totals.debit.checked_add(tx.debit).ok_or(LedgerError::Overflow(tx.id))?;
        totals.credit = totals.credit.checked_add(tx.credit).ok_or(LedgerError::Overflow(tx.id))?;
    }
    totals.net = totals.credit - totals.debit;
    Ok(totals)
}

#[cfg(test)]
#[path = "repository_test.rs"]
mod tests;
