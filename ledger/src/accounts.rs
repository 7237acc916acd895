//! Chart of accounts for a personal double-entry ledger.
//!
//! Codes are grouped by kind: assets 1xxx, liabilities 2xxx, income 3xxx,
//! expenses 4xxx, equity 5xxx.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad classification of an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// What you own.
    Asset,
    /// What you owe.
    Liability,
    /// Where money comes from.
    Income,
    /// Where money goes.
    Expense,
    /// Net worth.
    Equity,
}

/// Side on which an account's balance normally grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Debit,
    Credit,
}

impl AccountKind {
    #[must_use]
    pub fn normal_balance(self) -> Side {
        match self {
            Self::Asset | Self::Expense => Side::Debit,
            Self::Liability | Self::Income | Self::Equity => Side::Credit,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountId {
    BankAccount,
    CashOnHand,
    Investments,
    AccountsReceivable,

    CreditCard,
    StudentLoan,
    MortgageCarLoan,
    PersonalLoans,

    SalaryWages,
    InterestIncome,
    GiftsReceived,
    SideHustleIncome,
    TaxRefunds,

    Housing,
    Groceries,
    DiningOut,
    Utilities,
    Transportation,
    Subscriptions,
    PersonalCare,

    OpeningBalanceEquity,
    RetainedEarnings,
}

impl AccountId {
    /// Every account, in code order.
    pub const ALL: [Self; 22] = [
        Self::BankAccount,
        Self::CashOnHand,
        Self::Investments,
        Self::AccountsReceivable,
        Self::CreditCard,
        Self::StudentLoan,
        Self::MortgageCarLoan,
        Self::PersonalLoans,
        Self::SalaryWages,
        Self::InterestIncome,
        Self::GiftsReceived,
        Self::SideHustleIncome,
        Self::TaxRefunds,
        Self::Housing,
        Self::Groceries,
        Self::DiningOut,
        Self::Utilities,
        Self::Transportation,
        Self::Subscriptions,
        Self::PersonalCare,
        Self::OpeningBalanceEquity,
        Self::RetainedEarnings,
    ];

    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            Self::BankAccount => 1000,
            Self::CashOnHand => 1100,
            Self::Investments => 1200,
            Self::AccountsReceivable => 1300,
            Self::CreditCard => 2100,
            Self::StudentLoan => 2200,
            Self::MortgageCarLoan => 2300,
            Self::PersonalLoans => 2400,
            Self::SalaryWages => 3100,
            Self::InterestIncome => 3200,
            Self::GiftsReceived => 3300,
            Self::SideHustleIncome => 3400,
            Self::TaxRefunds => 3500,
            Self::Housing => 4100,
            Self::Groceries => 4200,
            Self::DiningOut => 4300,
            Self::Utilities => 4400,
            Self::Transportation => 4500,
            Self::Subscriptions => 4600,
            Self::PersonalCare => 4700,
            Self::OpeningBalanceEquity => 5100,
            Self::RetainedEarnings => 5200,
        }
    }

    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|account| account.code() == code)
    }

    #[must_use]
    pub fn kind(self) -> AccountKind {
        match self.code() / 1000 {
            1 => AccountKind::Asset,
            2 => AccountKind::Liability,
            3 => AccountKind::Income,
            4 => AccountKind::Expense,
            _ => AccountKind::Equity,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BankAccount => "Bank Account",
            Self::CashOnHand => "Cash on Hand",
            Self::Investments => "Investments",
            Self::AccountsReceivable => "Accounts Receivable",
            Self::CreditCard => "Credit Card",
            Self::StudentLoan => "Student Loan",
            Self::MortgageCarLoan => "Mortgage / Car Loan",
            Self::PersonalLoans => "Personal Loans",
            Self::SalaryWages => "Salary & Wages",
            Self::InterestIncome => "Interest Income",
            Self::GiftsReceived => "Gifts Received",
            Self::SideHustleIncome => "Side Hustle Income",
            Self::TaxRefunds => "Tax Refunds",
            Self::Housing => "Housing",
            Self::Groceries => "Groceries",
            Self::DiningOut => "Dining Out",
            Self::Utilities => "Utilities",
            Self::Transportation => "Transportation",
            Self::Subscriptions => "Subscriptions",
            Self::PersonalCare => "Personal Care",
            Self::OpeningBalanceEquity => "Opening Balance Equity",
            Self::RetainedEarnings => "Retained Earnings",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::BankAccount => "Primary spending account.",
            Self::CashOnHand => "Physical cash in your wallet.",
            Self::Investments => "Brokerage accounts, retirement funds, or stocks.",
            Self::AccountsReceivable => "Money people owe you.",
            Self::CreditCard => "Outstanding balance on a credit card.",
            Self::StudentLoan => "Long-term education debt.",
            Self::MortgageCarLoan => "Large installment loans.",
            Self::PersonalLoans => "Money owed to friends or family.",
            Self::SalaryWages => "Primary paycheck.",
            Self::InterestIncome => "Dividends or interest from bank accounts.",
            Self::GiftsReceived => "Money received for birthdays or holidays.",
            Self::SideHustleIncome => "Freelance or gig economy earnings.",
            Self::TaxRefunds => "Money returned from the government.",
            Self::Housing => "Rent or mortgage interest.",
            Self::Groceries => "Food for home.",
            Self::DiningOut => "Restaurants, coffee, and takeout.",
            Self::Utilities => "Electricity, water, internet, and phone.",
            Self::Transportation => "Fuel, public transit, or car maintenance.",
            Self::Subscriptions => "Streaming, software, gym memberships.",
            Self::PersonalCare => "Haircuts, toiletries, and clothing.",
            Self::OpeningBalanceEquity => "Initial balances recorded when the books are opened.",
            Self::RetainedEarnings => "Savings accumulated over time.",
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.name())
    }
}

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;
