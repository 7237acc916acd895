use super::*;

#[test]
fn codes_are_unique_and_sorted() {
    let codes: Vec<u32> = AccountId::ALL.iter().map(|a| a.code()).collect();
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(codes, sorted);
}

#[test]
fn from_code_round_trips_every_account() {
    for account in AccountId::ALL {
        assert_eq!(AccountId::from_code(account.code()), Some(account));
    }
    assert_eq!(AccountId::from_code(9999), None);
}

#[test]
fn kind_follows_code_range() {
    assert_eq!(AccountId::BankAccount.kind(), AccountKind::Asset);
    assert_eq!(AccountId::CreditCard.kind(), AccountKind::Liability);
    assert_eq!(AccountId::SalaryWages.kind(), AccountKind::Income);
    assert_eq!(AccountId::Groceries.kind(), AccountKind::Expense);
    assert_eq!(AccountId::RetainedEarnings.kind(), AccountKind::Equity);
}

#[test]
fn normal_balance_per_kind() {
    assert_eq!(AccountKind::Asset.normal_balance(), Side::Debit);
    assert_eq!(AccountKind::Expense.normal_balance(), Side::Debit);
    assert_eq!(AccountKind::Liability.normal_balance(), Side::Credit);
    assert_eq!(AccountKind::Income.normal_balance(), Side::Credit);
    assert_eq!(AccountKind::Equity.normal_balance(), Side::Credit);
}

#[test]
fn display_includes_code_and_name() {
    assert_eq!(AccountId::CreditCard.to_string(), "2100 Credit Card");
}
