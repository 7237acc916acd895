use super::*;
use crate::money::MicroSgd;
use crate::statements::parse_statement;
use time::macros::date;

const FIXTURE: &str = include_str!("../../testdata/dbs_credit_card.csv");

// =============================================================================
// parse_dbs_date
// =============================================================================

#[test]
fn parse_dbs_date_spaced() {
    assert_eq!(parse_dbs_date("13 Dec 2025").unwrap(), date!(2025 - 12 - 13));
}

#[test]
fn parse_dbs_date_dashed() {
    assert_eq!(parse_dbs_date("13-Dec-2025").unwrap(), date!(2025 - 12 - 13));
}

#[test]
fn parse_dbs_date_two_digit_year() {
    assert_eq!(parse_dbs_date("22-Oct-25").unwrap(), date!(2025 - 10 - 22));
}

#[test]
fn parse_dbs_date_single_digit_day() {
    assert_eq!(parse_dbs_date("3 Nov 2025").unwrap(), date!(2025 - 11 - 03));
}

#[test]
fn parse_dbs_date_ignores_month_case() {
    assert_eq!(parse_dbs_date("22-OCT-25").unwrap(), date!(2025 - 10 - 22));
    assert_eq!(parse_dbs_date("1 dec 2025").unwrap(), date!(2025 - 12 - 01));
}

#[test]
fn parse_dbs_date_wrong_format_errors() {
    let err = parse_dbs_date("13/12/2025").unwrap_err();
    assert!(matches!(err, StatementError::InvalidDate(ref raw) if raw == "13/12/2025"));
}

// =============================================================================
// full statement
// =============================================================================

#[test]
fn parses_fixture_rows() {
    let statement = parse_statement(FIXTURE, Some(StatementKind::DbsCreditCard)).unwrap();
    assert_eq!(statement.kind, StatementKind::DbsCreditCard);
    assert_eq!(statement.account, AccountId::CreditCard);
    assert_eq!(statement.rows.len(), 4);

    let first = &statement.rows[0];
    assert_eq!(first.transacted_on, date!(2025 - 10 - 22));
    assert_eq!(first.description, "SUPER SIMPLE           SINGAPORE     SG");
    assert_eq!(first.debit, MicroSgd::from_cents(294));
    assert_eq!(first.credit, MicroSgd::ZERO);
    assert_eq!(first.line, 8);
}

#[test]
fn parses_credit_rows() {
    let statement = parse_statement(FIXTURE, Some(StatementKind::DbsCreditCard)).unwrap();
    let payment = statement
        .rows
        .iter()
        .find(|row| row.description.starts_with("PAYMENT"))
        .unwrap();
    assert_eq!(payment.credit, MicroSgd::from_cents(150_000));
    assert!(payment.debit.is_zero());
}

#[test]
fn rejects_bad_amount_with_line() {
    let mut raw = FIXTURE.to_owned();
    raw.push_str("01 Nov 2025,02 Nov 2025,BROKEN,Contactless,Settled,12.x,\n");
    let err = parse_statement(&raw, Some(StatementKind::DbsCreditCard)).unwrap_err();
    assert!(matches!(err, StatementError::Amount { line: 12, .. }), "got {err:?}");
}

#[test]
fn rejects_bad_date_in_row() {
    let mut raw = FIXTURE.to_owned();
    raw.push_str("2025/11/01,02 Nov 2025,BROKEN,Contactless,Settled,1.00,\n");
    let err = parse_statement(&raw, Some(StatementKind::DbsCreditCard)).unwrap_err();
    assert!(matches!(err, StatementError::Row { line: 12, .. }), "got {err:?}");
}
