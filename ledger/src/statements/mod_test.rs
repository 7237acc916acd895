use super::*;

const DBS: &str = include_str!("../../testdata/dbs_credit_card.csv");
const OCBC: &str = include_str!("../../testdata/ocbc_account.csv");

// =============================================================================
// detection
// =============================================================================

#[test]
fn detects_dbs_statement() {
    let statement = parse_statement(DBS, None).unwrap();
    assert_eq!(statement.kind, StatementKind::DbsCreditCard);
}

#[test]
fn detects_ocbc_statement() {
    let statement = parse_statement(OCBC, None).unwrap();
    assert_eq!(statement.kind, StatementKind::OcbcAccount);
}

#[test]
fn unknown_layout_is_rejected() {
    let err = parse_statement("a,b,c\n1,2,3\n", None).unwrap_err();
    assert!(matches!(err, StatementError::UnknownFormat));
}

#[test]
fn explicit_kind_with_wrong_header_is_rejected() {
    let err = parse_statement(OCBC, Some(StatementKind::DbsCreditCard)).unwrap_err();
    assert!(matches!(err, StatementError::UnexpectedHeader { kind: StatementKind::DbsCreditCard }));
}

#[test]
fn too_few_rows_is_rejected() {
    let raw = "Card Transaction Details For:,XXXX\nStatement Date:,13 Dec 2025\n";
    let err = parse_statement(raw, Some(StatementKind::DbsCreditCard)).unwrap_err();
    assert!(matches!(err, StatementError::TooFewRows { skip: 6, found: 2, .. }), "got {err:?}");
}

// =============================================================================
// table handling
// =============================================================================

#[test]
fn blank_rows_are_skipped() {
    let raw = format!("{OCBC},,,,\n\n");
    let statement = parse_statement(&raw, Some(StatementKind::OcbcAccount)).unwrap();
    assert_eq!(statement.rows.len(), 3);
}

#[test]
fn empty_lines_in_metadata_do_not_shift_header() {
    let raw = OCBC.replacen("\n,\n", "\n\n", 1);
    assert_ne!(raw, OCBC);

    let statement = parse_statement(&raw, None).unwrap();
    assert_eq!(statement.kind, StatementKind::OcbcAccount);
    assert_eq!(statement.rows.len(), 3);
    assert_eq!(statement.rows[0].line, 7);
}

#[test]
fn header_after_metadata_block_is_rejected() {
    let raw = format!("extra metadata,\n{OCBC}");
    let err = parse_statement(&raw, Some(StatementKind::OcbcAccount)).unwrap_err();
    assert!(matches!(err, StatementError::UnexpectedHeader { kind: StatementKind::OcbcAccount }), "got {err:?}");
}

#[test]
fn header_ignores_bom_and_trailing_empty_columns() {
    let header = StringRecord::from(vec!["\u{feff}Transaction date", "Value date", "Description", "Withdrawals(SGD)", "Deposits(SGD)", ""]);
    assert!(header_is(&header, &ocbc::OCBC_ACCOUNT_HEADER));
}

#[test]
fn expand_year_only_touches_two_digit_years() {
    assert_eq!(expand_year("22/12/25", '/'), "22/12/2025");
    assert_eq!(expand_year("22/12/2025", '/'), "22/12/2025");
    assert_eq!(expand_year("22 Oct 25", ' '), "22 Oct 2025");
}

// =============================================================================
// StatementKind
// =============================================================================

#[test]
fn statement_kind_from_str() {
    assert_eq!("dbs".parse::<StatementKind>().unwrap(), StatementKind::DbsCreditCard);
    assert_eq!("OCBC".parse::<StatementKind>().unwrap(), StatementKind::OcbcAccount);
    assert!("uob".parse::<StatementKind>().is_err());
}

#[test]
fn statement_kind_display_matches_from_str() {
    for kind in [StatementKind::DbsCreditCard, StatementKind::OcbcAccount] {
        assert_eq!(kind.to_string().parse::<StatementKind>().unwrap(), kind);
    }
}
