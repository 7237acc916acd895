use super::*;
use time::macros::date;

#[test]
fn parses_year_month() {
    let ym: YearMonth = "2025-11".parse().unwrap();
    assert_eq!(ym, YearMonth::new(2025, Month::November));
    assert_eq!(ym.to_string(), "2025-11");
}

#[test]
fn rejects_malformed_months() {
    for raw in ["2025-13", "2025-00", "2025-1", "25-11", "2025/11", "2025-11-01", "", "abcd-ef"] {
        assert!(raw.parse::<YearMonth>().is_err(), "expected error for {raw:?}");
    }
}

#[test]
fn contains_only_dates_in_the_month() {
    let ym = YearMonth::new(2025, Month::December);
    assert!(ym.contains(date!(2025 - 12 - 01)));
    assert!(ym.contains(date!(2025 - 12 - 31)));
    assert!(!ym.contains(date!(2025 - 11 - 30)));
    assert!(!ym.contains(date!(2024 - 12 - 15)));
}

#[test]
fn previous_crosses_year_boundary() {
    assert_eq!(YearMonth::new(2026, Month::January).previous(), YearMonth::new(2025, Month::December));
    assert_eq!(YearMonth::new(2025, Month::December).previous(), YearMonth::new(2025, Month::November));
}

#[test]
fn serializes_as_string() {
    let ym = YearMonth::new(2025, Month::March);
    assert_eq!(serde_json::to_string(&ym).unwrap(), "\"2025-03\"");
    let back: YearMonth = serde_json::from_str("\"2025-03\"").unwrap();
    assert_eq!(back, ym);
}
