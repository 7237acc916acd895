use super::*;
use time::macros::date;

struct FixedClock(Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[test]
fn last_month_mid_year() {
    let clock = FixedClock(date!(2025 - 12 - 13));
    assert_eq!(last_month(&clock).to_string(), "2025-11");
}

#[test]
fn last_month_in_january_rolls_back_a_year() {
    let clock = FixedClock(date!(2026 - 01 - 05));
    assert_eq!(last_month(&clock).to_string(), "2025-12");
}

#[test]
fn system_clock_last_month_precedes_today() {
    let today = SystemClock.today();
    assert_ne!(last_month(&SystemClock), YearMonth::of(today));
}
