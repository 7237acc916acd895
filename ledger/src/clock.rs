//! Injectable source of "today" so month defaults are testable.

use time::{Date, OffsetDateTime};

use crate::month::YearMonth;

pub trait Clock {
    fn today(&self) -> Date;
}

/// Wall clock in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }
}

/// The month before the clock's current month, e.g. 2025-12-13 gives 2025-11.
#[must_use]
pub fn last_month(clock: &impl Clock) -> YearMonth {
    YearMonth::of(clock.today()).previous()
}

#[cfg(test)]
#[path = "clock_test.rs"]
mod tests;
