//! Exact money amounts and currency display.
//!
//! DESIGN
//! ======
//! Statement amounts are parsed digit by digit into `i64` micro-dollars so
//! `6,002.94` never passes through floating point. Display rounds half away
//! from zero to cents and groups thousands, e.g. `S$6,002.94`.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Micro-units in one dollar.
pub const MICROS_PER_SGD: i64 = 1_000_000;

const MICROS_PER_CENT: i64 = 10_000;
const MAX_FRACTION_DIGITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("invalid amount '{0}'")]
    Invalid(String),
    #[error("amount '{0}' has more than 6 decimal places")]
    TooPrecise(String),
    #[error("amount '{0}' is out of range")]
    Overflow(String),
}

/// Signed amount in millionths of a Singapore dollar.
///
/// Covers the full `i64` range, about ±9.2 trillion dollars. The `+`, `-`
/// and [`MicroSgd::from_cents`] operators panic on overflow in debug builds;
/// use [`MicroSgd::checked_add`] and [`MicroSgd::checked_sub`] on values
/// that come from untrusted input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MicroSgd(i64);

impl MicroSgd {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents * MICROS_PER_CENT)
    }

    #[must_use]
    pub const fn as_micros(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Parse a statement amount such as `6,002.94`, `-2.5` or `""`.
    ///
    /// Blank input is zero. Thousands separators are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError`] when the text is not a decimal number, has more
    /// than six fractional digits, or does not fit in `i64` micro-units.
    pub fn parse(raw: &str) -> Result<Self, AmountError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }

        let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
        let (negative, digits) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.strip_prefix('+').unwrap_or(cleaned.as_str())),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(AmountError::Invalid(raw.to_owned()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(AmountError::Invalid(raw.to_owned()));
        }
        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(AmountError::TooPrecise(raw.to_owned()));
        }

        let overflow = || AmountError::Overflow(raw.to_owned());
        let whole_micros = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .map_err(|_| overflow())?
                .checked_mul(MICROS_PER_SGD)
                .ok_or_else(overflow)?
        };

        let mut fraction_micros = 0_i64;
        for (idx, digit) in fraction.bytes().enumerate() {
            let place = 10_i64.pow(u32::try_from(MAX_FRACTION_DIGITS - 1 - idx).map_err(|_| overflow())?);
            fraction_micros += i64::from(digit - b'0') * place;
        }

        let micros = whole_micros.checked_add(fraction_micros).ok_or_else(overflow)?;
        Ok(Self(if negative { -micros } else { micros }))
    }

    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Round half away from zero to whole cents. Defined for every `i64`.
    #[must_use]
    pub fn round_to_cents(self) -> i64 {
        let whole = self.0 / MICROS_PER_CENT;
        let rest = self.0 % MICROS_PER_CENT;
        if rest.abs() >= MICROS_PER_CENT / 2 { whole + self.0.signum() } else { whole }
    }
}

impl Add for MicroSgd {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for MicroSgd {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for MicroSgd {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for MicroSgd {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for MicroSgd {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for MicroSgd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.round_to_cents();
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();
        let dollars = group_thousands(cents / 100);
        write!(f, "{sign}S${dollars}.{:02}", cents % 100)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "money_test.rs"]
mod tests;
