//! Menu prices held as integer minor currency units (grosze).
//!
//! Display text uses a comma separator and exactly two fractional digits,
//! e.g. `1250` renders as `12,50`. Parsing accepts either separator and is
//! decimal-exact: the amount is scaled by 100 and rounded half-up on the
//! third fractional digit without passing through binary floating point.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::input::trim_input;

const MINOR_UNITS: u32 = 100;

/// Non-negative price in minor currency units.
///
/// # Examples
///
/// ```
/// # use cafe_backend::domain::Price;
/// let price = Price::parse("12.5").expect("numeric");
/// assert_eq!(price.minor_units(), 1250);
/// assert_eq!(price.to_string(), "12,50");
/// assert_eq!(Price::parse("abc"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    /// Wrap an amount already expressed in minor units.
    #[must_use]
    pub const fn from_minor_units(minor_units: u32) -> Self {
        Self(minor_units)
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn minor_units(self) -> u32 {
        self.0
    }

    /// Parse operator-entered text such as `"12,50"` or `" 7.5 "`.
    ///
    /// Returns `None` for anything that is not a plain non-negative decimal
    /// number; callers keep their previous value in that case.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let normalised = trim_input(text).replacen(',', ".", 1);
        let unsigned = normalised.strip_prefix('+').unwrap_or(&normalised);
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }

        let mut units = accumulate_digits(whole)?.checked_mul(u64::from(MINOR_UNITS))?;
        let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        units = units.checked_add(tenths * 10 + hundredths)?;
        if digits.next().is_some_and(|thousandths| thousandths >= 5) {
            units = units.checked_add(1)?;
        }

        u32::try_from(units).ok().map(Self)
    }
}

fn accumulate_digits(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0_u64, |acc, b| {
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{:02}", self.0 / MINOR_UNITS, self.0 % MINOR_UNITS)
    }
}

impl From<Price> for u32 {
    fn from(value: Price) -> Self {
        value.0
    }
}
