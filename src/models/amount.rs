//! Fixed two-decimal money amount.
//!
//! Amounts are held as integer hundredths so that totals never drift.
//! The store keeps them as REAL for compatibility with older files, which is
//! why the conversions to and from `f64` round to the nearest hundredth.

use crate::errors::{AppError, AppResult};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_cents(cents: i64) -> Self {
        Amount(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Convert DB value → Amount
    pub fn from_db(value: f64) -> Self {
        Amount((value * 100.0).round() as i64)
    }

    /// Convert Amount → DB value
    pub fn to_db(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse user input such as `2.5`, `2.50` or `3`.
    pub fn parse(input: &str) -> AppResult<Self> {
        let s = input.trim();
        let invalid = || AppError::InvalidAmount(input.to_string());

        if s.is_empty() || s.starts_with('-') || s.starts_with('+') {
            return Err(invalid());
        }

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        if frac.len() > 2
            || (whole.is_empty() && frac.is_empty())
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .map(Amount)
            .ok_or_else(invalid)
    }
}

impl FromStr for Amount {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse(s)
    }
}

/// Checked arithmetic. Quantities are unbounded on input, so a line value
/// or a total can leave the `i64` range; that is an error, never a wrap.
impl Amount {
    /// Line value: quantity × unit price.
    pub fn times(self, quantity: i64) -> AppResult<Amount> {
        self.0
            .checked_mul(quantity)
            .map(Amount)
            .ok_or_else(|| AppError::InvalidAmount(format!("{self} × {quantity} is out of range")))
    }

    pub fn checked_add(self, rhs: Amount) -> AppResult<Amount> {
        self.0
            .checked_add(rhs.0)
            .map(Amount)
            .ok_or_else(|| AppError::InvalidAmount(format!("{self} + {rhs} is out of range")))
    }

    pub fn total<I: IntoIterator<Item = Amount>>(amounts: I) -> AppResult<Amount> {
        amounts
            .into_iter()
            .try_fold(Amount::ZERO, |acc, a| acc.checked_add(a))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// JSON output carries the human form ("2.50"), never a float.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
