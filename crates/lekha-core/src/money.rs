//! Integer-paise monetary arithmetic
//!
//! All tax arithmetic in Lekha uses whole paise (1/100 rupee) stored in an
//! `i64`. Slab contributions must sum exactly to the total liability, so
//! floating point is never used for amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// A monetary amount in whole paise.
///
/// Serializes as a plain integer (paise). Display renders rupees with two
/// decimal places and no digit grouping; grouping is a presentation concern.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    pub fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    pub fn paise(self) -> i64 {
        self.0
    }

    /// Whole-rupee part, truncated toward zero.
    pub fn rupees(self) -> i64 {
        self.0 / 100
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Subtraction floored at zero, for offsets like the standard deduction
    /// that can never push a component negative.
    pub fn reduce_by(self, other: Money) -> Money {
        Money((self.0 - other.0).max(0))
    }

    pub fn min(self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }

    /// Apply a rate expressed in basis points (1 bps = 0.01%).
    ///
    /// Truncates to whole paise. Exact for the whole-percent rates used in
    /// the statutory slab tables.
    pub fn apply_bps(self, bps: u32) -> Money {
        Money(self.0 * bps as i64 / 10_000)
    }

    /// Parse an OCR-extracted numeric token into an amount.
    ///
    /// Accepts Indian-style thousands separators and whitespace inside the
    /// number (OCR line breaks), plus an optional decimal part of up to two
    /// digits: `"6,00,000"`, `"1,23,\n456.78"`, `"25000"`. Returns `None`
    /// for anything else; the classifier treats that as an absent field.
    pub fn parse(token: &str) -> Option<Money> {
        let cleaned: String = token
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();

        let (int_part, frac_part) = match cleaned.split_once('.') {
            Some((i, f)) => (i, f),
            None => (cleaned.as_str(), ""),
        };

        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if frac_part.len() > 2 || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let rupees: i64 = int_part.parse().ok()?;
        let paise: i64 = match frac_part.len() {
            0 => 0,
            1 => frac_part.parse::<i64>().ok()? * 10,
            _ => frac_part.parse().ok()?,
        };

        rupees
            .checked_mul(100)
            .and_then(|r| r.checked_add(paise))
            .map(Money)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
