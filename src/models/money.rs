//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues when summing many records. The sign carries the project convention:
//! positive amounts are income, negative amounts are expenses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
///
/// Using i64 cents keeps every aggregate sum exact; presentation decides how
/// to round for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Construct an amount from a raw cent count
    ///
    /// ```
    /// use spendview::models::Money;
    /// let lunch = Money::from_cents(-1250); // -$12.50
    /// assert!(lunch.is_expense());
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Raw cent count, sign included
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole currency units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional cents (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Whether the amount is exactly zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this amount counts as income (strictly positive)
    pub const fn is_income(&self) -> bool {
        self.0 > 0
    }

    /// Check if this amount counts as an expense (strictly negative)
    pub const fn is_expense(&self) -> bool {
        self.0 < 0
    }

    /// Whether the amount is below zero
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Magnitude of the amount
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a decimal string
    ///
    /// Accepts an optional leading `-` and `$`, whole units, and at most two
    /// fractional digits: `"10.50"`, `"-10.5"`, `"$10"`. More than two
    /// fractional digits is rejected rather than silently rounded.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let trimmed = input.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (sign, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed),
        };
        let body = body.strip_prefix('$').unwrap_or(body);
        if body.is_empty() {
            return Err(invalid());
        }

        let cents = match body.split_once('.') {
            None => body.parse::<i64>().map_err(|_| invalid())? * 100,
            Some((units, frac)) => {
                let units: i64 = units.parse().map_err(|_| invalid())?;
                let frac_cents = match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => return Err(invalid()),
                };
                units * 100 + frac_cents
            }
        };

        Ok(Self(sign * cents))
    }

    /// Render with the given currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

/// Failure to read an amount from text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
