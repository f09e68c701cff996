//! Money type for representing USD amounts
//!
//! Amounts are stored as f64 dollars and serialized transparently as a plain
//! JSON number, matching the on-disk cost format. Arithmetic accumulates at
//! full precision; rounding to two decimal places happens only when an amount
//! is formatted for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul};

/// A monetary amount in USD
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from a dollar value
    pub const fn from_dollars(dollars: f64) -> Self {
        Self(dollars)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw dollar amount
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Get the amount rounded to two decimal places (presentation boundary)
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "$10.50", "10". Non-finite values are
    /// rejected; a NaN or infinite amount would corrupt every total it is
    /// summed into.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let s = s.strip_prefix('$').unwrap_or(s);

        let value: f64 = s
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self(value))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        if rounded < 0.0 {
            write!(f, "-${:.2}", -rounded)
        } else {
            write!(f, "${:.2}", rounded)
        }
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

impl Mul<f64> for Money {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl Div<f64> for Money {
    type Output = Self;

    fn div(self, divisor: f64) -> Self {
        Self(self.0 / divisor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
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
