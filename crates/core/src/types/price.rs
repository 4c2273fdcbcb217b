//! Money stored in integer minor units.
//!
//! Prices are kept as whole cents so that summing many lines never drifts.
//! [`rust_decimal::Decimal`] is only used at the edges: parsing catalog text,
//! reading and writing the major-unit number in the persisted slot, and
//! producing the fixed-point string for display.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::quantity::Quantity;

/// Errors that can occur when building a [`Money`] value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// No digits were found in the input.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a number once separators are normalized.
    #[error("invalid price: {0}")]
    Invalid(String),
    /// Unit prices are never negative.
    #[error("price cannot be negative")]
    Negative,
    /// The amount does not fit in the minor-unit representation.
    #[error("price is out of range")]
    OutOfRange,
}

/// A monetary amount in minor units (cents).
///
/// ## Examples
///
/// ```
/// use cart_state_core::Money;
///
/// let price = Money::parse_display("R$ 1.234,56").unwrap();
/// assert_eq!(price.minor_units(), 123_456);
/// assert_eq!(price.to_string(), "1234.56");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Number of fractional digits kept.
    pub const SCALE: u32 = 2;

    /// Largest unit price accepted from catalog text or the persisted slot.
    ///
    /// The slot stores major units as a JSON float; below this bound every
    /// cent survives the trip through `f64` exactly.
    pub const MAX_UNIT_PRICE: Self = Self(9_999_999_999_999);

    /// Create an amount from minor units.
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// The amount in minor units.
    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// The amount in major units as an exact decimal.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, Self::SCALE)
    }

    /// Convert a major-unit decimal, rounding half away from zero to the
    /// nearest minor unit.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::OutOfRange`] if the magnitude exceeds
    /// [`Money::MAX_UNIT_PRICE`].
    pub fn from_decimal(amount: Decimal) -> Result<Self, MoneyError> {
        amount
            .round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|minor| minor.to_i64())
            .map(Self)
            .filter(|money| money.0.unsigned_abs() <= Self::MAX_UNIT_PRICE.0.unsigned_abs())
            .ok_or(MoneyError::OutOfRange)
    }

    /// Convert a major-unit float, as found in the persisted slot.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Invalid`] for NaN or infinities and
    /// [`MoneyError::OutOfRange`] for amounts that do not fit.
    pub fn from_major_f64(amount: f64) -> Result<Self, MoneyError> {
        let decimal =
            Decimal::try_from(amount).map_err(|e| MoneyError::Invalid(e.to_string()))?;
        Self::from_decimal(decimal)
    }

    /// Parse a catalog price such as `"R$ 1.234,56"`.
    ///
    /// Everything before the first digit, sign or comma is treated as the
    /// currency prefix. Every `.` is a thousands separator and the comma is
    /// the decimal separator.
    ///
    /// # Errors
    ///
    /// Returns an error if no number remains after normalization, if it is
    /// negative, or if it does not fit.
    pub fn parse_display(text: &str) -> Result<Self, MoneyError> {
        let number = text
            .trim()
            .trim_start_matches(|c: char| !(c.is_ascii_digit() || c == '-' || c == ','))
            .trim();
        if number.is_empty() {
            return Err(MoneyError::Empty);
        }

        let normalized: String = number
            .chars()
            .filter(|c| *c != '.' && !c.is_whitespace())
            .map(|c| if c == ',' { '.' } else { c })
            .collect();
        let amount = Decimal::from_str(&normalized)
            .map_err(|_| MoneyError::Invalid(text.trim().to_owned()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative);
        }
        Self::from_decimal(amount)
    }

    /// The amount multiplied by a quantity, saturating on overflow.
    #[must_use]
    pub fn times(self, quantity: Quantity) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity.get())))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

// Persisted as a plain JSON number in major units (`10.5`), not as cents.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.unsigned_abs() > Self::MAX_UNIT_PRICE.0.unsigned_abs() {
            return Err(serde::ser::Error::custom(MoneyError::OutOfRange));
        }
        serializer.serialize_f64(self.to_decimal().to_f64().unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        let money = Self::from_major_f64(amount).map_err(serde::de::Error::custom)?;
        if money.is_negative() {
            return Err(serde::de::Error::custom(MoneyError::Negative));
        }
        Ok(money)
    }
}
