//! Line quantity, always at least one.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How many units of an item are in the cart.
///
/// A quantity is never zero: any request that would go below one is clamped
/// to one. Removing a line is a separate, explicit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(1);

    /// Create a quantity, returning `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Clamp any integer into a valid quantity.
    ///
    /// Values below one become one; values above `u32::MAX` saturate.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        if value < 1 {
            return Self::ONE;
        }
        Self(u32::try_from(value).unwrap_or(u32::MAX))
    }

    /// Interpret raw user input.
    ///
    /// Only the leading integer is read, after an optional sign: `"2.9"` is
    /// two, `"1e3"` is one, `"12 units"` is twelve. Missing or non-numeric
    /// input yields one, as does anything at or below zero however large.
    /// Positive values beyond `u32::MAX` saturate.
    #[must_use]
    pub fn from_input(raw: Option<&str>) -> Self {
        let Some(text) = raw.map(str::trim) else {
            return Self::ONE;
        };
        let (negative, unsigned) = text
            .strip_prefix('-')
            .map_or_else(|| (false, text.strip_prefix('+').unwrap_or(text)), |rest| (true, rest));
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let digits = unsigned.get(..end).unwrap_or_default().trim_start_matches('0');
        if negative || digits.is_empty() {
            return Self::ONE;
        }
        digits.parse::<u32>().map_or(Self(u32::MAX), Self)
    }

    /// The underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// One more unit, saturating at `u32::MAX`.
    #[must_use]
    pub const fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Sum of two quantities, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = &'static str;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("quantity must be at least 1")
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
