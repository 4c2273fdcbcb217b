//! Catalog item identifier.
//!
//! The id is the merge key of a cart: two additions with the same id end up
//! as a single line with a larger quantity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`ItemId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemIdError {
    /// The input string is empty or only whitespace.
    #[error("item id cannot be empty")]
    Empty,
}

/// A stable catalog item identifier.
///
/// Ids are opaque strings supplied by the catalog. The only constraint is
/// that they are not blank; surrounding whitespace is trimmed.
///
/// ## Examples
///
/// ```
/// use cart_state_core::ItemId;
///
/// assert!(ItemId::parse("A").is_ok());
/// assert_eq!(ItemId::parse("  sku-42 ").unwrap().as_str(), "sku-42");
/// assert!(ItemId::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Parse an `ItemId` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ItemIdError::Empty`] if the input is blank.
    pub fn parse(s: &str) -> Result<Self, ItemIdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ItemIdError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = ItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = ItemIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
