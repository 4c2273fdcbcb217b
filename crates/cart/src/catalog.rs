//! Catalog entries as read from the page.
//!
//! The catalog exposes each addable product as loose text attributes. An
//! entry only becomes a [`NewItem`] once every field is present and the
//! price text parses.

use serde::Deserialize;
use thiserror::Error;

use cart_state_core::{ItemId, Money, MoneyError, NewItem};

/// Reasons a catalog entry cannot be added.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A required attribute is absent (or the id is blank).
    #[error("catalog entry is missing `{0}`")]
    MissingField(&'static str),

    /// The price text is not a non-negative amount.
    #[error("catalog price {text:?} is invalid: {source}")]
    InvalidPrice {
        text: String,
        #[source]
        source: MoneyError,
    },
}

/// Raw attributes of a catalog product, e.g. `"R$ 1.234,56"` for the price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<String>,
}

impl TryFrom<CatalogEntry> for NewItem {
    type Error = CatalogError;

    fn try_from(entry: CatalogEntry) -> Result<Self, Self::Error> {
        let id = entry
            .id
            .as_deref()
            .and_then(|raw| ItemId::parse(raw).ok())
            .ok_or(CatalogError::MissingField("id"))?;
        let name = entry.name.ok_or(CatalogError::MissingField("name"))?;
        let image_ref = entry.image.ok_or(CatalogError::MissingField("image"))?;
        let text = entry.price.ok_or(CatalogError::MissingField("price"))?;
        let unit_price = Money::parse_display(&text)
            .map_err(|source| CatalogError::InvalidPrice { text, source })?;

        Ok(Self {
            id,
            name,
            image_ref,
            unit_price,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry() -> CatalogEntry {
        CatalogEntry {
            id: Some("A".to_string()),
            name: Some("Widget".to_string()),
            image: Some("w.png".to_string()),
            price: Some("R$ 1.234,56".to_string()),
        }
    }

    #[test]
    fn test_complete_entry() {
        let item = NewItem::try_from(entry()).unwrap();
        assert_eq!(item.id.as_str(), "A");
        assert_eq!(item.name, "Widget");
        assert_eq!(item.image_ref, "w.png");
        assert_eq!(item.unit_price, Money::from_minor(123_456));
    }

    #[test]
    fn test_missing_fields() {
        let cases: [(CatalogEntry, &str); 5] = [
            (CatalogEntry { id: None, ..entry() }, "id"),
            (CatalogEntry { id: Some("  ".to_string()), ..entry() }, "id"),
            (CatalogEntry { name: None, ..entry() }, "name"),
            (CatalogEntry { image: None, ..entry() }, "image"),
            (CatalogEntry { price: None, ..entry() }, "price"),
        ];
        for (input, field) in cases {
            assert_eq!(
                NewItem::try_from(input),
                Err(CatalogError::MissingField(field))
            );
        }
    }

    #[test]
    fn test_invalid_price() {
        let input = CatalogEntry {
            price: Some("R$ abc".to_string()),
            ..entry()
        };
        assert!(matches!(
            NewItem::try_from(input),
            Err(CatalogError::InvalidPrice { .. })
        ));

        let negative = CatalogEntry {
            price: Some("R$ -1,00".to_string()),
            ..entry()
        };
        assert!(matches!(
            NewItem::try_from(negative),
            Err(CatalogError::InvalidPrice {
                source: MoneyError::Negative,
                ..
            })
        ));
    }
}
