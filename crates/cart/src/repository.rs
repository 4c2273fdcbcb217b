//! Cart repository over a persisted slot.
//!
//! This is the only code that reads or writes the cart slot, and therefore
//! the only owner of its wire format: a JSON array of
//! `{ "id", "nome", "imagem", "preco", "quantidade" }` objects.
//!
//! Loading fails open. A missing, unreadable or unparsable slot is an empty
//! cart, and salvageable defects in individual lines are repaired.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use cart_state_core::{Cart, CartItem, ItemId, Money, NewItem, Quantity};

use crate::storage::{PersistedStore, StoreError};

/// Slot key used when none is configured.
pub const DEFAULT_SLOT_KEY: &str = "carrinho";

/// Errors that can occur while saving a cart.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store rejected the write.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The cart could not be serialized.
    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct StoredItemRef<'a> {
    id: &'a ItemId,
    #[serde(rename = "nome")]
    name: &'a str,
    #[serde(rename = "imagem")]
    image_ref: &'a str,
    #[serde(rename = "preco")]
    unit_price: Money,
    #[serde(rename = "quantidade")]
    quantity: Quantity,
}

#[derive(Deserialize)]
struct StoredItem {
    id: ItemId,
    #[serde(rename = "nome")]
    name: String,
    #[serde(rename = "imagem")]
    image_ref: String,
    #[serde(rename = "preco")]
    unit_price: Money,
    #[serde(rename = "quantidade", default)]
    quantity: Option<Value>,
}

/// Read a persisted quantity, returning `None` when it needs repair.
fn stored_quantity(raw: Option<&Value>) -> Option<Quantity> {
    match raw? {
        Value::Number(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .and_then(Quantity::new),
        _ => None,
    }
}

/// Typed access to the cart slot of a [`PersistedStore`].
#[derive(Debug)]
pub struct CartRepository<S> {
    store: S,
    key: String,
}

impl<S: PersistedStore> CartRepository<S> {
    /// Create a repository over the default slot.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_SLOT_KEY)
    }

    /// Create a repository over a named slot.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consume the repository and hand back the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Load the persisted cart.
    ///
    /// Never fails: an absent, unreadable or malformed slot yields an empty
    /// cart. Lines with a missing or non-positive quantity are repaired to
    /// one, and lines repeating an earlier id are merged into it.
    #[must_use]
    pub fn load(&self) -> Cart {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "cart slot empty");
                return Cart::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "cart slot unreadable, using empty cart");
                return Cart::new();
            }
        };

        match serde_json::from_str::<Vec<StoredItem>>(&raw) {
            Ok(items) => restore(items),
            Err(e) => {
                warn!(key = %self.key, error = %e, "cart slot malformed, using empty cart");
                Cart::new()
            }
        }
    }

    /// Overwrite the slot with the full cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if encoding or the store write fails.
    pub fn save(&mut self, cart: &Cart) -> Result<(), RepositoryError> {
        let stored: Vec<StoredItemRef<'_>> = cart
            .iter()
            .map(|item| StoredItemRef {
                id: item.id(),
                name: item.name(),
                image_ref: item.image_ref(),
                unit_price: item.unit_price(),
                quantity: item.quantity(),
            })
            .collect();
        let encoded = serde_json::to_string(&stored)?;
        self.store.set(&self.key, &encoded)?;
        debug!(key = %self.key, lines = cart.len(), "cart saved");
        Ok(())
    }
}

fn restore(items: Vec<StoredItem>) -> Cart {
    let mut cart = Cart::new();
    for stored in items {
        let quantity = stored_quantity(stored.quantity.as_ref()).unwrap_or_else(|| {
            warn!(item_id = %stored.id, raw = ?stored.quantity, "repairing invalid stored quantity");
            Quantity::ONE
        });

        if let Some(existing) = cart.get_mut(&stored.id) {
            warn!(item_id = %stored.id, "merging duplicate stored line");
            existing.absorb(quantity);
            continue;
        }

        let item = NewItem {
            id: stored.id,
            name: stored.name,
            image_ref: stored.image_ref,
            unit_price: stored.unit_price,
        };
        cart.insert(CartItem::new(item, quantity));
    }
    cart
}
