//! Integration tests for the persisted cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cart-state-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end command sequences over an in-memory store
//! - `cart_persistence` - Slot format, fail-open loading and file-backed stores

use cart_state::{CartRepository, CartService, CatalogEntry, Command, MemoryStore};

/// A service over a fresh in-memory store.
#[must_use]
pub fn memory_service() -> CartService<MemoryStore> {
    CartService::new(CartRepository::new(MemoryStore::new()))
}

/// An add command for a fully populated catalog entry.
#[must_use]
pub fn add(id: &str, name: &str, image: &str, price: &str) -> Command {
    Command::AddItem(CatalogEntry {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        image: Some(image.to_string()),
        price: Some(price.to_string()),
    })
}

/// A set-quantity command with raw input.
#[must_use]
pub fn set(id: &str, quantity: &str) -> Command {
    Command::SetQuantity {
        id: id.to_string(),
        quantity: Some(quantity.to_string()),
    }
}

/// A remove command.
#[must_use]
pub fn remove(id: &str) -> Command {
    Command::RemoveItem { id: id.to_string() }
}
