//! Core types for the cart state manager.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod quantity;

pub use cart::{Cart, CartItem, NewItem};
pub use id::{ItemId, ItemIdError};
pub use price::{Money, MoneyError};
pub use quantity::Quantity;
