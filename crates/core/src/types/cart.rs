//! Cart lines and the cart collection.

use super::id::ItemId;
use super::price::Money;
use super::quantity::Quantity;

/// A validated candidate for insertion, as read from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    /// Catalog id, the merge key.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Opaque image reference (usually a URL or path).
    pub image_ref: String,
    /// Unit price at the moment of the first addition.
    pub unit_price: Money,
}

/// One distinct product selection.
///
/// Only the quantity can change after creation; name, image and unit price
/// are fixed when the line is first added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    id: ItemId,
    name: String,
    image_ref: String,
    unit_price: Money,
    quantity: Quantity,
}

impl CartItem {
    /// Create a line from a catalog candidate with the given quantity.
    #[must_use]
    pub fn new(item: NewItem, quantity: Quantity) -> Self {
        Self {
            id: item.id,
            name: item.name,
            image_ref: item.image_ref,
            unit_price: item.unit_price,
            quantity,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    /// Replace the quantity.
    pub const fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    /// Add one unit.
    pub const fn increment(&mut self) {
        self.quantity = self.quantity.incremented();
    }

    /// Add several units at once.
    pub const fn absorb(&mut self, quantity: Quantity) {
        self.quantity = self.quantity.saturating_add(quantity);
    }
}

/// The user's selection, one line per distinct id, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Append a line whose id is not yet present.
    ///
    /// Returns `false` and leaves the cart untouched if the id already exists.
    pub fn insert(&mut self, item: CartItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Drop the line with this id, if any.
    pub fn remove(&mut self, id: &ItemId) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == *id)?;
        Some(self.items.remove(index))
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Cart {
    type Item = CartItem;
    type IntoIter = std::vec::IntoIter<CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
