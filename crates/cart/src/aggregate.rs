//! Summary aggregates derived from a whole cart.

use cart_state_core::{Cart, Money};

/// Sum of all line quantities. Zero for an empty cart.
#[must_use]
pub fn total_count(cart: &Cart) -> u64 {
    cart.iter().map(|item| u64::from(item.quantity().get())).sum()
}

/// Sum of unit price times quantity over all lines, in minor units.
#[must_use]
pub fn total_value(cart: &Cart) -> Money {
    cart.iter().map(cart_state_core::CartItem::line_total).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cart_state_core::{CartItem, ItemId, NewItem, Quantity};

    fn line(id: &str, cents: i64, quantity: i64) -> CartItem {
        CartItem::new(
            NewItem {
                id: ItemId::parse(id).unwrap(),
                name: id.to_string(),
                image_ref: String::new(),
                unit_price: Money::from_minor(cents),
            },
            Quantity::clamped(quantity),
        )
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert_eq!(total_count(&cart), 0);
        assert_eq!(total_value(&cart), Money::ZERO);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.insert(line("A", 1000, 2));
        cart.insert(line("B", 1999, 3));
        cart.insert(line("C", 1, 1));

        assert_eq!(total_count(&cart), 6);
        assert_eq!(total_value(&cart), Money::from_minor(2000 + 5997 + 1));
    }

    #[test]
    fn test_count_does_not_overflow_u32() {
        let mut cart = Cart::new();
        cart.insert(line("A", 1, i64::from(u32::MAX)));
        cart.insert(line("B", 1, i64::from(u32::MAX)));
        assert_eq!(total_count(&cart), 2 * u64::from(u32::MAX));
    }
}
