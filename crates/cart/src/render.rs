//! Projection of a cart into display descriptors.
//!
//! Rendering is a pure function of the cart: there is no retained output to
//! patch, so every call rebuilds the whole view and two renders of the same
//! cart are identical.

use askama::Template;
use serde::Serialize;

use cart_state_core::{Cart, CartItem, Money};

use crate::aggregate;

/// Currency prefix used when none is configured.
pub const DEFAULT_CURRENCY_PREFIX: &str = "R$ ";

/// Fixed money formatting: prefix, two fractional digits, comma separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    prefix: String,
}

impl MoneyFormat {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Format an amount, e.g. `R$ 1234,56`.
    #[must_use]
    pub fn format(&self, amount: Money) -> String {
        let fixed = amount.to_decimal().to_string().replace('.', ",");
        format!("{}{fixed}", self.prefix)
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_PREFIX)
    }
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: String,
    pub name: String,
    pub image_ref: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Rendered aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub count: u64,
    pub total_display: String,
}

/// The full view re-emitted after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub rows: Vec<RowView>,
    pub summary: SummaryView,
}

#[derive(Template)]
#[template(path = "cart_table.html")]
struct CartTableTemplate<'a> {
    view: &'a CartView,
}

impl CartView {
    /// Render the line-item table as HTML.
    ///
    /// # Errors
    ///
    /// Returns `askama::Error` if template rendering fails.
    pub fn to_html(&self) -> Result<String, askama::Error> {
        CartTableTemplate { view: self }.render()
    }
}

/// Stateless renderer holding only the formatting convention.
#[derive(Debug, Clone, Default)]
pub struct ViewRenderer {
    money: MoneyFormat,
}

impl ViewRenderer {
    #[must_use]
    pub const fn new(money: MoneyFormat) -> Self {
        Self { money }
    }

    /// Lazily project each line, in cart order.
    ///
    /// The iterator borrows the cart; calling this again restarts from the
    /// first line.
    pub fn render_rows<'a>(&'a self, cart: &'a Cart) -> impl Iterator<Item = RowView> + 'a {
        cart.iter().map(|item| self.row(item))
    }

    /// Item count and formatted total.
    #[must_use]
    pub fn render_summary(&self, cart: &Cart) -> SummaryView {
        SummaryView {
            count: aggregate::total_count(cart),
            total_display: self.money.format(aggregate::total_value(cart)),
        }
    }

    /// Rows and summary together.
    #[must_use]
    pub fn render(&self, cart: &Cart) -> CartView {
        CartView {
            rows: self.render_rows(cart).collect(),
            summary: self.render_summary(cart),
        }
    }

    fn row(&self, item: &CartItem) -> RowView {
        RowView {
            id: item.id().to_string(),
            name: item.name().to_owned(),
            image_ref: item.image_ref().to_owned(),
            unit_price: self.money.format(item.unit_price()),
            quantity: item.quantity().get(),
            line_total: self.money.format(item.line_total()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cart_state_core::{ItemId, NewItem, Quantity};

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.insert(CartItem::new(
            NewItem {
                id: ItemId::parse("A").unwrap(),
                name: "Widget".to_string(),
                image_ref: "w.png".to_string(),
                unit_price: Money::from_minor(1050),
            },
            Quantity::clamped(3),
        ));
        cart.insert(CartItem::new(
            NewItem {
                id: ItemId::parse("B").unwrap(),
                name: "Gadget".to_string(),
                image_ref: "g.png".to_string(),
                unit_price: Money::from_minor(123_456),
            },
            Quantity::ONE,
        ));
        cart
    }

    #[test]
    fn test_money_format() {
        let format = MoneyFormat::default();
        assert_eq!(format.format(Money::ZERO), "R$ 0,00");
        assert_eq!(format.format(Money::from_minor(5)), "R$ 0,05");
        assert_eq!(format.format(Money::from_minor(123_456)), "R$ 1234,56");
        assert_eq!(MoneyFormat::new("$").format(Money::from_minor(1999)), "$19,99");
    }

    #[test]
    fn test_formatted_total_reparses_without_drift() {
        let format = MoneyFormat::default();
        for cents in [0, 1, 10, 99, 1050, 123_456, 9_999_999] {
            let amount = Money::from_minor(cents);
            assert_eq!(Money::parse_display(&format.format(amount)).unwrap(), amount);
        }
    }

    #[test]
    fn test_render_rows() {
        let renderer = ViewRenderer::default();
        let cart = cart();
        let rows: Vec<RowView> = renderer.render_rows(&cart).collect();

        assert_eq!(
            rows.first().unwrap(),
            &RowView {
                id: "A".to_string(),
                name: "Widget".to_string(),
                image_ref: "w.png".to_string(),
                unit_price: "R$ 10,50".to_string(),
                quantity: 3,
                line_total: "R$ 31,50".to_string(),
            }
        );
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_render_rows_is_restartable() {
        let renderer = ViewRenderer::default();
        let cart = cart();
        let first: Vec<RowView> = renderer.render_rows(&cart).collect();
        let second: Vec<RowView> = renderer.render_rows(&cart).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_summary() {
        let renderer = ViewRenderer::default();
        assert_eq!(
            renderer.render_summary(&cart()),
            SummaryView {
                count: 4,
                total_display: "R$ 1266,06".to_string(),
            }
        );
        assert_eq!(
            renderer.render_summary(&Cart::new()),
            SummaryView {
                count: 0,
                total_display: "R$ 0,00".to_string(),
            }
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = ViewRenderer::default();
        let cart = cart();
        assert_eq!(renderer.render(&cart), renderer.render(&cart));
    }

    #[test]
    fn test_to_html_contains_rows_and_summary() {
        let html = ViewRenderer::default().render(&cart()).to_html().unwrap();
        assert!(html.contains("data-id=\"A\""));
        assert!(html.contains("value=\"3\""));
        assert!(html.contains("R$ 31,50"));
        assert!(html.contains("R$ 1266,06"));
        assert!(html.contains("w.png"));
    }

    #[test]
    fn test_to_html_escapes_names() {
        let mut cart = Cart::new();
        cart.insert(CartItem::new(
            NewItem {
                id: ItemId::parse("X").unwrap(),
                name: "<script>alert(1)</script>".to_string(),
                image_ref: "x.png".to_string(),
                unit_price: Money::ZERO,
            },
            Quantity::ONE,
        ));
        let html = ViewRenderer::default().render(&cart).to_html().unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_cart_html() {
        let html = ViewRenderer::default().render(&Cart::new()).to_html().unwrap();
        assert!(!html.contains("data-id"));
        assert!(html.contains("R$ 0,00"));
    }
}
