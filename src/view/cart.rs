//! Cart panel and badge view models.

use crate::{
    core::{CartStore, format::format_price},
    entities::CartLine,
};

/// Placeholder shown instead of an empty cart list.
pub const EMPTY_CART: &str = "Your cart is empty";

/// One row of the cart panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRowView {
    /// Product id, target of the remove action
    pub product_id: i64,
    /// Product title
    pub title: String,
    /// Image URL
    pub image: String,
    /// Unit price and quantity, e.g. `₹27,990 x 2`
    pub price_line: String,
    /// Units on this line
    pub quantity: u32,
}

/// The whole cart panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanelView {
    /// Rows in cart order; empty when the cart is empty
    pub rows: Vec<CartRowView>,
    /// Formatted total without currency symbol, `"0"` when empty
    pub total: String,
}

impl CartPanelView {
    /// Placeholder text, if the panel shows one instead of rows.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(EMPTY_CART)
    }
}

/// The item count bubble on the cart icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeView {
    /// Sum of quantities
    pub count: u64,
}

impl BadgeView {
    /// The badge is hidden when the cart holds nothing.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.count > 0
    }
}

fn cart_row(line: &CartLine) -> CartRowView {
    CartRowView {
        product_id: line.product_id(),
        title: line.product.title.clone(),
        image: line.product.image.clone(),
        price_line: format!("{} x {}", format_price(line.product.price), line.quantity),
        quantity: line.quantity,
    }
}

/// Builds the cart panel from the current cart.
#[must_use]
pub fn cart_panel(cart: &CartStore) -> CartPanelView {
    CartPanelView {
        rows: cart.lines().iter().map(cart_row).collect(),
        total: cart.formatted_total(),
    }
}

/// Builds the badge from the current cart.
#[must_use]
pub fn badge(cart: &CartStore) -> BadgeView {
    BadgeView {
        count: cart.count(),
    }
}
