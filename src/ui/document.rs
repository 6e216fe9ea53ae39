//! In-memory HTML document.
//!
//! Mirrors the storefront page's containers (`productsGrid`, `cartItems`,
//! `cartTotal`, the `.cart-count` badge, `cartModal`, notifications). Each update
//! replaces a region's inner markup, the way the browser page assigned `innerHTML`.

use crate::{
    errors::Result,
    ui::{ModalState, Surface, Toast},
    view::{BadgeView, CartPanelView, ProductDetailView, ProductGridView, html},
};

/// Rendered markup of every page region
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    products_grid: String,
    product_detail: String,
    cart_items: String,
    cart_total: String,
    badge: Option<BadgeView>,
    modal: ModalState,
    notifications: Vec<String>,
    toasts: Vec<Toast>,
    categories: Vec<String>,
}

impl HtmlDocument {
    /// Creates a blank document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inner markup of `productsGrid`.
    #[must_use]
    pub fn products_grid(&self) -> &str {
        &self.products_grid
    }

    /// Markup of the product detail panel; empty until a product is shown.
    #[must_use]
    pub fn product_detail(&self) -> &str {
        &self.product_detail
    }

    /// Inner markup of `cartItems`.
    #[must_use]
    pub fn cart_items(&self) -> &str {
        &self.cart_items
    }

    /// Text of `cartTotal`.
    #[must_use]
    pub fn cart_total(&self) -> &str {
        &self.cart_total
    }

    /// Badge text, or `None` while the badge is hidden.
    #[must_use]
    pub fn badge_text(&self) -> Option<String> {
        self.badge
            .filter(|b| b.is_visible())
            .map(|b| b.count.to_string())
    }

    /// Whether the cart modal is displayed.
    #[must_use]
    pub const fn modal(&self) -> ModalState {
        self.modal
    }

    /// Markup of each notification element, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Notification messages as plain text, oldest first.
    #[must_use]
    pub fn toast_messages(&self) -> Vec<&str> {
        self.toasts.iter().map(|t| t.message.as_str()).collect()
    }

    /// The toasts last drawn.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Categories last listed.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

impl Surface for HtmlDocument {
    fn show_products(&mut self, grid: &ProductGridView) -> Result<()> {
        self.products_grid = html::product_grid(grid);
        Ok(())
    }

    fn show_product_detail(&mut self, detail: &ProductDetailView) -> Result<()> {
        self.product_detail = html::product_detail(detail);
        Ok(())
    }

    fn show_cart(&mut self, panel: &CartPanelView) -> Result<()> {
        self.cart_items = html::cart_items(panel);
        self.cart_total.clone_from(&panel.total);
        Ok(())
    }

    fn show_badge(&mut self, badge: BadgeView) -> Result<()> {
        self.badge = Some(badge);
        Ok(())
    }

    fn show_modal(&mut self, state: ModalState) -> Result<()> {
        self.modal = state;
        Ok(())
    }

    fn show_toasts(&mut self, toasts: &[Toast]) -> Result<()> {
        self.notifications = toasts.iter().map(html::toast).collect();
        self.toasts = toasts.to_vec();
        Ok(())
    }

    fn show_categories(&mut self, categories: &[String]) -> Result<()> {
        self.categories = categories.to_vec();
        Ok(())
    }
}
