//! Product grid view models.
//!
//! Pure functions from products to display-ready data: discount percentage, star
//! row, formatted prices and the add-to-cart button state. No rendering happens
//! here; surfaces decide how to draw these.

use crate::{core::format::format_price, entities::Product};

/// Placeholder shown instead of an empty grid.
pub const NO_PRODUCTS: &str = "No products found.";

/// Placeholder shown while the catalog is being fetched.
pub const LOADING_PRODUCTS: &str = "Loading products...";

/// Grid message when the catalog could not be loaded at all.
pub const CATALOG_UNAVAILABLE: &str =
    "Unable to connect to server. Please make sure the backend is running.";

/// Grid message when the server answered but refused the catalog request.
pub const CATALOG_LOAD_FAILED: &str = "Failed to load products.";

/// Number of stars in a rating row.
pub const MAX_STARS: u8 = 5;

/// Everything a surface needs to draw one product card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    /// Product id, target of the add-to-cart action
    pub id: i64,
    /// Full title
    pub title: String,
    /// Image URL
    pub image: String,
    /// Selling price, e.g. `₹27,990`
    pub price: String,
    /// Struck-through list price, e.g. `₹34,990`
    pub original_price: String,
    /// Rounded discount percentage
    pub discount_percent: i64,
    /// Filled stars (`★`) in the rating row
    pub filled_stars: u8,
    /// Rating count shown next to the stars
    pub rating_count: u64,
    /// Whether the add-to-cart button is enabled
    pub in_stock: bool,
}

impl ProductCardView {
    /// Empty stars (`☆`) following the filled ones.
    #[must_use]
    pub const fn empty_stars(&self) -> u8 {
        MAX_STARS - self.filled_stars
    }

    /// Star glyph row, e.g. `★★★★☆`.
    #[must_use]
    pub fn stars(&self) -> String {
        format!(
            "{}{}",
            "★".repeat(usize::from(self.filled_stars)),
            "☆".repeat(usize::from(self.empty_stars()))
        )
    }

    /// Discount badge text, e.g. `20% off`.
    #[must_use]
    pub fn discount_label(&self) -> String {
        format!("{}% off", self.discount_percent)
    }

    /// Add-to-cart button caption.
    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        if self.in_stock {
            "Add to Cart"
        } else {
            "Out of Stock"
        }
    }
}

/// What the product grid shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductGridView {
    /// Catalog request in flight
    Loading,
    /// Catalog could not be loaded; the message explains why
    Unavailable {
        /// Explanation shown in place of the grid
        message: String,
    },
    /// Catalog loaded but empty (or the search matched nothing)
    Empty,
    /// One card per product, in catalog order
    Cards(Vec<ProductCardView>),
}

impl ProductGridView {
    /// Placeholder text, if the grid shows one instead of cards.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Loading => Some(LOADING_PRODUCTS),
            Self::Unavailable { message } => Some(message),
            Self::Empty => Some(NO_PRODUCTS),
            Self::Cards(_) => None,
        }
    }
}

/// Discount percentage `round((original - price) / original * 100)`.
///
/// Rounds half up, like the browser's `Math.round`. A non-positive original
/// price has no meaningful discount and yields 0.
#[must_use]
pub fn discount_percent(price: i64, original_price: i64) -> i64 {
    if original_price <= 0 {
        return 0;
    }
    // Prices are whole rupees well inside f64's exact integer range.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let percent = ((original_price - price) as f64 / original_price as f64)
        .mul_add(100.0, 0.5)
        .floor() as i64;
    percent
}

/// Filled star count for `rating`: `floor(rating)` clamped to `0..=5`.
#[must_use]
pub fn filled_stars(rating: f64) -> u8 {
    if rating.is_nan() {
        return 0;
    }
    // Clamped to [0, 5] before the cast.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = rating.floor().clamp(0.0, f64::from(MAX_STARS)) as u8;
    filled
}

/// Builds the card for one product.
#[must_use]
pub fn product_card(product: &Product) -> ProductCardView {
    ProductCardView {
        id: product.id,
        title: product.title.clone(),
        image: product.image.clone(),
        price: format_price(product.price),
        original_price: format_price(product.original_price),
        discount_percent: discount_percent(product.price, product.original_price),
        filled_stars: filled_stars(product.rating),
        rating_count: product.rating_count,
        in_stock: product.in_stock,
    }
}

/// A single product with the details the card leaves out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetailView {
    /// The same card the grid shows
    pub card: ProductCardView,
    /// Catalog category, if known
    pub category: Option<String>,
    /// Longer description, if any
    pub description: Option<String>,
}

/// Builds the detail view for one product.
#[must_use]
pub fn product_detail(product: &Product) -> ProductDetailView {
    ProductDetailView {
        card: product_card(product),
        category: product.category.clone(),
        description: product.description.clone(),
    }
}

/// Builds the grid for a product list; an empty list becomes the placeholder.
#[must_use]
pub fn product_grid(products: &[Product]) -> ProductGridView {
    if products.is_empty() {
        ProductGridView::Empty
    } else {
        ProductGridView::Cards(products.iter().map(product_card).collect())
    }
}
