//! Product entity - Represents one purchasable item in the catalog.
//!
//! Products are owned by the store API; the client only ever reads them. Prices are
//! whole rupees with no minor unit. JSON field names follow the API's camelCase.

use serde::{Deserialize, Serialize};

/// Catalog product as served by the store API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable identifier
    pub id: i64,
    /// Display title (e.g., "Sony WH-1000XM5 Wireless Headphones")
    pub title: String,
    /// Image URL shown on the product card
    #[serde(default)]
    pub image: String,
    /// Selling price in whole rupees
    pub price: i64,
    /// List price in whole rupees, never below `price`
    pub original_price: i64,
    /// Average rating in [0, 5]
    #[serde(default)]
    pub rating: f64,
    /// Number of ratings behind `rating`
    #[serde(default)]
    pub rating_count: u64,
    /// Whether the product can be added to the cart
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Catalog category (e.g., "Mobiles")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Longer description, not shown on the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

const fn default_in_stock() -> bool {
    true
}

impl Product {
    /// True when `query` (already lowercased) occurs anywhere in the title,
    /// ignoring case.
    #[must_use]
    pub fn title_contains(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
    }
}
