//! Store API - The REST contract the storefront consumes.
//!
//! [`StoreApi`] is the single seam between the application and its data. Two
//! implementations exist: [`HttpStoreApi`] talks to the real backend over HTTP, and
//! [`InMemoryStoreApi`] serves a static catalog in process with the same semantics.
//! Every response carries a `success` flag; `success: false` becomes
//! [`Error::Unsuccessful`](crate::errors::Error::Unsuccessful) with the server's
//! message, or an operation-specific fallback when the server sent none.

#![allow(async_fn_in_trait)]

/// HTTP implementation backed by `reqwest`
pub mod http;
/// In-process implementation over a static catalog
pub mod memory;

pub use http::HttpStoreApi;
pub use memory::InMemoryStoreApi;

use crate::{
    entities::{CartEntry, CartItemRequest, Product},
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};

/// Fallback messages used when an unsuccessful response carries no `message`.
pub mod fallback {
    /// `GET /api/products`
    pub const LOAD_PRODUCTS: &str = "Failed to load products";
    /// `GET /api/products/{id}`
    pub const LOAD_PRODUCT: &str = "Product not found";
    /// `GET /api/cart`
    pub const LOAD_CART: &str = "Failed to load cart";
    /// `POST /api/cart`
    pub const ADD_TO_CART: &str = "Failed to add to cart";
    /// `PUT /api/cart/update`
    pub const UPDATE_CART: &str = "Failed to update cart";
    /// `DELETE /api/cart/{id}`
    pub const REMOVE_FROM_CART: &str = "Failed to remove from cart";
    /// `DELETE /api/cart`
    pub const CLEAR_CART: &str = "Failed to clear cart";
    /// `GET /api/search`
    pub const SEARCH: &str = "Search failed";
    /// `GET /api/categories`
    pub const CATEGORIES: &str = "Failed to load categories";
    /// `GET /api/health`
    pub const HEALTH: &str = "Health check failed";
}

/// Common response envelope: a `success` flag, an optional `message`, and the
/// endpoint-specific body flattened alongside.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the server considers the request successful
    pub success: bool,
    /// Human-readable status, mostly present on failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Endpoint-specific payload
    #[serde(flatten)]
    pub body: T,
}

impl<T> ApiResponse<T> {
    /// Wraps a successful body.
    pub const fn ok(body: T) -> Self {
        Self {
            success: true,
            message: None,
            body,
        }
    }

    /// Converts the envelope into the body, or [`Error::Unsuccessful`] when
    /// `success` is false.
    ///
    /// # Errors
    /// Returns `Error::Unsuccessful` carrying the server message or `fallback`.
    pub fn into_result(self, fallback: &str) -> Result<T> {
        if self.success {
            Ok(self.body)
        } else {
            Err(Error::unsuccessful(self.message, fallback))
        }
    }
}

/// Body of `GET /api/products`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProductsBody {
    /// Products in display order
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Body of `GET /api/products/{id}`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProductBody {
    /// The requested product
    #[serde(default)]
    pub product: Option<Product>,
}

/// Body of `GET /api/search`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchBody {
    /// Matching products
    #[serde(default)]
    pub results: Vec<Product>,
}

/// Body of `GET /api/cart`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CartBody {
    /// Cart entries in insertion order
    #[serde(default)]
    pub cart: Vec<CartEntry>,
    /// Server-computed total, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

/// Body of the cart mutation endpoints; everything of interest is in the envelope.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AckBody {}

/// Body of `GET /api/categories`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CategoriesBody {
    /// Sorted category names
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Body of `GET /api/health`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthStatus {
    /// Free-form status, `"healthy"` when all is well
    #[serde(default)]
    pub status: String,
    /// Products the server knows about
    #[serde(default)]
    pub products_count: u64,
    /// Carts the server is holding
    #[serde(default)]
    pub active_carts: u64,
}

/// Server-side filters accepted by `GET /api/products`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductFilter {
    /// Exact category match, ignoring case
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Inclusive lower price bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    /// Inclusive upper price bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
}

impl ProductFilter {
    /// Filter matching only `category`.
    #[must_use]
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Filter matching prices in `min..=max`; either bound may be open.
    #[must_use]
    pub fn price_range(min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            min_price: min,
            max_price: max,
            ..Self::default()
        }
    }

    /// True when no filter is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.category.is_none() && self.min_price.is_none() && self.max_price.is_none()
    }

    /// True when `product` passes every set filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            let product_category = product.category.as_deref().unwrap_or_default();
            if !product_category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        !self.max_price.is_some_and(|max| product.price > max)
    }
}

/// The REST contract consumed by the storefront.
pub trait StoreApi {
    /// `GET /api/products`, optionally filtered.
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>>;

    /// `GET /api/products/{id}`.
    async fn get_product(&self, product_id: i64) -> Result<Product>;

    /// `GET /api/search?q=`; `query` must be non-empty.
    async fn search(&self, query: &str) -> Result<Vec<Product>>;

    /// `GET /api/categories`.
    async fn categories(&self) -> Result<Vec<String>>;

    /// `GET /api/cart?user_id=`.
    async fn get_cart(&self, user_id: &str) -> Result<Vec<CartEntry>>;

    /// `POST /api/cart`; adds `quantity` units, merging into an existing line.
    async fn add_to_cart(&self, request: &CartItemRequest) -> Result<Option<String>>;

    /// `PUT /api/cart/update`; sets the quantity, removing the line when it is ≤ 0.
    async fn update_cart_item(&self, request: &CartItemRequest) -> Result<Option<String>>;

    /// `DELETE /api/cart/{product_id}?user_id=`.
    async fn remove_from_cart(&self, user_id: &str, product_id: i64) -> Result<Option<String>>;

    /// `DELETE /api/cart?user_id=`.
    async fn clear_cart(&self, user_id: &str) -> Result<Option<String>>;

    /// `GET /api/health`.
    async fn health(&self) -> Result<HealthStatus>;
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_unsuccessful_envelope_uses_server_message() {
        let json = r#"{"success": false, "message": "Product not found"}"#;
        let response: ApiResponse<AckBody> = serde_json::from_str(json).unwrap();

        let err = response.into_result(fallback::ADD_TO_CART).unwrap_err();
        assert!(matches!(err, Error::Unsuccessful { ref message } if message == "Product not found"));
    }

    #[test]
    fn test_unsuccessful_envelope_without_message_uses_fallback() {
        let json = r#"{"success": false}"#;
        let response: ApiResponse<SearchBody> = serde_json::from_str(json).unwrap();

        let err = response.into_result(fallback::SEARCH).unwrap_err();
        assert!(matches!(err, Error::Unsuccessful { ref message } if message == "Search failed"));
    }

    #[test]
    fn test_cart_envelope_decodes_both_entry_shapes() {
        let json = r#"{
            "success": true,
            "total": 300,
            "count": 2,
            "cart": [
                {"productId": 1, "quantity": 2, "product": {"id": 1, "title": "A", "price": 100, "originalPrice": 100}},
                {"id": 2, "title": "B", "price": 100, "originalPrice": 120}
            ]
        }"#;
        let response: ApiResponse<CartBody> = serde_json::from_str(json).unwrap();
        let body = response.into_result(fallback::LOAD_CART).unwrap();

        assert_eq!(body.cart.len(), 2);
        assert_eq!(body.total, Some(300));
    }

    #[test]
    fn test_product_filter_matches() {
        let products = sample_catalog();
        let filter = ProductFilter {
            category: Some("electronics".to_string()),
            max_price: Some(30000),
            ..ProductFilter::default()
        };

        let ids: Vec<i64> = products
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3, 7]);
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let products = sample_catalog();
        let filter = ProductFilter::price_range(Some(24_900), Some(89_990));

        let ids: Vec<i64> = products
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3, 5, 7]);
        assert!(!filter.is_empty());
        assert!(ProductFilter::price_range(None, None).is_empty());
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let products = sample_catalog();
        assert!(products.iter().all(|p| ProductFilter::default().matches(p)));
    }
}
