//! In-process store API.
//!
//! Serves a static catalog and keeps per-user carts in memory, answering exactly as
//! the HTTP backend would (same success flags and messages). Used for `--offline`
//! runs and as the backend in tests.

use crate::{
    api::{HealthStatus, ProductFilter, StoreApi},
    core::search::filter_by_title,
    entities::{CartEntry, CartItemRequest, Product},
    errors::{Error, Result},
};
use chrono::Local;
use std::{
    collections::{BTreeSet, HashMap},
    sync::atomic::{AtomicBool, Ordering},
};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// A cart line as the backend stores it: a reference to a product plus quantity.
#[derive(Debug, Clone)]
struct StoredItem {
    product_id: i64,
    quantity: i64,
    added_at: String,
}

/// Store API backed by in-memory collections.
#[derive(Debug, Default)]
pub struct InMemoryStoreApi {
    products: RwLock<Vec<Product>>,
    carts: RwLock<HashMap<String, Vec<StoredItem>>>,
    offline: AtomicBool,
}

impl InMemoryStoreApi {
    /// Creates a store serving `products` with no carts.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        info!("In-memory store seeded with {} products", products.len());
        Self {
            products: RwLock::new(products),
            carts: RwLock::new(HashMap::new()),
            offline: AtomicBool::new(false),
        }
    }

    /// Simulates the backend becoming unreachable (or reachable again). While
    /// offline every call fails with `Error::Network`.
    pub fn set_offline(&self, offline: bool) {
        warn!(offline, "In-memory store availability changed");
        self.offline.store(offline, Ordering::Relaxed);
    }

    /// Replaces the served catalog.
    pub async fn replace_products(&self, products: Vec<Product>) {
        *self.products.write().await = products;
    }

    fn ensure_online(&self) -> Result<()> {
        if self.offline.load(Ordering::Relaxed) {
            return Err(Error::Network {
                message: "store is offline".to_string(),
            });
        }
        Ok(())
    }

    async fn find_product(&self, product_id: i64) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
    }
}

fn unsuccessful(message: &str) -> Error {
    Error::Unsuccessful {
        message: message.to_string(),
    }
}

impl StoreApi for InMemoryStoreApi {
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        self.ensure_online()?;
        let products = self.products.read().await;
        Ok(products.iter().filter(|p| filter.matches(p)).cloned().collect())
    }

    async fn get_product(&self, product_id: i64) -> Result<Product> {
        self.ensure_online()?;
        self.find_product(product_id)
            .await
            .ok_or_else(|| unsuccessful("Product not found"))
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>> {
        self.ensure_online()?;
        if query.trim().is_empty() {
            return Err(unsuccessful("Search query is required"));
        }
        let products = self.products.read().await;
        Ok(filter_by_title(&products, query))
    }

    async fn categories(&self) -> Result<Vec<String>> {
        self.ensure_online()?;
        let products = self.products.read().await;
        let categories: BTreeSet<String> = products
            .iter()
            .map(|p| p.category.clone().unwrap_or_else(|| "Other".to_string()))
            .collect();
        Ok(categories.into_iter().collect())
    }

    async fn get_cart(&self, user_id: &str) -> Result<Vec<CartEntry>> {
        self.ensure_online()?;
        let mut carts = self.carts.write().await;
        let items = carts.entry(user_id.to_string()).or_default();
        let products = self.products.read().await;

        Ok(items
            .iter()
            .filter_map(|item| {
                let product = products.iter().find(|p| p.id == item.product_id)?;
                Some(CartEntry::Joined {
                    product_id: item.product_id,
                    quantity: u32::try_from(item.quantity).ok(),
                    added_at: Some(item.added_at.clone()),
                    product: Some(product.clone()),
                })
            })
            .collect())
    }

    async fn add_to_cart(&self, request: &CartItemRequest) -> Result<Option<String>> {
        self.ensure_online()?;
        if self.find_product(request.product_id).await.is_none() {
            return Err(unsuccessful("Product not found"));
        }

        let mut carts = self.carts.write().await;
        let items = carts.entry(request.user_id.clone()).or_default();
        if let Some(existing) = items.iter_mut().find(|i| i.product_id == request.product_id) {
            existing.quantity += request.quantity;
        } else {
            items.push(StoredItem {
                product_id: request.product_id,
                quantity: request.quantity,
                added_at: Local::now()
                    .naive_local()
                    .format("%Y-%m-%dT%H:%M:%S%.f")
                    .to_string(),
            });
        }
        debug!(user_id = %request.user_id, product_id = request.product_id, "Item added to cart");
        Ok(Some("Item added to cart".to_string()))
    }

    async fn update_cart_item(&self, request: &CartItemRequest) -> Result<Option<String>> {
        self.ensure_online()?;
        let mut carts = self.carts.write().await;
        let items = carts
            .get_mut(&request.user_id)
            .ok_or_else(|| unsuccessful("Cart not found"))?;
        let Some(position) = items.iter().position(|i| i.product_id == request.product_id) else {
            return Err(unsuccessful("Item not found in cart"));
        };

        if request.quantity <= 0 {
            items.remove(position);
        } else {
            items[position].quantity = request.quantity;
        }
        Ok(Some("Cart updated".to_string()))
    }

    async fn remove_from_cart(&self, user_id: &str, product_id: i64) -> Result<Option<String>> {
        self.ensure_online()?;
        let mut carts = self.carts.write().await;
        let items = carts
            .get_mut(user_id)
            .ok_or_else(|| unsuccessful("Cart not found"))?;
        items.retain(|i| i.product_id != product_id);
        Ok(Some("Item removed from cart".to_string()))
    }

    async fn clear_cart(&self, user_id: &str) -> Result<Option<String>> {
        self.ensure_online()?;
        if let Some(items) = self.carts.write().await.get_mut(user_id) {
            items.clear();
        }
        Ok(Some("Cart cleared".to_string()))
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.ensure_online()?;
        Ok(HealthStatus {
            status: "healthy".to_string(),
            products_count: self.products.read().await.len() as u64,
            active_carts: self.carts.read().await.len() as u64,
        })
    }
}
