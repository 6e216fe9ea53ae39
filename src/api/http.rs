//! HTTP store client.
//!
//! Thin `reqwest` wrapper over the store's REST endpoints. Non-2xx responses are
//! still decoded: the backend reports failures as `{success: false, message}` with a
//! 4xx status, and that message is what the user should see.

use crate::{
    api::{
        AckBody, ApiResponse, CartBody, CategoriesBody, HealthStatus, ProductBody,
        ProductFilter, ProductsBody, SearchBody, StoreApi, fallback,
    },
    entities::{CartEntry, CartItemRequest, Product},
    errors::{Error, Result},
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, trace};

/// Store API client speaking HTTP to `base_url` (e.g. `http://localhost:5000/api`).
#[derive(Debug, Clone)]
pub struct HttpStoreApi {
    http: Client,
    base_url: String,
}

impl HttpStoreApi {
    /// Builds a client with an overall per-request `timeout`.
    ///
    /// # Errors
    /// Returns `Error::Network` if the TLS backend cannot be initialised.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>> {
        let status = response.status();
        let bytes = response.bytes().await?;
        trace!(%status, len = bytes.len(), "Decoding store response");
        serde_json::from_slice(&bytes).map_err(Error::from)
    }
}

impl StoreApi for HttpStoreApi {
    #[instrument(skip(self))]
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        debug!("Sending request");
        let response = self
            .http
            .get(self.url("products"))
            .query(filter)
            .send()
            .await?;
        Self::decode::<ProductsBody>(response)
            .await?
            .into_result(fallback::LOAD_PRODUCTS)
            .map(|body| body.products)
    }

    #[instrument(skip(self))]
    async fn get_product(&self, product_id: i64) -> Result<Product> {
        debug!("Sending request");
        let response = self
            .http
            .get(self.url(&format!("products/{product_id}")))
            .send()
            .await?;
        Self::decode::<ProductBody>(response)
            .await?
            .into_result(fallback::LOAD_PRODUCT)?
            .product
            .ok_or(Error::ProductNotFound { id: product_id })
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<Product>> {
        debug!("Sending request");
        let response = self
            .http
            .get(self.url("search"))
            .query(&[("q", query)])
            .send()
            .await?;
        Self::decode::<SearchBody>(response)
            .await?
            .into_result(fallback::SEARCH)
            .map(|body| body.results)
    }

    #[instrument(skip(self))]
    async fn categories(&self) -> Result<Vec<String>> {
        debug!("Sending request");
        let response = self.http.get(self.url("categories")).send().await?;
        Self::decode::<CategoriesBody>(response)
            .await?
            .into_result(fallback::CATEGORIES)
            .map(|body| body.categories)
    }

    #[instrument(skip(self))]
    async fn get_cart(&self, user_id: &str) -> Result<Vec<CartEntry>> {
        debug!("Sending request");
        let response = self
            .http
            .get(self.url("cart"))
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        Self::decode::<CartBody>(response)
            .await?
            .into_result(fallback::LOAD_CART)
            .map(|body| body.cart)
    }

    #[instrument(skip(self))]
    async fn add_to_cart(&self, request: &CartItemRequest) -> Result<Option<String>> {
        debug!("Sending request");
        let response = self
            .http
            .post(self.url("cart"))
            .json(request)
            .send()
            .await?;
        let envelope = Self::decode::<AckBody>(response).await?;
        let message = envelope.message.clone();
        envelope.into_result(fallback::ADD_TO_CART).map(|_| message)
    }

    #[instrument(skip(self))]
    async fn update_cart_item(&self, request: &CartItemRequest) -> Result<Option<String>> {
        debug!("Sending request");
        let response = self
            .http
            .put(self.url("cart/update"))
            .json(request)
            .send()
            .await?;
        let envelope = Self::decode::<AckBody>(response).await?;
        let message = envelope.message.clone();
        envelope.into_result(fallback::UPDATE_CART).map(|_| message)
    }

    #[instrument(skip(self))]
    async fn remove_from_cart(&self, user_id: &str, product_id: i64) -> Result<Option<String>> {
        debug!("Sending request");
        let response = self
            .http
            .delete(self.url(&format!("cart/{product_id}")))
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        let envelope = Self::decode::<AckBody>(response).await?;
        let message = envelope.message.clone();
        envelope
            .into_result(fallback::REMOVE_FROM_CART)
            .map(|_| message)
    }

    #[instrument(skip(self))]
    async fn clear_cart(&self, user_id: &str) -> Result<Option<String>> {
        debug!("Sending request");
        let response = self
            .http
            .delete(self.url("cart"))
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        let envelope = Self::decode::<AckBody>(response).await?;
        let message = envelope.message.clone();
        envelope.into_result(fallback::CLEAR_CART).map(|_| message)
    }

    #[instrument(skip(self))]
    async fn health(&self) -> Result<HealthStatus> {
        debug!("Sending request");
        let response = self.http.get(self.url("health")).send().await?;
        Self::decode::<HealthStatus>(response)
            .await?
            .into_result(fallback::HEALTH)
    }
}
