//! Application root - owns all storefront state and reacts to user events.
//!
//! `Storefront` holds the catalog, the cart, the modal state and the notifier, and
//! is the only place they change. Every cart mutation goes to the store API first
//! and the cart is then reloaded from the server; the local cart is a read-through
//! cache that is kept when a reload fails. Network and unsuccessful responses are
//! turned into toasts here and never propagate further. The only errors a handler
//! returns are surface (terminal I/O) failures.

/// Text commands for the interactive terminal
pub mod commands;

pub use commands::{Command, parse_command};

use crate::{
    api::{ProductFilter, StoreApi},
    config::AppConfig,
    core::{Catalog, CartStore, SearchQuery, format::truncate_chars},
    entities::CartItemRequest,
    errors::{Error, Result},
    ui::{ModalEvent, ModalState, Notifier, Surface, ToastKind},
    view::{
        self, ProductGridView,
        product::{CATALOG_LOAD_FAILED, CATALOG_UNAVAILABLE},
    },
};
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Characters of a product title quoted in the add-to-cart toast.
pub const TOAST_TITLE_CHARS: usize = 30;

/// Every user interaction the storefront understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Search box submitted with raw input
    Search(String),
    /// Show only one category (supplementary browse filter)
    BrowseCategory(String),
    /// Show only products priced within `min..=max`; a missing bound is open
    BrowsePriceRange {
        /// Inclusive lower bound
        min: Option<i64>,
        /// Inclusive upper bound
        max: Option<i64>,
    },
    /// List the catalog's categories
    ListCategories,
    /// Open one product's detail view
    ShowProduct(i64),
    /// "Add to Cart" on a product card
    AddToCart(i64),
    /// "Remove" on a cart row
    RemoveFromCart(i64),
    /// Quantity edited on a cart row
    SetQuantity(i64, i64),
    /// Empty the whole cart
    ClearCart,
    /// Cart modal interaction
    Modal(ModalEvent),
    /// "Checkout" in the cart panel
    Checkout,
    /// "Login" in the header
    Login,
}

/// The storefront application root.
pub struct Storefront<A: StoreApi, S: Surface> {
    api: A,
    surface: S,
    user_id: String,
    catalog: Catalog,
    cart: CartStore,
    modal: ModalState,
    notifier: Notifier,
}

impl<A: StoreApi, S: Surface> Storefront<A, S> {
    /// Wires the storefront to its API and surface. Nothing is fetched until
    /// [`Self::start`].
    pub fn new(api: A, surface: S, config: &AppConfig) -> Self {
        Self {
            api,
            surface,
            user_id: config.user_id.clone(),
            catalog: Catalog::default(),
            cart: CartStore::new(),
            modal: ModalState::Closed,
            notifier: Notifier::new(config.toast_policy),
        }
    }

    /// Page-load sequence: check health, load the catalog, load the cart, draw
    /// the badge.
    ///
    /// # Errors
    /// Returns an error only if the surface fails to draw.
    #[instrument(skip(self), fields(user = %self.user_id))]
    pub async fn start(&mut self) -> Result<()> {
        match self.api.health().await {
            Ok(health) => info!(
                status = %health.status,
                products = health.products_count,
                carts = health.active_carts,
                "Store API reachable"
            ),
            Err(e) => warn!("Store API health check failed: {e}"),
        }
        self.load_products().await?;
        self.load_cart().await;
        self.render_badge()?;
        self.render_cart()
    }

    /// Dispatches one user event.
    ///
    /// # Errors
    /// Returns an error only if the surface fails to draw.
    pub async fn handle(&mut self, event: UiEvent) -> Result<()> {
        debug!(?event, "Handling UI event");
        match event {
            UiEvent::Search(raw) => self.search(&raw).await,
            UiEvent::BrowseCategory(category) => self.browse_category(&category).await,
            UiEvent::BrowsePriceRange { min, max } => {
                self.fetch_products(ProductFilter::price_range(min, max))
                    .await
            }
            UiEvent::ListCategories => self.list_categories().await,
            UiEvent::ShowProduct(id) => self.show_product(id).await,
            UiEvent::AddToCart(id) => self.add_to_cart(id).await,
            UiEvent::RemoveFromCart(id) => self.remove_from_cart(id).await,
            UiEvent::SetQuantity(id, quantity) => self.set_quantity(id, quantity).await,
            UiEvent::ClearCart => self.clear_cart().await,
            UiEvent::Modal(event) => self.modal_event(event).await,
            UiEvent::Checkout => self.checkout(),
            UiEvent::Login => self.notify("Login functionality coming soon!", ToastKind::Success),
        }
    }

    /// Fetches the full catalog and redraws the grid. On failure the grid shows a
    /// placeholder and an error toast is shown: the server's refusal message when it
    /// answered `success: false`, the connection hint when it could not be reached.
    ///
    /// # Errors
    /// Returns an error only if the surface fails to draw.
    pub async fn load_products(&mut self) -> Result<()> {
        self.fetch_products(ProductFilter::default()).await
    }

    async fn fetch_products(&mut self, filter: ProductFilter) -> Result<()> {
        self.surface.show_products(&ProductGridView::Loading)?;
        match self.api.list_products(&filter).await {
            Ok(products) => {
                info!("Loaded {} products", products.len());
                self.catalog.replace(products);
                self.render_products()
            }
            Err(e) => {
                error!("Error loading products: {e}");
                self.catalog.replace(Vec::new());
                let (placeholder, toast) = match e {
                    Error::Unsuccessful { message } => (CATALOG_LOAD_FAILED, message),
                    _ => (CATALOG_UNAVAILABLE, CATALOG_UNAVAILABLE.to_string()),
                };
                self.surface.show_products(&ProductGridView::Unavailable {
                    message: placeholder.to_string(),
                })?;
                self.notify(toast, ToastKind::Error)
            }
        }
    }

    /// Runs a search. Blank input restores the full catalog; otherwise the server's
    /// results replace the grid.
    ///
    /// # Errors
    /// Returns an error only if the surface fails to draw.
    pub async fn search(&mut self, raw: &str) -> Result<()> {
        let term = match SearchQuery::parse(raw) {
            SearchQuery::All => return self.load_products().await,
            SearchQuery::Term(term) => term,
        };

        self.surface.show_products(&ProductGridView::Loading)?;
        match self.api.search(&term).await {
            Ok(results) => {
                debug!(%term, hits = results.len(), "Search finished");
                self.catalog.replace(results);
                self.render_products()
            }
            Err(e) => {
                error!("Error searching products: {e}");
                self.render_products()?;
                self.report_failure(e, "Unable to search products. Please try again.")
            }
        }
    }

    async fn browse_category(&mut self, category: &str) -> Result<()> {
        let category = category.trim();
        if category.is_empty() {
            return self.load_products().await;
        }
        self.fetch_products(ProductFilter::category(category)).await
    }

    /// Fetches one product and shows its detail view.
    ///
    /// # Errors
    /// Returns an error only if the surface fails to draw.
    #[instrument(skip(self))]
    pub async fn show_product(&mut self, product_id: i64) -> Result<()> {
        match self.api.get_product(product_id).await {
            Ok(product) => self
                .surface
                .show_product_detail(&view::product_detail(&product)),
            Err(e) => {
                error!("Error loading product: {e}");
                self.report_failure(e, "Unable to load product. Please try again.")
            }
        }
    }

    async fn list_categories(&mut self) -> Result<()> {
        match self.api.categories().await {
            Ok(categories) => self.surface.show_categories(&categories),
            Err(e) => {
                error!("Error loading categories: {e}");
                self.report_failure(e, "Unable to load categories. Please try again.")
            }
        }
    }

    /// Reloads the cart from the server. Any failure keeps the last local cart.
    pub async fn load_cart(&mut self) {
        match self.api.get_cart(&self.user_id).await {
            Ok(entries) => {
                self.cart.replace(entries);
                debug!(lines = self.cart.lines().len(), count = self.cart.count(), "Cart loaded");
            }
            Err(e) => warn!("Error loading cart, keeping local copy: {e}"),
        }
    }

    /// Adds one unit of `product_id`. Products missing from the current catalog are
    /// ignored.
    ///
    /// # Errors
    /// Returns an error only if the surface fails to draw.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&mut self, product_id: i64) -> Result<()> {
        let Some(product) = self.catalog.find(product_id) else {
            debug!("Product not in current catalog, ignoring add");
            return Ok(());
        };
        let title = truncate_chars(&product.title, TOAST_TITLE_CHARS).to_string();

        let request = self.cart_request(product_id, 1);
        match self.api.add_to_cart(&request).await {
            Ok(_) => {
                self.notify(format!("{title}... added to cart!"), ToastKind::Success)?;
                self.load_cart().await;
                self.render_badge()?;
                if self.modal.is_open() {
                    self.render_cart()?;
                }
                Ok(())
            }
            Err(e) => {
                error!("Error adding to cart: {e}");
                self.report_failure(e, "Unable to add to cart. Please try again.")
            }
        }
    }

    /// Removes the line for `product_id`.
    ///
    /// # Errors
    /// Returns an error only if the surface fails to draw.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&mut self, product_id: i64) -> Result<()> {
        match self.api.remove_from_cart(&self.user_id, product_id).await {
            Ok(_) => {
                self.notify("Item removed from cart", ToastKind::Success)?;
                self.after_cart_mutation().await
            }
            Err(e) => {
                error!("Error removing from cart: {e}");
                self.report_failure(e, "Unable to remove from cart. Please try again.")
            }
        }
    }

    /// Sets the quantity of an existing line; zero or less removes it.
    ///
    /// # Errors
    /// Returns an error only if the surface fails to draw.
    #[instrument(skip(self))]
    pub async fn set_quantity(&mut self, product_id: i64, quantity: i64) -> Result<()> {
        if self.cart.line(product_id).is_none() {
            let missing = Error::CartLineNotFound { id: product_id };
            warn!("{missing}");
            return self.notify("Item not found in cart", ToastKind::Error);
        }
        let request = self.cart_request(product_id, quantity);
        match self.api.update_cart_item(&request).await {
            Ok(_) => {
                self.notify("Cart updated", ToastKind::Success)?;
                self.after_cart_mutation().await
            }
            Err(e) => {
                error!("Error updating cart: {e}");
                self.report_failure(e, "Unable to update cart. Please try again.")
            }
        }
    }

    /// Empties the cart.
    ///
    /// # Errors
    /// Returns an error only if the surface fails to draw.
    pub async fn clear_cart(&mut self) -> Result<()> {
        match self.api.clear_cart(&self.user_id).await {
            Ok(_) => {
                self.notify("Cart cleared", ToastKind::Success)?;
                self.after_cart_mutation().await
            }
            Err(e) => {
                error!("Error clearing cart: {e}");
                self.report_failure(e, "Unable to clear cart. Please try again.")
            }
        }
    }

    async fn after_cart_mutation(&mut self) -> Result<()> {
        self.load_cart().await;
        self.render_cart()?;
        self.render_badge()
    }

    async fn modal_event(&mut self, event: ModalEvent) -> Result<()> {
        let next = self.modal.on(event);
        if next == self.modal && event != ModalEvent::CartIconClicked {
            return Ok(());
        }
        self.modal = next;
        if next.is_open() {
            self.load_cart().await;
            self.render_cart()?;
            self.render_badge()?;
        }
        self.surface.show_modal(next)
    }

    fn checkout(&mut self) -> Result<()> {
        if self.cart.is_empty() {
            self.notify("Your cart is empty!", ToastKind::Error)
        } else {
            self.notify("Checkout functionality coming soon!", ToastKind::Success)
        }
    }

    /// Advances toast lifecycles to `now` and redraws them if anything changed.
    ///
    /// # Errors
    /// Returns an error only if the surface fails to draw.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        if self.notifier.tick(now) {
            self.surface.show_toasts(self.notifier.toasts())?;
        }
        Ok(())
    }

    fn cart_request(&self, product_id: i64, quantity: i64) -> CartItemRequest {
        CartItemRequest {
            user_id: self.user_id.clone(),
            product_id,
            quantity,
        }
    }

    fn report_failure(&mut self, error: Error, network_message: &str) -> Result<()> {
        match error {
            Error::Unsuccessful { message } => self.notify(message, ToastKind::Error),
            Error::ProductNotFound { .. } => self.notify("Product not found", ToastKind::Error),
            _ => self.notify(network_message, ToastKind::Error),
        }
    }

    fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> Result<()> {
        self.notifier.show(message, kind, Instant::now());
        self.surface.show_toasts(self.notifier.toasts())
    }

    fn render_products(&mut self) -> Result<()> {
        self.surface
            .show_products(&view::product_grid(self.catalog.products()))
    }

    fn render_cart(&mut self) -> Result<()> {
        self.surface.show_cart(&view::cart_panel(&self.cart))
    }

    fn render_badge(&mut self) -> Result<()> {
        self.surface.show_badge(view::badge(&self.cart))
    }

    /// Products currently on display.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The local cart.
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Current cart modal state.
    pub const fn modal(&self) -> ModalState {
        self.modal
    }

    /// Toasts on screen.
    pub const fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// The surface being drawn to.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// The store API in use.
    pub const fn api(&self) -> &A {
        &self.api
    }
}
