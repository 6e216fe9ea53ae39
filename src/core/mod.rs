//! Core business logic - framework-agnostic cart, catalog and search operations.
//!
//! Nothing in here touches the network or the UI; the `Storefront` application
//! root drives these types and hands their state to the view layer.

/// Local cart store with totals and counts
pub mod cart;
/// The product list currently on display
pub mod catalog;
/// Currency and text formatting for display
pub mod format;
/// Title search over the catalog
pub mod search;

pub use cart::CartStore;
pub use catalog::Catalog;
pub use search::{SearchQuery, filter_by_title};
