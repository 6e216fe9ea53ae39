/// Application settings from `storefront.toml` and the environment
pub mod app;

/// Static catalog loading for the in-memory store
pub mod catalog;

pub use app::{AppConfig, load_app_config};
pub use catalog::{builtin_catalog, load_catalog};
