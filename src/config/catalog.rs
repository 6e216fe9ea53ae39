//! Static catalog loading for the in-memory store.
//!
//! A catalog file is a list of `[[products]]` tables using the API's camelCase keys
//! (`originalPrice`, `ratingCount`, `inStock`). Without a file the built-in sample
//! catalog is served.

use crate::{
    entities::Product,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::{collections::HashSet, path::Path};

/// Structure of a catalog TOML file
#[derive(Debug, Deserialize)]
pub struct CatalogSeed {
    /// Products in display order
    pub products: Vec<Product>,
}

/// Parses a catalog TOML document and checks product ids are unique.
///
/// # Errors
/// Returns `Error::Config` if the TOML is invalid or two products share an id.
pub fn parse_catalog(contents: &str) -> Result<Vec<Product>> {
    let seed: CatalogSeed = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog: {e}"),
    })?;

    let mut seen = HashSet::new();
    if let Some(dup) = seed.products.iter().find(|p| !seen.insert(p.id)) {
        return Err(Error::Config {
            message: format!("Duplicate product id {} in catalog", dup.id),
        });
    }
    Ok(seed.products)
}

/// Loads a catalog from a TOML file.
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or parsed.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {}: {e}", path.display()),
    })?;
    parse_catalog(&contents)
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: i64,
    title: &str,
    slug: &str,
    price: i64,
    original_price: i64,
    rating: f64,
    rating_count: u64,
    category: &str,
    description: &str,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        image: format!("https://via.placeholder.com/250x250/ffffff/2874f0?text={slug}"),
        price,
        original_price,
        rating,
        rating_count,
        in_stock: true,
        category: Some(category.to_string()),
        description: Some(description.to_string()),
    }
}

/// The sample catalog served when no catalog file is configured.
#[must_use]
pub fn builtin_catalog() -> Vec<Product> {
    vec![
        product(
            1,
            "Apple iPhone 15 Pro Max (256 GB) - Natural Titanium",
            "iPhone+15",
            134_900,
            149_900,
            4.5,
            12_450,
            "Mobiles",
            "Latest iPhone with A17 Pro chip and titanium design",
        ),
        product(
            2,
            "Samsung Galaxy S24 Ultra (512 GB) - Titanium Black",
            "Galaxy+S24",
            124_999,
            139_999,
            4.6,
            8_920,
            "Mobiles",
            "Premium Android flagship with S Pen",
        ),
        product(
            3,
            "Sony WH-1000XM5 Wireless Headphones with Noise Cancellation",
            "Sony+Headphones",
            27_990,
            34_990,
            4.7,
            15_630,
            "Electronics",
            "Premium noise-cancelling wireless headphones",
        ),
        product(
            4,
            "MacBook Pro 16-inch M3 Pro (1TB SSD, 36GB RAM)",
            "MacBook+Pro",
            289_900,
            319_900,
            4.8,
            5_230,
            "Electronics",
            "Powerful laptop for professionals and creators",
        ),
        product(
            5,
            "Samsung 55-inch QLED 4K Smart TV (QA55Q80C)",
            "Samsung+TV",
            89_990,
            119_990,
            4.4,
            7_820,
            "Appliances",
            "Premium QLED TV with 4K resolution",
        ),
        product(
            6,
            "Dell XPS 15 Laptop (Intel i7, 16GB RAM, 512GB SSD)",
            "Dell+XPS",
            149_990,
            179_990,
            4.5,
            3_450,
            "Electronics",
            "High-performance laptop for business and creative work",
        ),
        product(
            7,
            "AirPods Pro (2nd Generation) with MagSafe Case",
            "AirPods+Pro",
            24_900,
            29_900,
            4.6,
            18_200,
            "Electronics",
            "Premium wireless earbuds with active noise cancellation",
        ),
        product(
            8,
            "Canon EOS R5 Mirrorless Camera (45MP, 4K Video)",
            "Canon+EOS",
            389_990,
            449_990,
            4.7,
            1_250,
            "Electronics",
            "Professional mirrorless camera for photography and videography",
        ),
    ]
}
