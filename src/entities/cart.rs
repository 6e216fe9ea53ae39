//! Cart entities - Cart line items as sent over the wire and as held locally.
//!
//! The store API has shipped two cart shapes: a reference-style entry
//! (`productId`, `quantity`, `addedAt`) joined server-side with its `product`, and a
//! denormalized product carrying its own `quantity`. Both decode into [`CartEntry`] and
//! normalize into a [`CartLine`], the only shape the rest of the crate works with.

use crate::entities::Product;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A cart entry exactly as the API returns it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CartEntry {
    /// Reference-style entry joined with its product on the server
    #[serde(rename_all = "camelCase")]
    Joined {
        /// Product this line refers to
        product_id: i64,
        /// Units in the cart; absent means one
        #[serde(default)]
        quantity: Option<u32>,
        /// ISO-8601 timestamp of the first add
        #[serde(default)]
        added_at: Option<String>,
        /// Joined product; absent when the product no longer exists
        #[serde(default)]
        product: Option<Product>,
    },
    /// Product copied into the cart with a quantity alongside
    Denormalized {
        /// The product itself
        #[serde(flatten)]
        product: Product,
        /// Units in the cart; absent means one
        #[serde(default)]
        quantity: Option<u32>,
    },
}

impl CartEntry {
    /// Normalizes the entry into a [`CartLine`].
    ///
    /// Missing or zero quantities count as one unit. Joined entries whose product
    /// is gone are dropped.
    #[must_use]
    pub fn into_line(self) -> Option<CartLine> {
        match self {
            Self::Joined {
                quantity,
                added_at,
                product,
                ..
            } => product.map(|product| CartLine {
                product,
                quantity: normalize_quantity(quantity),
                added_at: added_at.as_deref().and_then(parse_added_at),
            }),
            Self::Denormalized { product, quantity } => Some(CartLine {
                product,
                quantity: normalize_quantity(quantity),
                added_at: None,
            }),
        }
    }
}

fn normalize_quantity(quantity: Option<u32>) -> u32 {
    match quantity {
        Some(0) | None => 1,
        Some(q) => q,
    }
}

fn parse_added_at(raw: &str) -> Option<NaiveDateTime> {
    raw.parse().ok()
}

/// One (product, quantity) pairing in the local cart
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    /// The product on this line
    pub product: Product,
    /// Units of the product, always at least one
    pub quantity: u32,
    /// When the product was first added, if the server told us
    pub added_at: Option<NaiveDateTime>,
}

impl CartLine {
    /// Creates a fresh line holding a single unit.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
            added_at: None,
        }
    }

    /// Product id of this line.
    #[must_use]
    pub const fn product_id(&self) -> i64 {
        self.product.id
    }

    /// `price * quantity` for this line, saturating at the `i64` bounds.
    #[must_use]
    pub fn subtotal(&self) -> i64 {
        self.product.price.saturating_mul(i64::from(self.quantity))
    }
}

/// Body of `POST /api/cart` and `PUT /api/cart/update`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemRequest {
    /// Owner of the cart
    pub user_id: String,
    /// Product to add or update
    pub product_id: i64,
    /// Units to add (POST) or the new quantity (PUT)
    pub quantity: i64,
}
