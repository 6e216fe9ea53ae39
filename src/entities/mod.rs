//! Entity module - Contains the data shapes shared with the store API.
//! Products are read-only catalog records; cart entries arrive in either of the
//! API's two shapes and are normalized into cart lines.

pub mod cart;
pub mod product;

pub use cart::{CartEntry, CartItemRequest, CartLine};
pub use product::Product;
