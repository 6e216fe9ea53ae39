//! View layer - pure view models and their HTML rendering.
//!
//! Nothing here holds state. The application root builds view models from the
//! catalog and cart and hands them to a [`Surface`](crate::ui::Surface).

/// Cart panel and badge view models
pub mod cart;
/// HTML markup for page regions
pub mod html;
/// Product grid and card view models
pub mod product;

pub use cart::{BadgeView, CartPanelView, CartRowView, badge, cart_panel};
pub use product::{
    ProductCardView, ProductDetailView, ProductGridView, product_card, product_detail,
    product_grid,
};
