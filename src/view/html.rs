//! HTML markup for the storefront page regions.
//!
//! Produces the same class names the storefront stylesheet targets
//! (`product-card`, `cart-item`, ...). All text and attribute values are escaped.

use crate::{
    ui::notify::{Toast, ToastKind, ToastPhase},
    view::{
        cart::{CartPanelView, CartRowView},
        product::{ProductCardView, ProductDetailView, ProductGridView},
    },
};

const PRODUCT_IMAGE_FALLBACK: &str = "https://via.placeholder.com/250x250";
const CART_IMAGE_FALLBACK: &str = "https://via.placeholder.com/80x80";

/// Escapes text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn grid_placeholder(text: &str) -> String {
    format!(
        r#"<p style="grid-column: 1/-1; text-align: center; padding: 40px; color: #878787;">{}</p>"#,
        escape(text)
    )
}

/// Markup for one product card.
#[must_use]
pub fn product_card(card: &ProductCardView) -> String {
    let title = escape(&card.title);
    let disabled = if card.in_stock { "" } else { " disabled" };
    format!(
        concat!(
            r#"<div class="product-card">"#,
            r#"<img src="{image}" alt="{title}" class="product-image" onerror="this.src='{fallback}'">"#,
            r#"<div class="product-title">{title}</div>"#,
            r#"<div class="product-rating"><span class="rating-stars">{stars}</span>"#,
            r#"<span class="rating-count">({rating_count})</span></div>"#,
            r#"<div class="product-price"><span class="current-price">{price}</span>"#,
            r#"<span class="original-price">{original}</span>"#,
            r#"<span class="discount">{discount}</span></div>"#,
            r#"<button class="add-to-cart-btn" data-product-id="{id}"{disabled}>{label}</button>"#,
            "</div>"
        ),
        image = escape(&card.image),
        title = title,
        fallback = PRODUCT_IMAGE_FALLBACK,
        stars = card.stars(),
        rating_count = card.rating_count,
        price = escape(&card.price),
        original = escape(&card.original_price),
        discount = card.discount_label(),
        id = card.id,
        disabled = disabled,
        label = card.button_label(),
    )
}

/// Inner markup of the `productsGrid` container.
#[must_use]
pub fn product_grid(grid: &ProductGridView) -> String {
    match grid {
        ProductGridView::Cards(cards) => cards.iter().map(product_card).collect(),
        other => grid_placeholder(other.placeholder().unwrap_or_default()),
    }
}

/// Markup for the product detail panel: the card plus category and description.
#[must_use]
pub fn product_detail(detail: &ProductDetailView) -> String {
    let mut html = format!(r#"<div class="product-detail">{}"#, product_card(&detail.card));
    if let Some(category) = &detail.category {
        html.push_str(&format!(
            r#"<p class="product-category">{}</p>"#,
            escape(category)
        ));
    }
    if let Some(description) = &detail.description {
        html.push_str(&format!(
            r#"<p class="product-description">{}</p>"#,
            escape(description)
        ));
    }
    html.push_str("</div>");
    html
}

fn cart_row(row: &CartRowView) -> String {
    let title = escape(&row.title);
    format!(
        concat!(
            r#"<div class="cart-item">"#,
            r#"<img src="{image}" alt="{title}" class="cart-item-image" onerror="this.src='{fallback}'">"#,
            r#"<div class="cart-item-details"><div class="cart-item-title">{title}</div>"#,
            r#"<div class="cart-item-price">{price_line}</div></div>"#,
            r#"<button class="remove-item" data-product-id="{id}">Remove</button>"#,
            "</div>"
        ),
        image = escape(&row.image),
        title = title,
        fallback = CART_IMAGE_FALLBACK,
        price_line = escape(&row.price_line),
        id = row.product_id,
    )
}

/// Inner markup of the `cartItems` container.
#[must_use]
pub fn cart_items(panel: &CartPanelView) -> String {
    match panel.placeholder() {
        Some(text) => format!(r#"<p class="empty-cart">{}</p>"#, escape(text)),
        None => panel.rows.iter().map(cart_row).collect(),
    }
}

/// Markup for one toast notification.
#[must_use]
pub fn toast(toast: &Toast) -> String {
    let background = match toast.kind {
        ToastKind::Success => "#4caf50",
        ToastKind::Error => "#f44336",
    };
    let animation = match toast.phase {
        ToastPhase::Visible => "slideIn 0.3s ease",
        ToastPhase::Leaving | ToastPhase::Gone => "slideIn 0.3s ease reverse",
    };
    format!(
        r#"<div class="notification" data-toast-id="{}" style="background-color: {background}; animation: {animation};">{}</div>"#,
        toast.id,
        escape(&toast.message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::CartStore,
        test_utils::*,
        view::{cart::cart_panel, product::product_grid as grid_view},
    };

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_empty_grid_renders_placeholder_not_empty_container() {
        let html = product_grid(&grid_view(&[]));
        assert!(html.contains("No products found."));
        assert!(!html.contains("product-card"));
    }

    #[test]
    fn test_product_card_markup() {
        let html = product_grid(&grid_view(&[sample_product(3, "Sony <XM5>", 27990, 34990)]));
        assert!(html.contains(r#"<div class="product-title">Sony &lt;XM5&gt;</div>"#));
        assert!(html.contains(r#"<span class="current-price">₹27,990</span>"#));
        assert!(html.contains(r#"<span class="discount">20% off</span>"#));
        assert!(html.contains(r#"data-product-id="3">Add to Cart</button>"#));
    }

    #[test]
    fn test_product_detail_markup() {
        let mut product = sample_product(7, "AirPods Pro", 24900, 29900);
        product.description = Some("Earbuds & case".to_string());
        let html = product_detail(&crate::view::product_detail(&product));

        assert!(html.starts_with(r#"<div class="product-detail"><div class="product-card">"#));
        assert!(html.contains(r#"<p class="product-category">Electronics</p>"#));
        assert!(html.contains(r#"<p class="product-description">Earbuds &amp; case</p>"#));
    }

    #[test]
    fn test_out_of_stock_button_is_disabled() {
        let mut product = sample_product(5, "TV", 100, 100);
        product.in_stock = false;
        let html = product_grid(&grid_view(&[product]));
        assert!(html.contains(r#"data-product-id="5" disabled>Out of Stock</button>"#));
    }

    #[test]
    fn test_empty_cart_markup() {
        let html = cart_items(&cart_panel(&CartStore::new()));
        assert_eq!(html, r#"<p class="empty-cart">Your cart is empty</p>"#);
    }

    #[test]
    fn test_cart_row_markup() {
        let mut cart = CartStore::new();
        cart.add(&sample_product(7, "AirPods Pro", 24900, 29900));
        let html = cart_items(&cart_panel(&cart));
        assert!(html.contains(r#"<div class="cart-item-price">₹24,900 x 1</div>"#));
        assert!(html.contains(r#"<button class="remove-item" data-product-id="7">Remove</button>"#));
    }
}
