//! Cart business logic - The local cart and its derived figures.
//!
//! `CartStore` is the client-side copy of the user's cart. In normal operation it is
//! overwritten with the server's cart after every mutation (see `Storefront`), but
//! the local operations keep the same invariants so the store is correct on its own:
//! at most one line per product id, and no line ever holds zero units.

use crate::{
    core::format::format_amount,
    entities::{CartEntry, CartLine, Product},
};
use tracing::trace;

/// In-memory list of cart lines, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Adds one unit of `product`, merging into an existing line for the same id.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            trace!(product_id = product.id, quantity = line.quantity, "Merged into cart line");
        } else {
            self.lines.push(CartLine::new(product.clone()));
            trace!(product_id = product.id, "Inserted cart line");
        }
    }

    /// Removes the line for `product_id`. Returns false (and changes nothing) when
    /// there is no such line.
    pub fn remove(&mut self, product_id: i64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id() != product_id);
        before != self.lines.len()
    }

    /// Sets the quantity of an existing line. A quantity of zero or less removes the
    /// line. Returns false when there is no line for `product_id`.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.line_mut(product_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Replaces the contents with lines freshly loaded from the server.
    ///
    /// Entries that cannot be normalized are dropped; duplicate product ids are
    /// merged by summing their quantities.
    pub fn replace(&mut self, entries: Vec<CartEntry>) {
        let mut lines: Vec<CartLine> = Vec::with_capacity(entries.len());
        for line in entries.into_iter().filter_map(CartEntry::into_line) {
            if let Some(existing) = lines
                .iter_mut()
                .find(|l| l.product_id() == line.product_id())
            {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
            } else {
                lines.push(line);
            }
        }
        self.lines = lines;
    }

    /// All lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `product_id`, if any.
    #[must_use]
    pub fn line(&self, product_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id() == product_id)
    }

    fn line_mut(&mut self, product_id: i64) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id() == product_id)
    }

    /// True when the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price * quantity` over all lines, saturating at the `i64` bounds.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .fold(0, i64::saturating_add)
    }

    /// [`Self::total`] with en-IN grouping; an empty cart is `"0"`.
    #[must_use]
    pub fn formatted_total(&self) -> String {
        format_amount(self.total())
    }

    /// Sum of quantities, shown on the cart badge.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let product = sample_product(3, "Sony WH-1000XM5", 27990, 34990);
        let mut cart = CartStore::new();

        for _ in 0..4 {
            cart.add(&product);
        }

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(3).unwrap().quantity, 4);
        assert_eq!(cart.count(), 4);
    }

    #[test]
    fn test_add_distinct_products_keeps_order() {
        let mut cart = CartStore::new();
        cart.add(&sample_product(2, "B", 10, 10));
        cart.add(&sample_product(1, "A", 10, 10));
        cart.add(&sample_product(2, "B", 10, 10));

        let ids: Vec<i64> = cart.lines().iter().map(CartLine::product_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = CartStore::new();
        cart.add(&sample_product(1, "A", 100, 100));
        let before = cart.clone();

        assert!(!cart.remove(42));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_present_deletes_line() {
        let mut cart = CartStore::new();
        cart.add(&sample_product(1, "A", 100, 100));
        cart.add(&sample_product(1, "A", 100, 100));

        assert!(cart.remove(1));
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_total_is_sum_of_price_times_quantity() {
        let mut cart = CartStore::new();
        let a = sample_product(1, "A", 27990, 34990);
        let b = sample_product(2, "B", 134900, 149900);
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        assert_eq!(cart.total(), 27990 * 2 + 134900);
        assert_eq!(cart.formatted_total(), "1,90,880");
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let mut cart = CartStore::new();
        cart.replace(vec![
            CartEntry::Denormalized {
                product: sample_product(1, "A", i64::MAX / 2, i64::MAX / 2),
                quantity: Some(3),
            },
            CartEntry::Denormalized {
                product: sample_product(2, "B", 10, 10),
                quantity: Some(1),
            },
        ]);

        assert_eq!(cart.total(), i64::MAX);
        assert_eq!(cart.count(), 4);
    }

    #[test]
    fn test_empty_cart_total_is_zero_string() {
        let cart = CartStore::new();
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.formatted_total(), "0");
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_set_quantity_overwrites_and_removes() {
        let mut cart = CartStore::new();
        cart.add(&sample_product(1, "A", 10, 10));

        assert!(cart.set_quantity(1, 5));
        assert_eq!(cart.line(1).unwrap().quantity, 5);

        assert!(cart.set_quantity(1, 0));
        assert!(cart.line(1).is_none());

        assert!(!cart.set_quantity(1, 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_replace_defaults_missing_quantity_and_merges_duplicates() {
        let mut cart = CartStore::new();
        cart.add(&sample_product(9, "stale", 1, 1));

        let product = sample_product(1, "A", 100, 100);
        cart.replace(vec![
            CartEntry::Denormalized {
                product: product.clone(),
                quantity: None,
            },
            CartEntry::Joined {
                product_id: 1,
                quantity: Some(2),
                added_at: None,
                product: Some(product),
            },
            CartEntry::Joined {
                product_id: 5,
                quantity: Some(1),
                added_at: None,
                product: None,
            },
        ]);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), 300);
        assert!(cart.line(9).is_none());
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = CartStore::new();
        cart.add(&sample_product(1, "A", 10, 10));
        cart.clear();
        assert!(cart.is_empty());
    }
}
