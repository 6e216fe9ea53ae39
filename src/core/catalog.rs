//! Catalog business logic - The product list currently shown in the grid.
//!
//! The catalog is replaced wholesale whenever products are (re)loaded or a search
//! returns; lookups by id go through it before any cart mutation.

use crate::entities::Product;

/// Ordered list of products currently on display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from an ordered product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Replaces the current products.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn find(&self, product_id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products on display.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when nothing is on display.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::new(vec![
            sample_product(1, "A", 10, 10),
            sample_product(2, "B", 20, 20),
        ]);

        assert_eq!(catalog.find(2).map(|p| p.title.as_str()), Some("B"));
        assert!(catalog.find(3).is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_replace_swaps_products() {
        let mut catalog = Catalog::new(vec![sample_product(1, "A", 10, 10)]);
        catalog.replace(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.find(1).is_none());
    }
}
