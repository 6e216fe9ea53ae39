//! Product search - Case-insensitive substring match over titles.
//!
//! There is no ranking and no tokenization: a product matches when the trimmed query
//! occurs anywhere in its title, ignoring case. Results keep catalog order.

use crate::entities::Product;

/// What a search box submission asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Empty or whitespace-only input: show the full catalog again
    All,
    /// Trimmed, non-empty search term
    Term(String),
}

impl SearchQuery {
    /// Interprets raw search box input.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::All
        } else {
            Self::Term(trimmed.to_string())
        }
    }
}

/// Returns the products whose title contains `query`, ignoring case.
///
/// An empty or whitespace-only query returns every product.
#[must_use]
pub fn filter_by_title(products: &[Product], query: &str) -> Vec<Product> {
    match SearchQuery::parse(query) {
        SearchQuery::All => products.to_vec(),
        SearchQuery::Term(term) => {
            let needle = term.to_lowercase();
            products
                .iter()
                .filter(|p| p.title_contains(&needle))
                .cloned()
                .collect()
        }
    }
}
