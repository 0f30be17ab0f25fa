//! Product table search and pagination.

use crate::product::Product;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: usize = 10;

/// Search box text plus the requested page (1-based)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default = "first_page")]
    pub page: usize,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn first_page() -> usize {
    1
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ProductQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Default::default()
        }
    }

    pub fn page(mut self, page: usize, per_page: usize) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }
}

/// One page of results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }
}

/// Case-insensitive name match; an empty term matches everything
pub fn matches_search(product: &Product, term: &str) -> bool {
    let term = term.trim();
    term.is_empty() || product.name.to_lowercase().contains(&term.to_lowercase())
}

/// Slice `items` into a 1-based page. Page 0 is treated as page 1 and a
/// zero page size as 1; pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let page_items = items.iter().skip(start).take(per_page).cloned().collect();

    Page {
        items: page_items,
        page,
        per_page,
        total_items,
        total_pages,
    }
}

/// Filter the catalog by the query's search term, then paginate
pub fn search_products(products: &[Product], query: &ProductQuery) -> Page<Product> {
    let matching: Vec<Product> = products
        .iter()
        .filter(|product| matches_search(product, &query.search))
        .cloned()
        .collect();

    tracing::debug!(
        search = %query.search,
        matched = matching.len(),
        total = products.len(),
        "product search"
    );

    paginate(&matching, query.page, query.per_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductStatus;
    use rust_decimal_macros::dec;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            img: format!("https://i.ibb.co/{id}.png"),
            name: name.to_string(),
            short_desc: String::new(),
            brand: String::new(),
            country: String::new(),
            category: "Food".to_string(),
            stock: 10,
            price: dec!(10),
            discount: dec!(0),
            status: ProductStatus::InStock,
            description: vec![],
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Coconut Oil"),
            product("2", "Coconut Water"),
            product("3", "Palm Sugar"),
            product("4", "coconut milk"),
            product("5", "Banana Chips"),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let page = search_products(&catalog(), &ProductQuery::search("COCONUT"));

        assert_eq!(page.total_items, 3);
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4"]);
    }

    #[test]
    fn test_empty_search_matches_all() {
        let page = search_products(&catalog(), &ProductQuery::default());
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_pagination() {
        let query = ProductQuery::default().page(2, 2);
        let page = search_products(&catalog(), &query);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "3");
        assert!(page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = paginate(&catalog(), 9, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next());
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let page = paginate(&catalog(), 0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn test_no_match() {
        let page = search_products(&catalog(), &ProductQuery::search("mango"));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_previous());
    }
}
