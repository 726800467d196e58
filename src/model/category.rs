//! Category filtering over product snapshots.

use crate::model::Product;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Sentinel category name that selects every product.
pub const ALL_CATEGORIES: &str = "all";

/// Which products a category listing returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    All,
    /// Exact, case-sensitive match on `Product::category`.
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(category: &str) -> Self {
        if category == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(category.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(category: String) -> Self {
        if category == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(category)
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

/// Keeps the products `filter` selects, preserving their order.
pub fn filter_by_category(products: Vec<Product>, filter: &CategoryFilter) -> Vec<Product> {
    products.into_iter().filter(|p| filter.matches(p)).collect()
}

/// Distinct categories in first-seen order.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Filter options for a category picker: [`CategoryFilter::All`] first, then
/// each distinct category.
pub fn category_filters(products: &[Product]) -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(
            distinct_categories(products)
                .into_iter()
                .map(CategoryFilter::Only),
        )
        .collect()
}
