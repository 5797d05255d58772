//! # Catalog Mutations
//!
//! Whole-product changes to the in-memory collection: creating blank
//! products, saving (full replace), bulk-adding lookup drafts and deleting.
//!
//! ## Save Semantics
//! ```text
//! upsert_product(products, p)
//!      │
//!      ├── id known?   → replaced in place (position kept)
//!      └── id unknown? → prepended (newest rows on top)
//! ```

use std::collections::HashSet;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::money::Money;
use crate::types::{Category, Product, ProductDraft, ProductStatus};
use crate::{DEFAULT_CATEGORIES, DEFAULT_DRAFT_STOCK};

pub const PRODUCT_ID_PREFIX: &str = "P";
pub const CATEGORY_ID_PREFIX: &str = "C";

// =============================================================================
// Identifiers
// =============================================================================

/// Generates `{prefix}-xxxxxxxx` (8 hex digits) not rejected by `is_taken`.
pub fn generate_id(prefix: &str, is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let hex = Uuid::new_v4().simple().to_string();
        let candidate = format!("{}-{}", prefix, &hex[..8]);
        if !is_taken(&candidate) {
            return candidate;
        }
    }
}

/// Fresh product id unused by `products`.
pub fn new_product_id(products: &[Product]) -> String {
    let taken: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
    generate_id(PRODUCT_ID_PREFIX, |candidate| taken.contains(candidate))
}

// =============================================================================
// Construction
// =============================================================================

/// Category name a new product starts in: the first category of the tree,
/// or the first default name when the tree is empty.
pub fn default_category_name(categories: &[Category]) -> String {
    categories
        .first()
        .map(|c| c.name.clone())
        .or_else(|| DEFAULT_CATEGORIES.first().map(|s| s.to_string()))
        .unwrap_or_default()
}

impl Product {
    /// An empty product ready for the edit form.
    ///
    /// Status is `Draft`, all numbers are zero, collections are empty.
    pub fn blank(id: impl Into<String>, categories: &[Category], created_at: NaiveDate) -> Self {
        Product {
            id: id.into(),
            name: String::new(),
            sku: String::new(),
            category: default_category_name(categories),
            price: Money::zero(),
            old_price: Money::zero(),
            stock: 0,
            status: ProductStatus::Draft,
            images: Vec::new(),
            description: String::new(),
            attributes: Default::default(),
            created_at,
        }
    }

    /// Completes a lookup draft into a product for the bulk-add list.
    ///
    /// Missing fields fall back to the blank product, except `stock` which
    /// defaults to one unit (a scanned item is at least one item).
    pub fn from_draft(
        id: impl Into<String>,
        draft: ProductDraft,
        categories: &[Category],
        created_at: NaiveDate,
    ) -> Self {
        Product {
            name: draft.name.unwrap_or_default(),
            sku: draft.sku.unwrap_or_default(),
            category: draft
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| default_category_name(categories)),
            price: draft.price.unwrap_or_default(),
            stock: draft.stock.unwrap_or(DEFAULT_DRAFT_STOCK),
            ..Product::blank(id, categories, created_at)
        }
    }
}

// =============================================================================
// Collection Mutations
// =============================================================================

/// Saves `product` by full replace keyed on id, or prepends it when new.
pub fn upsert_product(products: &[Product], product: Product) -> Vec<Product> {
    match products.iter().position(|p| p.id == product.id) {
        Some(index) => {
            let mut next = products.to_vec();
            next[index] = product;
            next
        }
        None => {
            let mut next = Vec::with_capacity(products.len() + 1);
            next.push(product);
            next.extend_from_slice(products);
            next
        }
    }
}

/// Prepends `new_products`, keeping their relative order.
pub fn add_products(products: &[Product], new_products: Vec<Product>) -> Vec<Product> {
    let mut next = new_products;
    next.extend_from_slice(products);
    next
}

/// Removes every product whose id is listed; unknown ids are ignored.
pub fn delete_products(products: &[Product], ids: &[String]) -> Vec<Product> {
    let doomed: HashSet<&str> = ids.iter().map(String::as_str).collect();
    products
        .iter()
        .filter(|p| !doomed.contains(p.id.as_str()))
        .cloned()
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }

    fn named(id: &str, name: &str) -> Product {
        Product {
            name: name.to_string(),
            sku: format!("SKU-{}", id),
            ..Product::blank(id, &[], date())
        }
    }

    #[test]
    fn test_blank_product_shape() {
        let categories = vec![Category::top_level("C-1", "Кат1")];
        let blank = Product::blank("P-1000", &categories, date());
        assert_eq!(blank.status, ProductStatus::Draft);
        assert_eq!(blank.category, "Кат1");
        assert_eq!(blank.price, Money::zero());
        assert_eq!(blank.old_price, Money::zero());
        assert_eq!(blank.stock, 0);
        assert!(blank.images.is_empty());
        assert!(blank.attributes.is_empty());
        assert_eq!(blank.created_at, date());
    }

    #[test]
    fn test_blank_product_falls_back_to_default_category() {
        let blank = Product::blank("P-1", &[], date());
        assert_eq!(blank.category, DEFAULT_CATEGORIES[0]);
    }

    #[test]
    fn test_generated_ids() {
        let products = vec![named("P-1", "a")];
        let id = new_product_id(&products);
        assert!(id.starts_with("P-"));
        assert_eq!(id.len(), 10);
        assert!(id[2..].chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(id, "P-1");
    }

    #[test]
    fn test_generate_id_skips_taken_candidates() {
        use std::cell::Cell;
        let calls = Cell::new(0);
        let id = generate_id("C", |_| {
            calls.set(calls.get() + 1);
            calls.get() < 3
        });
        assert!(id.starts_with("C-"));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_from_draft_found_and_missing() {
        let categories = vec![Category::top_level("C-1", "Будматеріали")];
        let found = ProductDraft {
            name: Some("Лампа LED 10W E27".to_string()),
            sku: Some("4820012345678".to_string()),
            category: None,
            price: Some(Money::from_major_minor(65, 0)),
            stock: Some(150),
        };
        let product = Product::from_draft("P-1", found, &categories, date());
        assert_eq!(product.name, "Лампа LED 10W E27");
        assert_eq!(product.category, "Будматеріали");
        assert_eq!(product.stock, 150);
        assert_eq!(product.status, ProductStatus::Draft);

        let missing = Product::from_draft("P-2", ProductDraft::from_code("999"), &categories, date());
        assert_eq!(missing.sku, "999");
        assert!(missing.name.is_empty());
        assert_eq!(missing.stock, DEFAULT_DRAFT_STOCK);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let products = vec![named("P-1", "a"), named("P-2", "b")];
        let saved = upsert_product(&products, named("P-2", "B!"));
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[1].name, "B!");
        assert_eq!(saved[0], products[0]);
    }

    #[test]
    fn test_upsert_prepends_new() {
        let products = vec![named("P-1", "a")];
        let saved = upsert_product(&products, named("P-9", "new"));
        let ids: Vec<&str> = saved.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P-9", "P-1"]);
    }

    #[test]
    fn test_add_products_prepends_in_order() {
        let products = vec![named("P-1", "a")];
        let added = add_products(&products, vec![named("P-7", "x"), named("P-8", "y")]);
        let ids: Vec<&str> = added.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P-7", "P-8", "P-1"]);
    }

    #[test]
    fn test_delete_products() {
        let products = vec![named("P-1", "a"), named("P-2", "b"), named("P-3", "c")];
        let left = delete_products(&products, &["P-2".to_string(), "P-404".to_string()]);
        let ids: Vec<&str> = left.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P-1", "P-3"]);
    }
}
