//! # Bulk Operations
//!
//! Edits applied to every selected product at once.
//!
//! Both functions return a new collection with the same length and order as
//! the input; unselected products are cloned untouched.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::selection::Selection;
use crate::types::{Product, ProductStatus};

/// A field replacement applied to the selected products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum BulkEdit {
    Status(ProductStatus),
    /// Category name; not checked against the tree.
    Category(String),
}

impl BulkEdit {
    fn apply_to(&self, product: &mut Product) {
        match self {
            BulkEdit::Status(status) => product.status = *status,
            BulkEdit::Category(name) => product.category = name.clone(),
        }
    }
}

/// Replaces `status` or `category` on every selected product.
pub fn apply_bulk_edit(products: &[Product], selected: &Selection, edit: &BulkEdit) -> Vec<Product> {
    products
        .iter()
        .map(|product| {
            let mut product = product.clone();
            if selected.contains(&product.id) {
                edit.apply_to(&mut product);
            }
            product
        })
        .collect()
}

/// Lowers the price of every selected product by `percentage` percent.
///
/// `price := max(0, round(price * (1 - percentage / 100)))`, rounded to a
/// whole hryvnia; the result is never negative, even for percentages above
/// 100.
///
/// ```rust
/// use stockroom_core::bulk::apply_bulk_price_delta;
/// use stockroom_core::Selection;
///
/// let products: Vec<stockroom_core::Product> = Vec::new();
/// let selected = Selection::new();
/// assert!(apply_bulk_price_delta(&products, &selected, 10).is_empty());
/// ```
pub fn apply_bulk_price_delta(products: &[Product], selected: &Selection, percentage: u32) -> Vec<Product> {
    products
        .iter()
        .map(|product| {
            let mut product = product.clone();
            if selected.contains(&product.id) {
                product.price = product.price.apply_markdown(percentage);
            }
            product
        })
        .collect()
}

/// Ids of the products a bulk operation would touch, in collection order.
pub fn affected_ids(products: &[Product], selected: &Selection) -> Vec<String> {
    products
        .iter()
        .filter(|p| selected.contains(&p.id))
        .map(|p| p.id.clone())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use chrono::NaiveDate;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            sku: format!("SKU-{}", id),
            category: "A".to_string(),
            price: Money::from_minor(price),
            old_price: Money::zero(),
            stock: 1,
            status: ProductStatus::Draft,
            images: vec![],
            description: String::new(),
            attributes: Default::default(),
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    fn selection(ids: &[&str]) -> Selection {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_bulk_status_edit_touches_only_selected() {
        let products = vec![product("P-1", 100), product("P-2", 200), product("P-3", 300)];
        let edited = apply_bulk_edit(&products, &selection(&["P-1", "P-3"]), &BulkEdit::Status(ProductStatus::Hidden));

        assert_eq!(edited.len(), 3);
        assert_eq!(edited[0].status, ProductStatus::Hidden);
        assert_eq!(edited[1], products[1]);
        assert_eq!(edited[2].status, ProductStatus::Hidden);
        let order: Vec<&str> = edited.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, ["P-1", "P-2", "P-3"]);
    }

    #[test]
    fn test_bulk_category_edit() {
        let products = vec![product("P-1", 100), product("P-2", 200)];
        let edited = apply_bulk_edit(&products, &selection(&["P-2"]), &BulkEdit::Category("Сантехніка".to_string()));
        assert_eq!(edited[0].category, "A");
        assert_eq!(edited[1].category, "Сантехніка");
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let products = vec![product("P-1", 100)];
        let edited = apply_bulk_edit(&products, &selection(&["P-404"]), &BulkEdit::Status(ProductStatus::Active));
        assert_eq!(edited, products);
        assert_eq!(apply_bulk_price_delta(&products, &selection(&["P-404"]), 50), products);
    }

    #[test]
    fn test_price_delta_ten_percent() {
        let products = vec![product("P-1", 289_900), product("P-2", 119_900)];
        let marked = apply_bulk_price_delta(&products, &selection(&["P-1"]), 10);
        // 2609.10 rounds to a whole hryvnia
        assert_eq!(marked[0].price.minor(), 260_900);
        assert_eq!(marked[1].price.minor(), 119_900);
    }

    #[test]
    fn test_price_delta_clamps_at_zero() {
        let products = vec![product("P-1", 100)];
        let marked = apply_bulk_price_delta(&products, &selection(&["P-1"]), 110);
        assert_eq!(marked[0].price, Money::zero());
    }

    #[test]
    fn test_price_delta_never_negative() {
        let products: Vec<Product> = (0..20).map(|i| product(&format!("P-{}", i), i * 137)).collect();
        let all: Selection = products.iter().map(|p| p.id.clone()).collect();
        for percentage in [0, 1, 5, 50, 99, 100, 101, 200, 1_000] {
            for p in apply_bulk_price_delta(&products, &all, percentage) {
                assert!(!p.price.is_negative());
            }
        }
    }

    #[test]
    fn test_bulk_edit_json_shape() {
        let edit: BulkEdit = serde_json::from_str(r#"{"field":"status","value":"OutOfStock"}"#).unwrap();
        assert_eq!(edit, BulkEdit::Status(ProductStatus::OutOfStock));
        let edit: BulkEdit = serde_json::from_str(r#"{"field":"category","value":"B"}"#).unwrap();
        assert_eq!(edit, BulkEdit::Category("B".to_string()));
    }

    #[test]
    fn test_affected_ids_follow_collection_order() {
        let products = vec![product("P-2", 1), product("P-1", 1), product("P-3", 1)];
        assert_eq!(affected_ids(&products, &selection(&["P-1", "P-2"])), ["P-2", "P-1"]);
    }
}
