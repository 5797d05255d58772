//! # Product Repository
//!
//! In-memory product collection behind the [`ProductStore`] contract.
//!
//! Ordering follows the dashboard: new products are prepended, saved
//! products keep their position.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use stockroom_core::catalog::{delete_products, upsert_product};
use stockroom_core::Product;

use crate::contracts::ProductStore;
use crate::error::{StoreError, StoreResult};

/// Repository for product operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(seed::initial_products());
///
/// repo.save(product).await?;
/// let products = repo.list_products().await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductRepository {
    /// Creates a repository holding `products` in the given order.
    pub fn new(products: Vec<Product>) -> Self {
        ProductRepository {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Gets a product by ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Product> {
        debug!(id = %id, "Getting product by ID");

        let products = self.products.read().await;
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Product", id))
    }

    /// Gets a product by SKU (exact match).
    pub async fn get_by_sku(&self, sku: &str) -> Option<Product> {
        let products = self.products.read().await;
        products.iter().find(|p| p.sku == sku).cloned()
    }

    /// Number of stored products.
    pub async fn count(&self) -> usize {
        self.products.read().await.len()
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let products = self.products.read().await;
        debug!(count = products.len(), "Listing products");
        Ok(products.clone())
    }

    async fn save(&self, product: Product) -> StoreResult<()> {
        let mut products = self.products.write().await;
        info!(id = %product.id, sku = %product.sku, "Saving product");
        *products = upsert_product(&products, product);
        Ok(())
    }

    async fn delete(&self, ids: &[String]) -> StoreResult<usize> {
        let mut products = self.products.write().await;
        let before = products.len();
        *products = delete_products(&products, ids);
        let removed = before - products.len();
        info!(requested = ids.len(), removed, "Deleted products");
        Ok(removed)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn product(id: &str, name: &str) -> Product {
        Product {
            name: name.to_string(),
            sku: format!("SKU-{}", id),
            ..Product::blank(id, &[], NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_save_replaces_and_prepends() {
        let repo = ProductRepository::new(vec![product("P-1", "a"), product("P-2", "b")]);

        repo.save(product("P-2", "b2")).await.unwrap();
        repo.save(product("P-3", "c")).await.unwrap();

        let products = repo.list_products().await.unwrap();
        assert_eq!(ids(&products), ["P-3", "P-1", "P-2"]);
        assert_eq!(products[2].name, "b2");
    }

    #[tokio::test]
    async fn test_save_all_keeps_order() {
        let repo = ProductRepository::default();
        repo.save_all(vec![product("P-1", "a"), product("P-2", "b")])
            .await
            .unwrap();
        assert_eq!(ids(&repo.list_products().await.unwrap()), ["P-2", "P-1"]);
    }

    #[tokio::test]
    async fn test_delete_counts_removed() {
        let repo = ProductRepository::new(vec![product("P-1", "a"), product("P-2", "b")]);
        let removed = repo
            .delete(&["P-1".to_string(), "P-404".to_string()])
            .await
            .unwrap();
        assert_eq!(removed, 1);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_get_by_id_and_sku() {
        let repo = ProductRepository::new(vec![product("P-1", "a")]);
        assert_eq!(repo.get_by_id("P-1").await.unwrap().name, "a");
        assert!(matches!(
            repo.get_by_id("P-9").await,
            Err(StoreError::NotFound { .. })
        ));
        assert!(repo.get_by_sku("SKU-P-1").await.is_some());
        assert!(repo.get_by_sku("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_collection() {
        let repo = ProductRepository::default();
        let other = repo.clone();
        other.save(product("P-1", "a")).await.unwrap();
        assert_eq!(repo.count().await, 1);
    }
}
