//! # Category Repository
//!
//! In-memory category collection behind the [`CategoryStore`] contract.
//!
//! The repository stores what it is given. Depth and parent rules are
//! checked by `stockroom_core::category` before a write reaches it.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use stockroom_core::Category;

use crate::contracts::CategoryStore;
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Clone, Default)]
pub struct CategoryRepository {
    categories: Arc<RwLock<Vec<Category>>>,
}

impl CategoryRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        CategoryRepository {
            categories: Arc::new(RwLock::new(categories)),
        }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let categories = self.categories.read().await;
        debug!(count = categories.len(), "Listing categories");
        Ok(categories.clone())
    }

    async fn add(&self, category: Category) -> StoreResult<()> {
        let mut categories = self.categories.write().await;
        if categories.iter().any(|c| c.id == category.id) {
            return Err(StoreError::duplicate("category id", category.id));
        }
        info!(id = %category.id, name = %category.name, "Adding category");
        categories.insert(0, category);
        Ok(())
    }

    async fn update(&self, category: Category) -> StoreResult<()> {
        let mut categories = self.categories.write().await;
        let slot = categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| StoreError::not_found("Category", category.id.clone()))?;
        info!(id = %category.id, name = %category.name, "Updating category");
        *slot = category;
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut categories = self.categories.write().await;
        let before = categories.len();
        categories.retain(|c| c.id != id);
        let removed = categories.len() < before;
        info!(id = %id, removed, "Deleting category");
        Ok(removed)
    }
}
