//! # Memory Store
//!
//! Entry point to the in-memory repositories.
//!
//! ```text
//! MemoryStore::seeded()
//!      │
//!      ├── products()   → ProductRepository   (shared Arc<RwLock<Vec<Product>>>)
//!      └── categories() → CategoryRepository  (shared Arc<RwLock<Vec<Category>>>)
//! ```
//!
//! Cloning a `MemoryStore` or a repository shares the underlying data.

use tracing::info;

use stockroom_core::{Category, Product};

use crate::repository::{CategoryRepository, ProductRepository};
use crate::seed;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    products: ProductRepository,
    categories: CategoryRepository,
}

impl MemoryStore {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        info!(
            products = products.len(),
            categories = categories.len(),
            "Opening in-memory store"
        );
        MemoryStore {
            products: ProductRepository::new(products),
            categories: CategoryRepository::new(categories),
        }
    }

    /// Store filled with the demo catalog.
    pub fn seeded() -> Self {
        MemoryStore::new(seed::initial_products(), seed::initial_categories())
    }

    /// Returns a ProductRepository sharing this store's products.
    pub fn products(&self) -> ProductRepository {
        self.products.clone()
    }

    /// Returns a CategoryRepository sharing this store's categories.
    pub fn categories(&self) -> CategoryRepository {
        self.categories.clone()
    }
}
