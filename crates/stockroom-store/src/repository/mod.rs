//! # Repository Module
//!
//! In-memory store implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dashboard command                                                      │
//! │       │                                                                 │
//! │       │  store.products().save(product)                                 │
//! │       ▼                                                                 │
//! │  ProductRepository / CategoryRepository                                 │
//! │  ├── implements ProductStore / CategoryStore                            │
//! │  └── Arc<RwLock<Vec<_>>>: clones share one collection                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> / Vec<Category> (insertion order = display order)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`] - Product list, full-replace save and delete
//! - [`CategoryRepository`] - Category list, add, update and delete

pub mod category;
pub mod product;

pub use category::CategoryRepository;
pub use product::ProductRepository;
