//! # stockroom-store: Collaborators for the Stockroom Dashboard
//!
//! This crate defines the contracts the dashboard talks to and ships
//! in-memory adapters for each of them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Dashboard command (save_product)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  Contracts    │    │  Repositories │    │  Adapters    │  │   │
//! │  │   │(contracts.rs) │    │ (repository/) │    │              │  │   │
//! │  │   │               │    │               │    │ MockLookup   │  │   │
//! │  │   │ ProductStore  │◄───│ ProductRepo   │    │ Fallback     │  │   │
//! │  │   │ CategoryStore │◄───│ CategoryRepo  │    │ TextGenerator│  │   │
//! │  │   │ ProductLookup │    │               │    │ seed data    │  │   │
//! │  │   │ TextGenerator │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`contracts`] - Collaborator traits and request records
//! - [`error`] - Store error types
//! - [`memory`] - `MemoryStore`, the entry point to the repositories
//! - [`repository`] - In-memory product and category repositories
//! - [`lookup`] - Barcode/name lookup over a fixed table
//! - [`generate`] - Deterministic description and SQL text
//! - [`seed`] - Demo catalog
//!
//! ## Usage
//!
//! ```rust
//! use stockroom_store::{MemoryStore, ProductStore};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = MemoryStore::seeded();
//! let products = store.products().list_products().await.unwrap();
//! assert_eq!(products[0].id, "P-1001");
//! # });
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod contracts;
pub mod error;
pub mod generate;
pub mod lookup;
pub mod memory;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use contracts::{
    CategoryStore, DescriptionRequest, ProductLookup, ProductStore, SqlRequest, TextGenerator,
};
pub use error::{StoreError, StoreResult};
pub use generate::FallbackTextGenerator;
pub use lookup::MockLookup;
pub use memory::MemoryStore;

// Repository re-exports for convenience
pub use repository::{CategoryRepository, ProductRepository};
