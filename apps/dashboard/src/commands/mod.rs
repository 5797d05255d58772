//! # Commands Module
//!
//! Every operation the dashboard screens call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── view.rs      ◄─── Search, filters, sort, selection
//! ├── product.rs   ◄─── Load, save, delete, bulk edit
//! ├── category.rs  ◄─── Category tree management
//! ├── lookup.rs    ◄─── Barcode scan, bulk-add list, text generation
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Pure view change, session only
//! fn set_query(session: &SessionState, query: &str)
//!
//! // Needs formatting
//! fn get_view(session: &SessionState, config: &DashboardConfig)
//!
//! // Writes through the collaborators
//! async fn save_product(stores: &StoreState, session: &SessionState, product: Product)
//! ```
//!
//! Commands return `Result<T, ApiError>` when they can fail; `T` is always
//! serializable so a frontend bridge can hand it over as JSON.

pub mod category;
pub mod config;
pub mod lookup;
pub mod product;
pub mod view;
