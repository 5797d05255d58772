//! # stockroom-core: Pure Business Logic for the Stockroom Dashboard
//!
//! This crate is the **heart** of the inventory dashboard. It contains the
//! product view engine and the category tree rules as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Stockroom Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard (apps/dashboard)                   │   │
//! │  │   Toolbar ──► Product Table ──► Bulk Actions ──► Category Mgr   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌───────────┐ ┌──────────┐ ┌──────────────────┐ │   │
//! │  │   │   view   │ │ selection │ │   bulk   │ │     category     │ │   │
//! │  │   │ filter + │ │  toggle   │ │  status  │ │  two-level tree  │ │   │
//! │  │   │   sort   │ │ all/none  │ │ markdown │ │      guard       │ │   │
//! │  │   └──────────┘ └───────────┘ └──────────┘ └──────────────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               stockroom-store (Collaborators)                   │   │
//! │  │        product/category stores, barcode lookup, text gen        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, ProductStatus, ...)
//! - [`money`] - Money type with integer arithmetic (minor units)
//! - [`error`] - Domain error types
//! - [`validation`] - Input boundary checks
//! - [`view`] - Filter → search → sort pipeline
//! - [`selection`] - Checked-row bookkeeping
//! - [`bulk`] - Bulk edits and price markdowns
//! - [`catalog`] - Whole-product mutations (blank, upsert, delete)
//! - [`category`] - Category tree guard
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::view::{compute_view, SortDirection, SortField, SortState, ViewState};
//!
//! use chrono::NaiveDate;
//! use stockroom_core::{Money, Product};
//!
//! let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let products = vec![
//!     Product { price: Money::from_minor(1000), ..Product::blank("P-1", &[], day) },
//!     Product { price: Money::from_minor(500), ..Product::blank("P-2", &[], day) },
//! ];
//! let state = ViewState {
//!     sort: SortState::new(SortField::Price, SortDirection::Asc),
//!     ..ViewState::default()
//! };
//!
//! let visible = compute_view(&products, &state);
//! let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
//! assert_eq!(ids, ["P-2", "P-1"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bulk;
pub mod catalog;
pub mod category;
pub mod error;
pub mod money;
pub mod selection;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use selection::Selection;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Canonical spelling of the "no filtering" sentinel.
pub const ALL_SENTINEL: &str = "All";

/// Localized spelling of the sentinel, as the dashboard toolbar shows it.
pub const ALL_LABEL: &str = "Всі";

/// Category names used when the category store is still empty.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Будматеріали",
    "Електроінструмент",
    "Сантехніка",
    "Фарби та лаки",
    "Електрика",
    "Меблева фурнітура",
];

/// Stock given to a product added from a lookup record without a stock count.
pub const DEFAULT_DRAFT_STOCK: u32 = 1;
