//! # Domain Types
//!
//! Core domain types used throughout the dashboard.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │  ProductDraft   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id  (P-…)      │   │  id  (C-…)      │   │  name?  sku?    │       │
//! │  │  sku, name      │   │  name ◄─────────┼───┤  category?      │       │
//! │  │  category ──────┼──►│  parent_id?     │   │  price? stock?  │       │
//! │  │  price, stock   │   └─────────────────┘   └─────────────────┘       │
//! │  │  status         │                                                    │
//! │  └─────────────────┘   ┌─────────────────┐                             │
//! │                        │  ProductStatus  │                             │
//! │                        │  Draft, Active  │                             │
//! │                        │  Hidden,        │                             │
//! │                        │  OutOfStock     │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Join by Name
//! `Product.category` holds a category **name**, not an id. A product whose
//! category name matches nothing is tolerated everywhere and shown as unknown.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product Status
// =============================================================================

/// Publication status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ProductStatus {
    /// Freshly created, not yet published.
    #[default]
    Draft,
    /// Visible in the storefront.
    Active,
    /// Kept in the catalog but not shown.
    Hidden,
    /// Sold out.
    OutOfStock,
}

impl ProductStatus {
    /// Every status, in toolbar order.
    pub const ALL: [ProductStatus; 4] = [
        ProductStatus::Draft,
        ProductStatus::Active,
        ProductStatus::Hidden,
        ProductStatus::OutOfStock,
    ];

    /// Canonical name, also the string the view engine sorts by.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "Draft",
            ProductStatus::Active => "Active",
            ProductStatus::Hidden => "Hidden",
            ProductStatus::OutOfStock => "OutOfStock",
        }
    }

    /// Localized label shown in the status pill.
    pub const fn label(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "Чернетка",
            ProductStatus::Active => "Активний",
            ProductStatus::Hidden => "Прихований",
            ProductStatus::OutOfStock => "Вичерпано",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = ValidationError;

    /// Accepts the canonical name (any case, `_`/`-`/space ignored) or the
    /// localized label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(status) = ProductStatus::ALL.iter().find(|st| st.label() == trimmed) {
            return Ok(*status);
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "draft" => Ok(ProductStatus::Draft),
            "active" => Ok(ProductStatus::Active),
            "hidden" => Ok(ProductStatus::Hidden),
            "outofstock" => Ok(ProductStatus::OutOfStock),
            _ => Err(ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: ProductStatus::ALL.iter().map(|s| s.as_str().to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// Free-form product attributes (e.g. `"power" → "320 W"`).
pub type Attributes = BTreeMap<String, String>;

/// A product in the inventory.
///
/// Saves are always a full replace keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Opaque, immutable identifier (`P-…`).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Stock Keeping Unit; doubles as the barcode for scanned items.
    pub sku: String,

    /// Category **name** (join key into the category list).
    pub category: String,

    /// Current price.
    pub price: Money,

    /// Previous price; zero means no discount is shown.
    #[serde(default)]
    pub old_price: Money,

    /// Units on hand.
    pub stock: u32,

    pub status: ProductStatus,

    /// Ordered image references.
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub attributes: Attributes,

    /// Creation date, the default sort key.
    #[ts(as = "String")]
    pub created_at: NaiveDate,
}

impl Product {
    /// True when a previous price should be struck through next to `price`.
    pub fn has_discount(&self) -> bool {
        !self.old_price.is_zero() && self.old_price > self.price
    }
}

// =============================================================================
// Category
// =============================================================================

/// A node of the two-level category tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    /// Stable identifier (`C-…`).
    pub id: String,

    /// Display name; products reference categories by this value.
    pub name: String,

    /// Parent id, `None` for a top-level category.
    pub parent_id: Option<String>,
}

impl Category {
    /// Creates a top-level category.
    pub fn top_level(id: impl Into<String>, name: impl Into<String>) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
            parent_id: None,
        }
    }

    /// Creates a child category under `parent_id`.
    pub fn child(id: impl Into<String>, name: impl Into<String>, parent_id: impl Into<String>) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
            parent_id: Some(parent_id.into()),
        }
    }

    #[inline]
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Input for creating a category; the guard assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewCategory {
    pub name: String,
    pub parent_id: Option<String>,
}

// =============================================================================
// Lookup Record
// =============================================================================

/// Partial product returned by the barcode/name lookup collaborators.
///
/// "Not found" is an ordinary outcome: the caller completes an empty draft
/// into a blank product and lets the user fill it in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub price: Option<Money>,
    pub stock: Option<u32>,
}

impl ProductDraft {
    /// Draft carrying only a scanned code, used when a lookup misses.
    pub fn from_code(code: impl Into<String>) -> Self {
        ProductDraft {
            sku: Some(code.into()),
            ..ProductDraft::default()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
