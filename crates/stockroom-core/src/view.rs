//! # View Engine
//!
//! Computes the visible, ordered product list from the full collection and
//! the current [`ViewState`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        compute_view()                                   │
//! │                                                                         │
//! │  products ──► text ──► category ──► status ──► stable sort ──► result  │
//! │               │         │            │            │                     │
//! │               │         │            │            └─ price/stock: num   │
//! │               │         │            │               others: text       │
//! │               │         │            └─ "All" disables                  │
//! │               │         └─ exact name match, "All" disables             │
//! │               └─ case-insensitive substring of name / sku / id          │
//! │                                                                         │
//! │  The input slice is never mutated; the result borrows from it.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::selection::Selection;
use crate::types::{Category, Product, ProductStatus};
use crate::{ALL_LABEL, ALL_SENTINEL};

/// Exact spelling only; `"all"` names a category like any other string.
fn is_all_sentinel(value: &str) -> bool {
    value == ALL_SENTINEL || value == ALL_LABEL
}

// =============================================================================
// Filters
// =============================================================================

/// Category dimension of the view: everything, or one category name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category == *name,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if is_all_sentinel(&value) {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::from(value.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_SENTINEL.to_string(),
            CategoryFilter::Named(name) => name,
        }
    }
}

/// Status dimension of the view: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProductStatus),
}

impl StatusFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => product.status == *status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_all_sentinel(s) {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::All => ALL_SENTINEL.to_string(),
            StatusFilter::Only(status) => status.as_str().to_string(),
        }
    }
}

/// Case-insensitive substring match against name, SKU and id.
///
/// A blank query matches every product. A non-blank query is matched as
/// given, surrounding whitespace included.
pub fn matches_query(product: &Product, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [&product.name, &product.sku, &product.id]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

// =============================================================================
// Sorting
// =============================================================================

/// Columns the product table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SortField {
    Id,
    Name,
    Sku,
    Category,
    Price,
    Stock,
    Status,
    #[default]
    CreatedAt,
}

/// Comparable projection of a product for one [`SortField`].
///
/// A single field always yields the same variant, so the derived ordering
/// never compares a number with text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey<'a> {
    Number(i64),
    Text(Cow<'a, str>),
}

impl SortField {
    /// True for columns compared numerically.
    pub const fn is_numeric(&self) -> bool {
        matches!(self, SortField::Price | SortField::Stock)
    }

    /// Projects the sort key out of a product.
    pub fn key<'a>(&self, product: &'a Product) -> SortKey<'a> {
        match self {
            SortField::Price => SortKey::Number(product.price.minor()),
            SortField::Stock => SortKey::Number(i64::from(product.stock)),
            SortField::Id => SortKey::Text(Cow::Borrowed(&product.id)),
            SortField::Name => SortKey::Text(Cow::Borrowed(&product.name)),
            SortField::Sku => SortKey::Text(Cow::Borrowed(&product.sku)),
            SortField::Category => SortKey::Text(Cow::Borrowed(&product.category)),
            SortField::Status => SortKey::Text(Cow::Borrowed(product.status.label())),
            SortField::CreatedAt => {
                SortKey::Text(Cow::Owned(product.created_at.format("%Y-%m-%d").to_string()))
            }
        }
    }

    /// Ascending comparison of two products on this field.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }
}

impl FromStr for SortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "sku" => Ok(SortField::Sku),
            "category" => Ok(SortField::Category),
            "price" => Ok(SortField::Price),
            "stock" => Ok(SortField::Stock),
            "status" => Ok(SortField::Status),
            "createdAt" | "created_at" => Ok(SortField::CreatedAt),
            _ => Err(ValidationError::NotAllowed {
                field: "sort field".to_string(),
                allowed: [
                    "id", "name", "sku", "category", "price", "stock", "status", "createdAt",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Orients an ascending ordering. `Equal` stays `Equal`, which keeps the
    /// stable sort stable in both directions.
    #[inline]
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ValidationError::NotAllowed {
                field: "sort direction".to_string(),
                allowed: vec!["asc".to_string(), "desc".to_string()],
            }),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

/// Sort column plus direction. Defaults to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        SortState { field, direction }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        self.direction.apply(self.field.compare(a, b))
    }
}

// =============================================================================
// View State
// =============================================================================

/// Everything that decides which products are shown and in which order.
///
/// Owned by the caller for the duration of a session; the engine keeps no
/// state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ViewState {
    pub query: String,
    #[ts(type = "string")]
    pub category_filter: CategoryFilter,
    #[ts(type = "string")]
    pub status_filter: StatusFilter,
    pub sort: SortState,
    #[ts(type = "Array<string>")]
    pub selected_ids: Selection,
}

impl ViewState {
    /// True when `product` passes all three filter stages.
    pub fn admits(&self, product: &Product) -> bool {
        matches_query(product, &self.query)
            && self.category_filter.matches(product)
            && self.status_filter.matches(product)
    }
}

/// Filters and sorts `products` according to `state`.
///
/// The result is a subsequence of `products` (nothing invented, nothing
/// duplicated) ordered by `state.sort`; ties keep their input order.
///
/// ## Example
/// ```rust
/// use stockroom_core::view::{compute_view, StatusFilter, ViewState};
/// use stockroom_core::ProductStatus;
///
/// let state = ViewState {
///     status_filter: StatusFilter::Only(ProductStatus::Active),
///     ..ViewState::default()
/// };
/// assert!(compute_view(&[], &state).is_empty());
/// ```
pub fn compute_view<'a>(products: &'a [Product], state: &ViewState) -> Vec<&'a Product> {
    let mut list: Vec<&Product> = products
        .iter()
        .filter(|p| matches_query(p, &state.query))
        .filter(|p| state.category_filter.matches(p))
        .filter(|p| state.status_filter.matches(p))
        .collect();

    // slice::sort_by is stable
    list.sort_by(|a, b| state.sort.compare(a, b));
    list
}

/// Ids of the products `compute_view` would show, in display order.
pub fn visible_ids(products: &[Product], state: &ViewState) -> Vec<String> {
    compute_view(products, state)
        .into_iter()
        .map(|p| p.id.clone())
        .collect()
}

// =============================================================================
// Filter Options & Unknown Categories
// =============================================================================

/// Toolbar entries for the category filter: `All`, then every category name
/// in collection order.
pub fn category_filter_options(categories: &[Category]) -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(categories.iter().map(|c| CategoryFilter::Named(c.name.clone())))
        .collect()
}

/// Toolbar entries for the status filter: `All`, then every status.
pub fn status_filter_options() -> Vec<StatusFilter> {
    std::iter::once(StatusFilter::All)
        .chain(ProductStatus::ALL.iter().copied().map(StatusFilter::Only))
        .collect()
}

/// How a product's category should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryDisplay<'a> {
    /// The name matches a category in the tree.
    Known(&'a str),
    /// The name matches nothing; shown as unknown.
    Unknown(&'a str),
}

impl CategoryDisplay<'_> {
    pub fn is_known(&self) -> bool {
        matches!(self, CategoryDisplay::Known(_))
    }
}

pub fn category_display<'a>(product: &'a Product, categories: &[Category]) -> CategoryDisplay<'a> {
    if categories.iter().any(|c| c.name == product.category) {
        CategoryDisplay::Known(&product.category)
    } else {
        CategoryDisplay::Unknown(&product.category)
    }
}

/// Distinct category names used by products but absent from the tree, in
/// first-seen order.
pub fn orphaned_category_names<'a>(products: &'a [Product], categories: &[Category]) -> Vec<&'a str> {
    let mut orphans: Vec<&str> = Vec::new();
    for product in products {
        if !category_display(product, categories).is_known()
            && !orphans.contains(&product.category.as_str())
        {
            orphans.push(&product.category);
        }
    }
    orphans
}

// =============================================================================
// Summary
// =============================================================================

/// Counters shown in the toolbar and the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ViewSummary {
    pub total: usize,
    pub visible: usize,
    pub selected: usize,
    /// State of the "select all" checkbox.
    pub all_selected: bool,
}

impl ViewSummary {
    pub fn new(total: usize, visible: usize, selected: usize) -> Self {
        ViewSummary {
            total,
            visible,
            selected,
            all_selected: visible > 0 && selected == visible,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
