//! # View Commands
//!
//! Toolbar and table interactions: search, filters, sort and row selection.
//!
//! ## Toolbar Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  🔍 [ шуруп     ]  [Категорія: Всі ▾]  [Статус: Активний ▾]  [Ціна ↑]  │
//! │        │                  │                     │                │      │
//! │   set_query     set_category_filter    set_status_filter   set_sort_*  │
//! │        └──────────────────┴─────────────────────┴────────────────┘      │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                     ViewState updated in the session                    │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                  get_view() → compute_view() → ProductRow[]             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Changing a filter never touches the selection; ids selected under one
//! filter stay selected while hidden.

use serde::Serialize;
use tracing::debug;

use stockroom_core::validation::validate_search_query;
use stockroom_core::view::{
    category_display, category_filter_options, orphaned_category_names, status_filter_options,
    CategoryFilter, SortDirection, SortField, SortState, StatusFilter, ViewState, ViewSummary,
};
use stockroom_core::{Category, Product, Selection};

use crate::error::ApiError;
use crate::state::{DashboardConfig, SessionState};

/// One row of the product table, formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    /// False when the category name matches nothing in the tree.
    pub category_known: bool,
    pub price: String,
    /// Crossed-out price, only when it is above the current one.
    pub old_price: Option<String>,
    pub stock: u32,
    pub status: String,
    pub created_at: String,
    pub selected: bool,
}

impl ProductRow {
    fn new(
        product: &Product,
        categories: &[Category],
        selection: &Selection,
        config: &DashboardConfig,
    ) -> Self {
        ProductRow {
            id: product.id.clone(),
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            category_known: category_display(product, categories).is_known(),
            price: config.format_money(product.price),
            old_price: product
                .has_discount()
                .then(|| config.format_money(product.old_price)),
            stock: product.stock,
            status: product.status.label().to_string(),
            created_at: product.created_at.format("%Y-%m-%d").to_string(),
            selected: selection.contains(&product.id),
        }
    }
}

/// Everything the product screen renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub rows: Vec<ProductRow>,
    pub summary: ViewSummary,
    pub view: ViewState,
    pub category_options: Vec<String>,
    pub status_options: Vec<String>,
    /// Category names used by products but missing from the tree.
    pub orphaned_categories: Vec<String>,
}

/// Computes the current product table.
pub fn get_view(session: &SessionState, config: &DashboardConfig) -> ViewResponse {
    session.with_session(|s| {
        let rows: Vec<ProductRow> = s
            .visible()
            .into_iter()
            .map(|p| ProductRow::new(p, &s.categories, &s.view.selected_ids, config))
            .collect();

        debug!(visible = rows.len(), total = s.products.len(), "get_view command");

        ViewResponse {
            summary: s.summary(),
            view: s.view.clone(),
            category_options: category_filter_options(&s.categories)
                .iter()
                .map(|f| config.category_filter_label(f))
                .collect(),
            status_options: status_filter_options()
                .iter()
                .map(|f| config.status_filter_label(f))
                .collect(),
            orphaned_categories: orphaned_category_names(&s.products, &s.categories)
                .into_iter()
                .map(str::to_string)
                .collect(),
            rows,
        }
    })
}

/// Sets the search text. The stored query is trimmed.
pub fn set_query(session: &SessionState, query: &str) -> Result<ViewSummary, ApiError> {
    let query = validate_search_query(query)?;
    debug!(query = %query, "set_query command");
    Ok(session.with_session_mut(|s| {
        s.view.query = query;
        s.summary()
    }))
}

/// Sets the category filter. The configured "All" label also clears it.
pub fn set_category_filter(
    session: &SessionState,
    config: &DashboardConfig,
    value: &str,
) -> ViewSummary {
    let filter = if value.trim() == config.all_label {
        CategoryFilter::All
    } else {
        CategoryFilter::from(value)
    };
    debug!(filter = ?filter, "set_category_filter command");
    session.with_session_mut(|s| {
        s.view.category_filter = filter;
        s.summary()
    })
}

/// Sets the status filter from a status name, a label or an "All" spelling.
pub fn set_status_filter(
    session: &SessionState,
    config: &DashboardConfig,
    value: &str,
) -> Result<ViewSummary, ApiError> {
    let filter = if value.trim() == config.all_label {
        StatusFilter::All
    } else {
        value.parse::<StatusFilter>()?
    };
    debug!(filter = ?filter, "set_status_filter command");
    Ok(session.with_session_mut(|s| {
        s.view.status_filter = filter;
        s.summary()
    }))
}

pub fn set_sort_field(session: &SessionState, field: &str) -> Result<SortState, ApiError> {
    let field = field.parse::<SortField>()?;
    Ok(session.with_session_mut(|s| {
        s.view.sort.field = field;
        s.view.sort
    }))
}

pub fn set_sort_direction(session: &SessionState, direction: &str) -> Result<SortState, ApiError> {
    let direction = direction.parse::<SortDirection>()?;
    Ok(session.with_session_mut(|s| {
        s.view.sort.direction = direction;
        s.view.sort
    }))
}

/// Row checkbox. Ids not in the catalog leave the selection unchanged.
pub fn toggle_selection(session: &SessionState, id: &str) -> ViewSummary {
    debug!(id = %id, "toggle_selection command");
    session.with_session_mut(|s| {
        if s.products.iter().any(|p| p.id == id) {
            s.view.selected_ids = s.view.selected_ids.toggled(id);
        } else {
            debug!(id = %id, "Toggle ignored, product not found");
        }
        s.summary()
    })
}

/// Header checkbox: clears, or selects exactly the visible rows.
pub fn select_all(session: &SessionState) -> ViewSummary {
    session.with_session_mut(|s| {
        let visible = s.visible_ids();
        s.view.selected_ids = s.view.selected_ids.all_or_none(visible);
        debug!(selected = s.view.selected_ids.len(), "select_all command");
        s.summary()
    })
}

pub fn clear_selection(session: &SessionState) -> ViewSummary {
    session.with_session_mut(|s| {
        s.view.selected_ids = Selection::new();
        s.summary()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockroom_core::{Money, ProductStatus};

    fn product(id: &str, name: &str, category: &str, status: ProductStatus, price: i64) -> Product {
        Product {
            name: name.to_string(),
            sku: format!("SKU-{}", id),
            category: category.to_string(),
            status,
            price: Money::from_minor(price),
            ..Product::blank(id, &[], NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        }
    }

    fn session() -> SessionState {
        let state = SessionState::default();
        state.with_session_mut(|s| {
            s.categories = vec![Category::top_level("C-1", "A"), Category::top_level("C-2", "B")];
            s.products = vec![
                product("P-1", "Дриль", "A", ProductStatus::Active, 1000),
                product("P-2", "Фарба", "B", ProductStatus::Hidden, 500),
                product("P-3", "Дюбель", "Z", ProductStatus::Active, 200),
            ];
        });
        state
    }

    #[test]
    fn test_get_view_formats_rows() {
        let config = DashboardConfig::default();
        let view = get_view(&session(), &config);
        assert_eq!(view.rows.len(), 3);
        let row = view.rows.iter().find(|r| r.id == "P-3").unwrap();
        assert!(!row.category_known);
        assert_eq!(row.price, "2.00 ₴");
        assert_eq!(row.status, "Активний");
        assert_eq!(view.orphaned_categories, ["Z"]);
        assert_eq!(view.category_options, ["Всі", "A", "B"]);
        assert_eq!(view.status_options.len(), 5);
    }

    #[test]
    fn test_filters_and_sort() {
        let config = DashboardConfig::default();
        let state = session();

        let summary = set_status_filter(&state, &config, "Active").unwrap();
        assert_eq!(summary.visible, 2);

        set_sort_field(&state, "price").unwrap();
        set_sort_direction(&state, "asc").unwrap();
        let ids: Vec<String> = get_view(&state, &config).rows.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["P-3", "P-1"]);

        let summary = set_category_filter(&state, &config, "A");
        assert_eq!(summary.visible, 1);

        let summary = set_category_filter(&state, &config, "Всі");
        assert_eq!(summary.visible, 2);
        let summary = set_status_filter(&state, &config, "Всі").unwrap();
        assert_eq!(summary.visible, 3);
    }

    #[test]
    fn test_query_is_trimmed() {
        let state = session();
        let summary = set_query(&state, "  дри ").unwrap();
        assert_eq!(summary.visible, 1);
        assert_eq!(state.with_session(|s| s.view.query.clone()), "дри");
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let config = DashboardConfig::default();
        let state = session();
        assert!(set_status_filter(&state, &config, "Archived").is_err());
        assert!(set_sort_field(&state, "oldPrice").is_err());
        assert!(set_sort_direction(&state, "sideways").is_err());
    }

    #[test]
    fn test_selection_commands() {
        let config = DashboardConfig::default();
        let state = session();

        let summary = toggle_selection(&state, "P-2");
        assert_eq!(summary.selected, 1);

        set_status_filter(&state, &config, "Active").unwrap();
        let summary = select_all(&state);
        assert_eq!(summary.selected, 2);
        assert!(summary.all_selected);
        assert!(!state.with_session(|s| s.view.selected_ids.contains("P-2")));

        let summary = select_all(&state);
        assert_eq!(summary.selected, 0);

        toggle_selection(&state, "P-1");
        assert_eq!(clear_selection(&state).selected, 0);
    }

    #[test]
    fn test_toggle_unknown_id_is_ignored() {
        let state = session();

        toggle_selection(&state, "P-404");
        let summary = toggle_selection(&state, "P-405");
        assert_eq!(summary.selected, 0);
        assert!(state.with_session(|s| s.view.selected_ids.is_empty()));

        toggle_selection(&state, "P-1");
        toggle_selection(&state, "P-404");
        toggle_selection(&state, "P-405");
        let summary = select_all(&state);
        assert_eq!(summary.selected, 3);
        assert!(summary.all_selected);
    }
}
