//! # Lookup Commands
//!
//! Barcode scanning, name search and the bulk-add list, plus the text
//! generators used by the product form and the SQL console.
//!
//! ## Bulk-Add Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  scan_barcode("2000000012345")        add_from_search(draft)            │
//! │         │                                    │                          │
//! │         ▼                                    │                          │
//! │  ProductLookup::by_barcode                   │                          │
//! │         │ miss → draft with sku only         │                          │
//! │         ▼                                    ▼                          │
//! │  Product::from_draft(fresh id) ──────► session.pending (scan order)     │
//! │                                              │                          │
//! │                        update_pending / remove_pending                  │
//! │                                              │                          │
//! │                                              ▼                          │
//! │  commit_bulk_add: validate all ──► ProductStore ──► catalog, pending=[] │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use chrono::Local;
use tracing::{debug, info, warn};

use stockroom_core::catalog::{add_products, generate_id, PRODUCT_ID_PREFIX};
use stockroom_core::validation::{validate_product, validate_sku};
use stockroom_core::{Product, ProductDraft};
use stockroom_store::{DescriptionRequest, ProductLookup, ProductStore, SqlRequest, TextGenerator};

use crate::error::ApiError;
use crate::state::{SessionState, StoreState};

// =============================================================================
// Lookup
// =============================================================================

/// Resolves a scanned code and appends the result to the bulk-add list.
///
/// An unknown code still adds a product, carrying the code as its SKU.
pub async fn scan_barcode(
    stores: &StoreState,
    session: &SessionState,
    code: &str,
) -> Result<Product, ApiError> {
    validate_sku(code)?;
    let code = code.trim();
    debug!(code = %code, "scan_barcode command");

    let draft = match stores.lookup().by_barcode(code).await? {
        Some(draft) => draft,
        None => {
            warn!(code = %code, "Unknown barcode, adding an empty draft");
            ProductDraft::from_code(code)
        }
    };

    Ok(add_from_search(session, draft))
}

/// Products whose name contains `query`.
pub async fn search_by_name(stores: &StoreState, query: &str) -> Result<Vec<ProductDraft>, ApiError> {
    let drafts = stores.lookup().by_name(query).await?;
    debug!(query = %query.trim(), count = drafts.len(), "search_by_name command");
    Ok(drafts)
}

/// Autocomplete for the product name field.
pub async fn suggest_names(stores: &StoreState, query: &str) -> Result<Vec<String>, ApiError> {
    Ok(stores.lookup().suggest_names(query).await?)
}

// =============================================================================
// Bulk-Add List
// =============================================================================

/// Completes `draft` into a product with a fresh id and appends it to the
/// bulk-add list.
pub fn add_from_search(session: &SessionState, draft: ProductDraft) -> Product {
    let today = Local::now().date_naive();
    session.with_session_mut(|s| {
        let id = {
            let taken: HashSet<&str> = s.taken_ids().collect();
            generate_id(PRODUCT_ID_PREFIX, |candidate| taken.contains(candidate))
        };
        let product = Product::from_draft(id, draft, &s.categories, today);
        s.pending.push(product.clone());
        debug!(id = %product.id, pending = s.pending.len(), "Added to bulk-add list");
        product
    })
}

pub fn list_pending(session: &SessionState) -> Vec<Product> {
    session.with_session(|s| s.pending.clone())
}

/// Replaces a pending product edited on the bulk-add screen.
pub fn update_pending(session: &SessionState, product: Product) -> Result<Product, ApiError> {
    session.with_session_mut(|s| {
        let slot = s
            .pending
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| ApiError::not_found("Pending product", &product.id))?;
        *slot = product.clone();
        Ok(product)
    })
}

/// Returns whether anything was removed.
pub fn remove_pending(session: &SessionState, id: &str) -> bool {
    session.with_session_mut(|s| {
        let before = s.pending.len();
        s.pending.retain(|p| p.id != id);
        before != s.pending.len()
    })
}

/// Saves the whole bulk-add list and moves it into the catalog.
///
/// The list must validate as a whole; on any failure nothing is saved.
/// Returns the number of products added.
pub async fn commit_bulk_add(stores: &StoreState, session: &SessionState) -> Result<usize, ApiError> {
    let _writing = session.write_guard().await;
    let pending = session.with_session(|s| s.pending.clone());
    if pending.is_empty() {
        return Ok(0);
    }

    for product in &pending {
        validate_product(product)
            .map_err(|e| ApiError::validation(format!("{}: {}", product.id, e)))?;
    }

    // Each save prepends, so the last product goes in first.
    stores
        .products()
        .save_all(pending.iter().rev().cloned().collect())
        .await?;

    let count = pending.len();
    session.with_session_mut(|s| {
        s.products = add_products(&s.products, pending);
        s.pending.clear();
    });
    info!(count, "Bulk add committed");
    Ok(count)
}

// =============================================================================
// Text Generation
// =============================================================================

pub async fn generate_description(
    stores: &StoreState,
    request: DescriptionRequest,
) -> Result<String, ApiError> {
    debug!(name = %request.name, "generate_description command");
    Ok(stores.text().describe(&request).await?)
}

pub async fn generate_sql(stores: &StoreState, request: SqlRequest) -> Result<String, ApiError> {
    if request.query.trim().is_empty() {
        return Err(ApiError::validation("query is required"));
    }
    debug!(query = %request.query, "generate_sql command");
    Ok(stores.text().sql(&request).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::product::load_catalog;
    use crate::error::ErrorCode;
    use stockroom_core::Money;
    use stockroom_store::generate::{fallback_sql, PRODUCT_SQL};

    async fn setup() -> (StoreState, SessionState) {
        let stores = StoreState::demo();
        let session = SessionState::default();
        load_catalog(&stores, &session).await.unwrap();
        (stores, session)
    }

    #[tokio::test]
    async fn test_scan_known_barcode() {
        let (stores, session) = setup().await;
        let product = scan_barcode(&stores, &session, " 2000000012345 ").await.unwrap();

        assert_eq!(product.name, "Цвяхи будівельні 100мм (кг)");
        assert_eq!(product.sku, "2000000012345");
        assert_eq!(product.category, "Будматеріали");
        assert_eq!(product.price, Money::from_major_minor(80, 0));
        assert_eq!(product.stock, 50);
        assert!(product.id.starts_with("P-"));
        assert_eq!(list_pending(&session).len(), 1);
    }

    #[tokio::test]
    async fn test_scan_unknown_barcode_adds_empty_draft() {
        let (stores, session) = setup().await;
        let product = scan_barcode(&stores, &session, "999").await.unwrap();
        assert_eq!(product.sku, "999");
        assert!(product.name.is_empty());
        assert_eq!(product.stock, 1);
    }

    #[tokio::test]
    async fn test_scan_rejects_blank_code() {
        let (stores, session) = setup().await;
        let err = scan_barcode(&stores, &session, "  ").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(list_pending(&session).is_empty());
    }

    #[tokio::test]
    async fn test_pending_ids_are_unique() {
        let (stores, session) = setup().await;
        let a = scan_barcode(&stores, &session, "111222333").await.unwrap();
        let b = scan_barcode(&stores, &session, "111222333").await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_commit_bulk_add() {
        let (stores, session) = setup().await;
        let first = scan_barcode(&stores, &session, "2000000012345").await.unwrap();
        let second = scan_barcode(&stores, &session, "4820012345678").await.unwrap();

        assert_eq!(commit_bulk_add(&stores, &session).await.unwrap(), 2);

        let stored = stores.products().list_products().await.unwrap();
        assert_eq!(stored.len(), 6);
        assert_eq!(stored[0].id, first.id);
        assert_eq!(stored[1].id, second.id);
        assert_eq!(session.with_session(|s| s.products[0].id.clone()), first.id);
        assert!(list_pending(&session).is_empty());
    }

    #[tokio::test]
    async fn test_commit_rejects_incomplete_draft() {
        let (stores, session) = setup().await;
        scan_barcode(&stores, &session, "2000000012345").await.unwrap();
        let mut blank = scan_barcode(&stores, &session, "999").await.unwrap();

        let err = commit_bulk_add(&stores, &session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(stores.products().list_products().await.unwrap().len(), 4);
        assert_eq!(list_pending(&session).len(), 2);

        blank.name = "Саморіз 4x40".to_string();
        update_pending(&session, blank).unwrap();
        assert_eq!(commit_bulk_add(&stores, &session).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_remove_pending() {
        let (stores, session) = setup().await;
        let product = scan_barcode(&stores, &session, "111222333").await.unwrap();
        assert!(remove_pending(&session, &product.id));
        assert!(!remove_pending(&session, &product.id));
        assert!(update_pending(&session, product).is_err());
    }

    #[tokio::test]
    async fn test_search_and_suggest() {
        let (stores, session) = setup().await;
        let drafts = search_by_name(&stores, "фарба").await.unwrap();
        assert!(!drafts.is_empty());

        let added = add_from_search(&session, drafts[0].clone());
        assert_eq!(added.stock, 1);

        assert!(suggest_names(&stores, "ш").await.unwrap().is_empty());
        let names = suggest_names(&stores, "шуруп").await.unwrap();
        assert_eq!(names.len(), 2);
    }

    #[tokio::test]
    async fn test_text_generation() {
        let (stores, _) = setup().await;
        let description = generate_description(
            &stores,
            DescriptionRequest {
                name: "Дриль".to_string(),
                category: None,
            },
        )
        .await
        .unwrap();
        assert!(description.starts_with("Дриль:"));

        let request = SqlRequest {
            query: "усі товари дорожчі за 100".to_string(),
            schema: None,
        };
        assert_eq!(fallback_sql(&request), PRODUCT_SQL);
        assert_eq!(generate_sql(&stores, request).await.unwrap(), PRODUCT_SQL);

        let empty = SqlRequest::default();
        assert!(generate_sql(&stores, empty).await.is_err());
    }
}
