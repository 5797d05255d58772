//! # Product Commands
//!
//! Loading, saving, deleting and bulk-editing products.
//!
//! ## Write Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Write Flow                                   │
//! │                                                                         │
//! │  0. Take the write guard (held until the command returns)               │
//! │  1. Lock session ──► compute the new collection with stockroom-core     │
//! │                      (upsert / delete / bulk edit), unlock              │
//! │  2. Write the touched products to the ProductStore (.await)             │
//! │  3. Lock session ──► install the new collection, prune selection        │
//! │                                                                         │
//! │  A store failure in step 2 leaves the session untouched.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use chrono::Local;
use tracing::{debug, info};

use stockroom_core::bulk::{affected_ids, apply_bulk_edit, apply_bulk_price_delta, BulkEdit};
use stockroom_core::catalog::{delete_products as remove_products, new_product_id, upsert_product};
use stockroom_core::validation::validate_product;
use stockroom_core::view::ViewSummary;
use stockroom_core::Product;
use stockroom_store::{CategoryStore, ProductStore};

use crate::error::ApiError;
use crate::state::{SessionState, StoreState};

/// Refreshes the session snapshot from the stores.
///
/// Selected ids that no longer exist are dropped.
pub async fn load_catalog(stores: &StoreState, session: &SessionState) -> Result<ViewSummary, ApiError> {
    let start = Instant::now();
    let _writing = session.write_guard().await;

    let products = stores.products().list_products().await?;
    let categories = stores.categories().list_categories().await?;

    let summary = session.with_session_mut(|s| {
        s.products = products;
        s.categories = categories;
        s.prune_selection();
        s.summary()
    });

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        products = summary.total,
        "load_catalog complete"
    );
    Ok(summary)
}

/// Gets a single product from the session by id.
pub fn get_product(session: &SessionState, id: &str) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product command");
    session
        .with_session(|s| s.products.iter().find(|p| p.id == id).cloned())
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// A fresh, unsaved product for the edit form.
pub fn create_blank_product(session: &SessionState) -> Product {
    let today = Local::now().date_naive();
    session.with_session(|s| {
        let id = new_product_id(&s.products);
        debug!(id = %id, "create_blank_product command");
        Product::blank(id, &s.categories, today)
    })
}

/// Validates and saves a product (full replace by id, or prepend if new).
pub async fn save_product(
    stores: &StoreState,
    session: &SessionState,
    product: Product,
) -> Result<Product, ApiError> {
    validate_product(&product)?;
    debug!(id = %product.id, "save_product command");
    let _writing = session.write_guard().await;

    stores.products().save(product.clone()).await?;

    session.with_session_mut(|s| {
        s.products = upsert_product(&s.products, product.clone());
    });
    info!(id = %product.id, "Product saved");
    Ok(product)
}

/// Deletes the listed products and drops them from the selection.
///
/// Returns the number of products removed.
pub async fn delete_products(
    stores: &StoreState,
    session: &SessionState,
    ids: Vec<String>,
) -> Result<usize, ApiError> {
    debug!(count = ids.len(), "delete_products command");
    if ids.is_empty() {
        return Ok(0);
    }
    let _writing = session.write_guard().await;

    let removed = stores.products().delete(&ids).await?;

    session.with_session_mut(|s| {
        s.products = remove_products(&s.products, &ids);
        s.prune_selection();
    });
    info!(requested = ids.len(), removed, "Products deleted");
    Ok(removed)
}

/// Deletes every selected product.
///
/// The selection is read before the write guard is taken.
pub async fn delete_selected(stores: &StoreState, session: &SessionState) -> Result<usize, ApiError> {
    let ids = session.with_session(|s| s.view.selected_ids.to_vec());
    delete_products(stores, session, ids).await
}

/// Applies a status or category change to every selected product.
///
/// Returns the number of products changed.
pub async fn bulk_edit(
    stores: &StoreState,
    session: &SessionState,
    edit: BulkEdit,
) -> Result<usize, ApiError> {
    debug!(edit = ?edit, "bulk_edit command");
    let _writing = session.write_guard().await;
    let (next, changed) = session.with_session(|s| {
        (
            apply_bulk_edit(&s.products, &s.view.selected_ids, &edit),
            affected_ids(&s.products, &s.view.selected_ids),
        )
    });
    write_back(stores, session, next, changed).await
}

/// Lowers the price of every selected product by `percentage` percent.
pub async fn bulk_markdown(
    stores: &StoreState,
    session: &SessionState,
    percentage: u32,
) -> Result<usize, ApiError> {
    debug!(percentage, "bulk_markdown command");
    let _writing = session.write_guard().await;
    let (next, changed) = session.with_session(|s| {
        (
            apply_bulk_price_delta(&s.products, &s.view.selected_ids, percentage),
            affected_ids(&s.products, &s.view.selected_ids),
        )
    });
    write_back(stores, session, next, changed).await
}

async fn write_back(
    stores: &StoreState,
    session: &SessionState,
    next: Vec<Product>,
    changed: Vec<String>,
) -> Result<usize, ApiError> {
    let touched: Vec<Product> = next
        .iter()
        .filter(|p| changed.contains(&p.id))
        .cloned()
        .collect();

    stores.products().save_all(touched).await?;

    session.with_session_mut(|s| s.products = next);
    info!(count = changed.len(), "Bulk update written");
    Ok(changed.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::view::toggle_selection;
    use stockroom_core::{Money, ProductStatus};

    async fn setup() -> (StoreState, SessionState) {
        let stores = StoreState::demo();
        let session = SessionState::default();
        load_catalog(&stores, &session).await.unwrap();
        (stores, session)
    }

    #[tokio::test]
    async fn test_load_catalog() {
        let (_, session) = setup().await;
        let summary = session.with_session(|s| s.summary());
        assert_eq!(summary.total, 4);
        assert_eq!(session.with_session(|s| s.categories.len()), 6);
    }

    #[tokio::test]
    async fn test_save_new_product_prepends() {
        let (stores, session) = setup().await;
        let mut product = create_blank_product(&session);
        product.name = "Кутник сталевий 50x50".to_string();
        product.sku = "ANG-50".to_string();
        product.price = Money::from_major_minor(35, 0);

        save_product(&stores, &session, product.clone()).await.unwrap();

        let stored = stores.products().list_products().await.unwrap();
        assert_eq!(stored[0].id, product.id);
        assert_eq!(session.with_session(|s| s.products[0].id.clone()), product.id);
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_product() {
        let (stores, session) = setup().await;
        let product = create_blank_product(&session);
        let err = save_product(&stores, &session, product).await.unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);
        assert_eq!(stores.products().list_products().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_delete_prunes_selection() {
        let (stores, session) = setup().await;
        toggle_selection(&session, "P-1001");
        toggle_selection(&session, "P-1002");

        let removed = delete_products(&stores, &session, vec!["P-1001".to_string()])
            .await
            .unwrap();

        assert_eq!(removed, 1);
        assert_eq!(
            session.with_session(|s| s.view.selected_ids.to_vec()),
            ["P-1002"]
        );
        assert_eq!(stores.products().list_products().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_delete_selected() {
        let (stores, session) = setup().await;
        toggle_selection(&session, "P-1003");
        assert_eq!(delete_selected(&stores, &session).await.unwrap(), 1);
        assert!(session.with_session(|s| s.view.selected_ids.is_empty()));
        assert!(get_product(&session, "P-1003").is_err());
    }

    #[tokio::test]
    async fn test_bulk_edit_writes_back_to_store() {
        let (stores, session) = setup().await;
        toggle_selection(&session, "P-1001");
        toggle_selection(&session, "P-1004");

        let changed = bulk_edit(&stores, &session, BulkEdit::Status(ProductStatus::Hidden))
            .await
            .unwrap();
        assert_eq!(changed, 2);

        let stored = stores.products().list_products().await.unwrap();
        let hidden = stored.iter().filter(|p| p.status == ProductStatus::Hidden).count();
        assert_eq!(hidden, 3);
        assert_eq!(get_product(&session, "P-1004").unwrap().status, ProductStatus::Hidden);
        // Store saves replace in place, so order survives.
        let ids: Vec<&str> = stored.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P-1001", "P-1002", "P-1003", "P-1004"]);
    }

    #[tokio::test]
    async fn test_bulk_markdown() {
        let (stores, session) = setup().await;
        toggle_selection(&session, "P-1002");

        // 1199.00 * 0.9 = 1079.10, rounded to a whole hryvnia
        bulk_markdown(&stores, &session, 10).await.unwrap();

        assert_eq!(get_product(&session, "P-1002").unwrap().price.minor(), 107_900);
        assert_eq!(get_product(&session, "P-1001").unwrap().price.minor(), 289_900);
        let stored = stores.products().list_products().await.unwrap();
        assert_eq!(stored[1].price.minor(), 107_900);
    }

    #[tokio::test]
    async fn test_concurrent_saves_both_land() {
        let (stores, session) = setup().await;
        let mut first = create_blank_product(&session);
        first.name = "Кутник 40x40".to_string();
        first.sku = "ANG-40".to_string();
        first.price = Money::from_major_minor(30, 0);
        let mut second = first.clone();
        second.id = format!("{}-B", first.id);
        second.sku = "ANG-41".to_string();

        let (a, b) = tokio::join!(
            save_product(&stores, &session, first.clone()),
            save_product(&stores, &session, second.clone()),
        );
        a.unwrap();
        b.unwrap();

        let stored: Vec<String> = stores
            .products()
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        let held: Vec<String> = session.with_session(|s| s.products.iter().map(|p| p.id.clone()).collect());
        assert_eq!(held, stored);
        assert!(held.contains(&first.id) && held.contains(&second.id));
    }

    #[tokio::test]
    async fn test_markdown_and_status_edit_do_not_clobber() {
        let (stores, session) = setup().await;
        toggle_selection(&session, "P-1002");

        let (a, b) = tokio::join!(
            bulk_markdown(&stores, &session, 10),
            bulk_edit(&stores, &session, BulkEdit::Status(ProductStatus::Hidden)),
        );
        a.unwrap();
        b.unwrap();

        let held = get_product(&session, "P-1002").unwrap();
        assert_eq!(held.price.minor(), 107_900);
        assert_eq!(held.status, ProductStatus::Hidden);
        let stored = stores.products().list_products().await.unwrap();
        assert_eq!(stored[1], held);
    }
}
