//! # Category Commands
//!
//! The category screen: list, add, rename/re-parent, delete.
//!
//! Every write goes through the tree guard in `stockroom_core::category`
//! first. Only a change the guard accepts reaches the [`CategoryStore`].
//! Writes run under the session write guard, so each one checks the tree
//! the previous one left behind.
//!
//! ```text
//! add_category(NewCategory)
//!      │
//!      ├── guard rejects ──► ApiError (VALIDATION_ERROR / BUSINESS_LOGIC)
//!      │
//!      └── guard accepts ──► CategoryStore::add ──► session.categories = next
//! ```

use serde::Serialize;
use tracing::{debug, info, warn};

use stockroom_core::category::{
    self as guard, children_of, parent_name, top_level_choices, DeleteOutcome,
};
use stockroom_core::{Category, NewCategory};
use stockroom_store::CategoryStore;

use crate::error::ApiError;
use crate::state::{SessionState, StoreState};

/// One row of the category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    /// Parent name, when the parent still exists.
    pub parent_name: Option<String>,
    pub children: usize,
}

/// The category table, in collection order.
pub fn list_categories(session: &SessionState) -> Vec<CategoryRow> {
    session.with_session(|s| {
        s.categories
            .iter()
            .map(|c| CategoryRow {
                id: c.id.clone(),
                name: c.name.clone(),
                parent_id: c.parent_id.clone(),
                parent_name: parent_name(&s.categories, c).map(str::to_string),
                children: children_of(&s.categories, &c.id).len(),
            })
            .collect()
    })
}

/// Categories the form may offer as parent.
pub fn parent_choices(session: &SessionState, editing_id: Option<&str>) -> Vec<Category> {
    session.with_session(|s| {
        top_level_choices(&s.categories, editing_id)
            .into_iter()
            .cloned()
            .collect()
    })
}

pub async fn add_category(
    stores: &StoreState,
    session: &SessionState,
    new_category: NewCategory,
) -> Result<Category, ApiError> {
    debug!(name = %new_category.name, "add_category command");
    let _writing = session.write_guard().await;
    let (next, created) = session.with_session(|s| guard::add_category(&s.categories, new_category))?;

    stores.categories().add(created.clone()).await?;

    session.with_session_mut(|s| s.categories = next);
    info!(id = %created.id, name = %created.name, "Category created");
    Ok(created)
}

/// Replaces a category. Unknown ids change nothing and skip the store.
pub async fn update_category(
    stores: &StoreState,
    session: &SessionState,
    category: Category,
) -> Result<Vec<CategoryRow>, ApiError> {
    debug!(id = %category.id, "update_category command");
    let id = category.id.clone();
    let _writing = session.write_guard().await;
    let next = session.with_session(|s| guard::update_category(&s.categories, category))?;

    let Some(saved) = next.iter().find(|c| c.id == id).cloned() else {
        debug!(id = %id, "Update ignored, category not found");
        return Ok(list_categories(session));
    };

    stores.categories().update(saved).await?;

    session.with_session_mut(|s| s.categories = next);
    info!(id = %id, "Category updated");
    Ok(list_categories(session))
}

/// Deletes a category unless it still has subcategories.
///
/// A blocked deletion is reported through the outcome; nothing is written.
pub async fn delete_category(
    stores: &StoreState,
    session: &SessionState,
    id: &str,
) -> Result<DeleteOutcome, ApiError> {
    debug!(id = %id, "delete_category command");
    let _writing = session.write_guard().await;
    let deletion = session.with_session(|s| guard::delete_category(&s.categories, id));

    match deletion.outcome {
        DeleteOutcome::Blocked { children } => {
            warn!(id = %id, children, "Category has subcategories, not deleted");
        }
        DeleteOutcome::NotFound => {
            debug!(id = %id, "Delete ignored, category not found");
        }
        DeleteOutcome::Removed => {
            stores.categories().delete(id).await?;
            session.with_session_mut(|s| s.categories = deletion.categories);
            info!(id = %id, "Category deleted");
        }
    }

    Ok(deletion.outcome)
}
