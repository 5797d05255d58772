//! # Category Tree Guard
//!
//! Keeps the category collection a forest of depth at most two.
//!
//! ## Tree Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Будматеріали (C-1)            ◄── top-level: parent_id = None          │
//! │  ├── Цемент (C-7)              ◄── child: parent_id = C-1               │
//! │  └── Гіпс (C-8)                                                         │
//! │  Сантехніка (C-3)                                                       │
//! │                                                                         │
//! │  ✗ Портландцемент under Цемент  ParentNotTopLevel (would be depth 3)    │
//! │  ✗ delete Будматеріали          blocked while C-7/C-8 exist             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! After any operation here, every `parent_id` references an existing
//! top-level category. Children are never deleted or reparented as a side
//! effect.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{generate_id, CATEGORY_ID_PREFIX};
use crate::error::{CoreError, CoreResult};
use crate::types::{Category, NewCategory};
use crate::validation::{validate_category, validate_new_category};

// =============================================================================
// Queries
// =============================================================================

/// Categories whose parent is `id`, in collection order.
pub fn children_of<'a>(categories: &'a [Category], id: &str) -> Vec<&'a Category> {
    categories
        .iter()
        .filter(|c| c.parent_id.as_deref() == Some(id))
        .collect()
}

/// Name of the parent of `category`, if it has one that still exists.
pub fn parent_name<'a>(categories: &'a [Category], category: &Category) -> Option<&'a str> {
    let parent_id = category.parent_id.as_deref()?;
    categories
        .iter()
        .find(|c| c.id == parent_id)
        .map(|c| c.name.as_str())
}

/// Parent options for the category form: every top-level category except
/// the one being edited.
pub fn top_level_choices<'a>(categories: &'a [Category], editing_id: Option<&str>) -> Vec<&'a Category> {
    categories
        .iter()
        .filter(|c| c.is_top_level() && Some(c.id.as_str()) != editing_id)
        .collect()
}

/// Fresh category id unused by `categories`.
pub fn new_category_id(categories: &[Category]) -> String {
    let taken: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    generate_id(CATEGORY_ID_PREFIX, |candidate| taken.contains(candidate))
}

fn check_parent(categories: &[Category], name: &str, parent_id: Option<&str>) -> CoreResult<()> {
    let Some(parent_id) = parent_id else {
        return Ok(());
    };

    let parent = categories
        .iter()
        .find(|c| c.id == parent_id)
        .ok_or_else(|| CoreError::ParentNotFound {
            category: name.to_string(),
            parent_id: parent_id.to_string(),
        })?;

    if !parent.is_top_level() {
        return Err(CoreError::ParentNotTopLevel {
            category: name.to_string(),
            parent_id: parent_id.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Add
// =============================================================================

/// Creates a category with a fresh id and prepends it.
///
/// Returns the new collection together with the created entry.
///
/// ```rust
/// use stockroom_core::category::add_category;
/// use stockroom_core::{Category, NewCategory};
///
/// let tree = vec![Category::top_level("C-1", "Будматеріали")];
/// let (tree, created) = add_category(&tree, NewCategory {
///     name: "Цемент".to_string(),
///     parent_id: Some("C-1".to_string()),
/// }).unwrap();
///
/// assert_eq!(tree[0], created);
/// assert_eq!(tree.len(), 2);
/// ```
pub fn add_category(categories: &[Category], new_category: NewCategory) -> CoreResult<(Vec<Category>, Category)> {
    validate_new_category(&new_category)?;
    check_parent(categories, &new_category.name, new_category.parent_id.as_deref())?;

    let created = Category {
        id: new_category_id(categories),
        name: new_category.name.trim().to_string(),
        parent_id: new_category.parent_id,
    };

    let mut next = Vec::with_capacity(categories.len() + 1);
    next.push(created.clone());
    next.extend_from_slice(categories);
    Ok((next, created))
}

// =============================================================================
// Update
// =============================================================================

/// Replaces the category with the same id.
///
/// An unknown id leaves the collection unchanged.
pub fn update_category(categories: &[Category], updated: Category) -> CoreResult<Vec<Category>> {
    let Some(index) = categories.iter().position(|c| c.id == updated.id) else {
        return Ok(categories.to_vec());
    };

    validate_category(&updated)?;

    if let Some(parent_id) = updated.parent_id.as_deref() {
        if parent_id == updated.id {
            return Err(CoreError::SelfParent { id: updated.id });
        }

        check_parent(categories, &updated.name, Some(parent_id))?;

        let children = children_of(categories, &updated.id).len();
        if children > 0 {
            return Err(CoreError::HasChildren {
                id: updated.id,
                children,
            });
        }
    }

    let mut next = categories.to_vec();
    next[index] = Category {
        name: updated.name.trim().to_string(),
        ..updated
    };
    Ok(next)
}

// =============================================================================
// Delete
// =============================================================================

/// What happened to a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DeleteOutcome {
    Removed,
    NotFound,
    /// The category still has `children` subcategories.
    Blocked { children: usize },
}

/// Result of [`delete_category`]: the collection to keep plus the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDeletion {
    pub categories: Vec<Category>,
    pub outcome: DeleteOutcome,
}

impl CategoryDeletion {
    pub fn blocked(&self) -> bool {
        matches!(self.outcome, DeleteOutcome::Blocked { .. })
    }
}

/// Removes a category unless another category names it as parent.
///
/// A blocked deletion is a normal outcome, not an error: the input is
/// returned unchanged together with the child count.
pub fn delete_category(categories: &[Category], id: &str) -> CategoryDeletion {
    let children = children_of(categories, id).len();
    if children > 0 {
        return CategoryDeletion {
            categories: categories.to_vec(),
            outcome: DeleteOutcome::Blocked { children },
        };
    }

    let next: Vec<Category> = categories.iter().filter(|c| c.id != id).cloned().collect();
    let outcome = if next.len() == categories.len() {
        DeleteOutcome::NotFound
    } else {
        DeleteOutcome::Removed
    };

    CategoryDeletion {
        categories: next,
        outcome,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
