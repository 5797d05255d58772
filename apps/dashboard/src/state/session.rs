//! # Session State
//!
//! The dashboard's working copy of the catalog plus the view state.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session                                                                │
//! │  ├── products     snapshot of ProductStore, updated after each write    │
//! │  ├── categories   snapshot of CategoryStore, updated after each write   │
//! │  ├── view         query, filters, sort, selection                       │
//! │  └── pending      bulk-add list, not yet saved                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands hold the session lock only for synchronous work; it is never
//! held across an `.await`. Commands that write to a store additionally hold
//! the async write guard from start to finish, so compute, store write and
//! install never interleave with another writer.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::MutexGuard;

use stockroom_core::view::{compute_view, visible_ids, SortState, ViewState, ViewSummary};
use stockroom_core::{Category, Product};

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub view: ViewState,
    /// Products collected on the bulk-add screen.
    pub pending: Vec<Product>,
}

impl Session {
    /// Empty session starting with `sort`.
    pub fn new(sort: SortState) -> Self {
        Session {
            view: ViewState {
                sort,
                ..ViewState::default()
            },
            ..Session::default()
        }
    }

    /// Products currently shown, in display order.
    pub fn visible(&self) -> Vec<&Product> {
        compute_view(&self.products, &self.view)
    }

    pub fn visible_ids(&self) -> Vec<String> {
        visible_ids(&self.products, &self.view)
    }

    pub fn summary(&self) -> ViewSummary {
        ViewSummary::new(
            self.products.len(),
            self.visible().len(),
            self.view.selected_ids.len(),
        )
    }

    /// Drops selected ids whose product no longer exists.
    pub fn prune_selection(&mut self) {
        let pruned = self
            .view
            .selected_ids
            .pruned(self.products.iter().map(|p| p.id.as_str()));
        self.view.selected_ids = pruned;
    }

    /// Ids already taken by the catalog or the bulk-add list.
    pub fn taken_ids(&self) -> impl Iterator<Item = &str> {
        self.products
            .iter()
            .chain(self.pending.iter())
            .map(|p| p.id.as_str())
    }
}

/// Thread-safe wrapper for [`Session`].
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
    writes: Arc<tokio::sync::Mutex<()>>,
}

impl SessionState {
    pub fn new(sort: SortState) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::new(sort))),
            writes: Arc::default(),
        }
    }

    /// Serializes store writes. Held across `.await`; never taken twice by
    /// the same command.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let _writing = session.write_guard().await;
    /// let next = session.with_session(|s| compute(&s.products));
    /// store.save(...).await?;
    /// session.with_session_mut(|s| s.products = next);
    /// ```
    pub async fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().await
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = session.with_session(|s| s.summary());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_session_mut(|s| s.view.query = query);
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockroom_core::view::{SortDirection, SortField};

    fn product(id: &str) -> Product {
        Product::blank(id, &[], NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_new_session_uses_sort() {
        let sort = SortState::new(SortField::Price, SortDirection::Asc);
        let state = SessionState::new(sort);
        assert_eq!(state.with_session(|s| s.view.sort), sort);
    }

    #[test]
    fn test_prune_selection() {
        let mut session = Session {
            products: vec![product("P-1")],
            ..Session::default()
        };
        session.view.selected_ids = ["P-1", "P-2"].into_iter().collect();
        session.prune_selection();
        assert_eq!(session.view.selected_ids.to_vec(), ["P-1"]);
    }

    #[test]
    fn test_summary_counts() {
        let mut session = Session {
            products: vec![product("P-1"), product("P-2")],
            ..Session::default()
        };
        session.view.selected_ids = ["P-1", "P-2"].into_iter().collect();
        let summary = session.summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.visible, 2);
        assert!(summary.all_selected);
    }

    #[tokio::test]
    async fn test_write_guard_is_shared_between_clones() {
        let state = SessionState::default();
        let other = state.clone();

        let guard = state.write_guard().await;
        assert!(other.writes.try_lock().is_err());
        drop(guard);
        assert!(other.writes.try_lock().is_ok());
    }

    #[test]
    fn test_taken_ids_include_pending() {
        let session = Session {
            products: vec![product("P-1")],
            pending: vec![product("P-2")],
            ..Session::default()
        };
        let ids: Vec<&str> = session.taken_ids().collect();
        assert_eq!(ids, ["P-1", "P-2"]);
    }
}
