//! # Selection
//!
//! The set of checked product rows.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Row checkbox ─────────► toggled(id)          add if absent, else drop  │
//! │  Header checkbox ──────► all_or_none(visible) clear, or replace with    │
//! │                                               exactly the visible ids   │
//! │  Products deleted ─────► pruned(existing)     forget vanished ids       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation returns a new `Selection`; unknown ids are no-ops.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Ids of the products currently checked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeSet<String>);

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Selected ids in ascending order.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    /// Adds `id` if absent, removes it if present. Applying it twice with
    /// the same id returns the original selection.
    ///
    /// ```rust
    /// use stockroom_core::Selection;
    ///
    /// let none = Selection::new();
    /// let one = none.toggled("P-1");
    /// assert!(one.contains("P-1"));
    /// assert_eq!(one.toggled("P-1"), none);
    /// ```
    pub fn toggled(&self, id: &str) -> Selection {
        let mut next = self.0.clone();
        if !next.remove(id) {
            next.insert(id.to_string());
        }
        Selection(next)
    }

    /// Header-checkbox behaviour.
    ///
    /// When the selection has as many entries as there are visible rows it
    /// is cleared; otherwise it is **replaced** by exactly the visible ids.
    /// Ids selected under a different filter are dropped, not merged.
    pub fn all_or_none<I, S>(&self, visible_ids: I) -> Selection
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let visible: Vec<String> = visible_ids.into_iter().map(Into::into).collect();
        if self.len() == visible.len() {
            Selection::new()
        } else {
            Selection(visible.into_iter().collect())
        }
    }

    /// Keeps only ids still present in `existing_ids`.
    pub fn pruned<'a, I>(&self, existing_ids: I) -> Selection
    where
        I: IntoIterator<Item = &'a str>,
    {
        let existing: BTreeSet<&str> = existing_ids.into_iter().collect();
        Selection(
            self.0
                .iter()
                .filter(|id| existing.contains(id.as_str()))
                .cloned()
                .collect(),
        )
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Selection(iter.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
