//! # Store State
//!
//! Holds the collaborators the commands talk to.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn load_catalog(stores: &StoreState, session: &SessionState) -> Result<ViewSummary, ApiError> {
//!     let products = stores.products().list_products().await?;
//!     ...
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use stockroom_store::{
    CategoryStore, FallbackTextGenerator, MemoryStore, MockLookup, ProductLookup, ProductStore,
    TextGenerator,
};

/// Collaborators behind trait objects, cheap to clone.
#[derive(Clone)]
pub struct StoreState {
    products: Arc<dyn ProductStore>,
    categories: Arc<dyn CategoryStore>,
    lookup: Arc<dyn ProductLookup>,
    text: Arc<dyn TextGenerator>,
}

impl StoreState {
    pub fn new(
        products: Arc<dyn ProductStore>,
        categories: Arc<dyn CategoryStore>,
        lookup: Arc<dyn ProductLookup>,
        text: Arc<dyn TextGenerator>,
    ) -> Self {
        StoreState {
            products,
            categories,
            lookup,
            text,
        }
    }

    /// In-memory stores over `store`, the mock lookup and the fallback
    /// text generator.
    pub fn in_memory(store: &MemoryStore) -> Self {
        StoreState::new(
            Arc::new(store.products()),
            Arc::new(store.categories()),
            Arc::new(MockLookup::seeded()),
            Arc::new(FallbackTextGenerator),
        )
    }

    /// Demo wiring: seeded memory store plus mock collaborators.
    pub fn demo() -> Self {
        StoreState::in_memory(&MemoryStore::seeded())
    }

    pub fn products(&self) -> &dyn ProductStore {
        self.products.as_ref()
    }

    pub fn categories(&self) -> &dyn CategoryStore {
        self.categories.as_ref()
    }

    pub fn lookup(&self) -> &dyn ProductLookup {
        self.lookup.as_ref()
    }

    pub fn text(&self) -> &dyn TextGenerator {
        self.text.as_ref()
    }
}

impl fmt::Debug for StoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreState").finish_non_exhaustive()
    }
}
