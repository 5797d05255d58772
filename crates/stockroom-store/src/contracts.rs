//! # Collaborator Contracts
//!
//! The traits the dashboard depends on. Real backends (a SQL catalog, a
//! barcode service, a language model) plug in here; this crate ships the
//! in-memory and deterministic adapters.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dashboard command                                                      │
//! │       │                                                                 │
//! │       ├──► ProductStore   list / save / delete                          │
//! │       ├──► CategoryStore  list / add / update / delete                  │
//! │       ├──► ProductLookup  barcode, name search, suggestions             │
//! │       └──► TextGenerator  description, SQL                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use stockroom_core::{Category, Product, ProductDraft};

use crate::error::StoreResult;

/// Shortest query the name lookups answer.
pub const MIN_LOOKUP_QUERY_LEN: usize = 2;

/// Maximum number of name suggestions returned.
pub const MAX_SUGGESTIONS: usize = 8;

// =============================================================================
// Stores
// =============================================================================

/// Persistent product collection. Saves are a full replace keyed by id.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list_products(&self) -> StoreResult<Vec<Product>>;

    /// Replaces the product with the same id, or prepends it when new.
    async fn save(&self, product: Product) -> StoreResult<()>;

    /// Saves each product in order.
    async fn save_all(&self, products: Vec<Product>) -> StoreResult<()> {
        for product in products {
            self.save(product).await?;
        }
        Ok(())
    }

    /// Removes the listed ids and returns how many were removed.
    async fn delete(&self, ids: &[String]) -> StoreResult<usize>;
}

/// Persistent category collection.
///
/// Tree rules are enforced by the caller before anything reaches the store.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn add(&self, category: Category) -> StoreResult<()>;

    async fn update(&self, category: Category) -> StoreResult<()>;

    /// Returns `false` when no category had this id.
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}

// =============================================================================
// Lookup
// =============================================================================

/// Product lookup used by bulk-add and the product form.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// A miss is `Ok(None)`, never an error.
    async fn by_barcode(&self, code: &str) -> StoreResult<Option<ProductDraft>>;

    /// Drafts whose name contains `query`; empty for short queries.
    async fn by_name(&self, query: &str) -> StoreResult<Vec<ProductDraft>>;

    /// At most [`MAX_SUGGESTIONS`] names containing `query`; empty for
    /// short queries.
    async fn suggest_names(&self, query: &str) -> StoreResult<Vec<String>>;
}

// =============================================================================
// Text Generation
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionRequest {
    pub name: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlRequest {
    /// Natural-language question.
    pub query: String,
    /// Schema summary handed to the generator.
    pub schema: Option<String>,
}

/// Free-text generation for the product form and the SQL console.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn describe(&self, request: &DescriptionRequest) -> StoreResult<String>;

    async fn sql(&self, request: &SqlRequest) -> StoreResult<String>;
}

/// True when `query` is long enough for the name lookups.
pub(crate) fn is_lookup_query(query: &str) -> bool {
    query.trim().chars().count() >= MIN_LOOKUP_QUERY_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_query_threshold() {
        assert!(!is_lookup_query(""));
        assert!(!is_lookup_query(" ф "));
        assert!(is_lookup_query("фа"));
    }

    #[test]
    fn test_request_json_shape() {
        let request: DescriptionRequest =
            serde_json::from_str(r#"{"name":"Лампа","category":"Електрика"}"#).unwrap();
        assert_eq!(request.category.as_deref(), Some("Електрика"));
    }
}
