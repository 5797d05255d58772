//! # Fallback Text Generator
//!
//! Deterministic [`TextGenerator`] used when no language model is wired in.
//! Descriptions follow one template; SQL is picked by keyword.

use async_trait::async_trait;
use tracing::debug;

use crate::contracts::{DescriptionRequest, SqlRequest, TextGenerator};
use crate::error::StoreResult;

const FALLBACK_NAME: &str = "Товар";

pub const PRODUCT_SQL: &str = "SELECT id, name, sku, category, price, stock, status FROM product;";
pub const CATEGORY_SQL: &str = "SELECT id, name, parentId FROM category;";
pub const DEFAULT_SQL: &str = "SELECT 1 as result;";

#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackTextGenerator;

/// Template description for a product.
pub fn fallback_description(request: &DescriptionRequest) -> String {
    let name = match request.name.trim() {
        "" => FALLBACK_NAME,
        name => name,
    };
    let category = match request.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => format!(" з категорії «{}»", category),
        _ => String::new(),
    };
    format!(
        "{}{}: надійна якість, збалансована ціна та продуманий дизайн. \
         Підійде для щоденного використання. Гарантія 12 місяців.",
        name, category
    )
}

/// Keyword-matched SQL for a natural-language question.
pub fn fallback_sql(request: &SqlRequest) -> &'static str {
    let text = request.query.to_lowercase();
    if ["product", "товар", "price"].iter().any(|k| text.contains(k)) {
        PRODUCT_SQL
    } else if ["category", "категор"].iter().any(|k| text.contains(k)) {
        CATEGORY_SQL
    } else {
        DEFAULT_SQL
    }
}

#[async_trait]
impl TextGenerator for FallbackTextGenerator {
    async fn describe(&self, request: &DescriptionRequest) -> StoreResult<String> {
        debug!(name = %request.name, "Generating fallback description");
        Ok(fallback_description(request))
    }

    async fn sql(&self, request: &SqlRequest) -> StoreResult<String> {
        debug!(query = %request.query, "Generating fallback SQL");
        Ok(fallback_sql(request).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql_for(query: &str) -> &'static str {
        fallback_sql(&SqlRequest {
            query: query.to_string(),
            schema: None,
        })
    }

    #[test]
    fn test_description_with_category() {
        let text = fallback_description(&DescriptionRequest {
            name: "Лампа LED".to_string(),
            category: Some("Електрика".to_string()),
        });
        assert!(text.starts_with("Лампа LED з категорії «Електрика»: надійна якість"));
        assert!(text.ends_with("Гарантія 12 місяців."));
    }

    #[test]
    fn test_description_without_name() {
        let text = fallback_description(&DescriptionRequest::default());
        assert!(text.starts_with("Товар: надійна якість, збалансована ціна та продуманий дизайн. Підійде"));
    }

    #[test]
    fn test_sql_keywords() {
        assert_eq!(sql_for("Show all PRODUCTS"), PRODUCT_SQL);
        assert_eq!(sql_for("товари без залишку"), PRODUCT_SQL);
        assert_eq!(sql_for("список категорій"), CATEGORY_SQL);
        assert_eq!(sql_for("hello"), DEFAULT_SQL);
    }

    #[tokio::test]
    async fn test_generator_contract() {
        let generator = FallbackTextGenerator;
        let sql = generator
            .sql(&SqlRequest {
                query: "category tree".to_string(),
                schema: None,
            })
            .await
            .unwrap();
        assert_eq!(sql, CATEGORY_SQL);
    }
}
