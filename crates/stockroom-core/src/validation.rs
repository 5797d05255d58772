//! # Validation Module
//!
//! Input validation for the product and category forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form (UI)                                                    │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Dashboard command                                            │
//! │  └── THIS MODULE: rejects bad records before they reach a store        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Core engine                                                  │
//! │  └── Total functions: clamps edge values instead of failing            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{validate_sku, validate_search_query};
//!
//! assert!(validate_sku("SRV-18-2A").is_ok());
//! assert_eq!(validate_search_query("  drill ").unwrap(), "drill");
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Category, NewCategory, Product};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

pub const MAX_SKU_LEN: usize = 64;
pub const MAX_NAME_LEN: usize = 200;
pub const MAX_CATEGORY_NAME_LEN: usize = 100;
pub const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (or scanned barcode).
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - Letters, digits, hyphens, underscores and dots only
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_sku;
///
/// assert!(validate_sku("2000000012345").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("has space").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.chars().count() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LEN,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, underscores and dots"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates a product name (non-empty, at most 200 characters).
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_NAME_LEN)
}

/// Validates a category name (non-empty, at most 100 characters).
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    validate_text("category name", name, MAX_CATEGORY_NAME_LEN)
}

/// Validates a search query and returns it trimmed.
///
/// An empty query is valid and matches every product.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a monetary field. Zero is allowed, negatives are not.
pub fn validate_money(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a whole product before it is saved.
///
/// ## Rules
/// - `name` and `sku` pass their field validators
/// - `price` and `old_price` are non-negative
/// - attribute keys and values are non-empty
///
/// The category name is deliberately not checked against the category list:
/// orphaned names are tolerated.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_sku(&product.sku)?;
    validate_money("price", product.price)?;
    validate_money("old price", product.old_price)?;

    for (key, value) in &product.attributes {
        if key.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "attribute key".to_string(),
            });
        }
        if value.trim().is_empty() {
            return Err(ValidationError::Required {
                field: format!("attribute '{}'", key),
            });
        }
    }

    Ok(())
}

/// Validates a category creation request.
pub fn validate_new_category(category: &NewCategory) -> ValidationResult<()> {
    validate_category_name(&category.name)
}

/// Validates an edited category.
pub fn validate_category(category: &Category) -> ValidationResult<()> {
    validate_category_name(&category.name)
}

// =============================================================================
// Unit Tests
// =============================================================================
