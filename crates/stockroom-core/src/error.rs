//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Category tree violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                               │
//! │  └── StoreError       - Collaborator failures                          │
//! │                                                                         │
//! │  Dashboard errors (in app)                                             │
//! │  └── ApiError         - What the UI layer sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError ← StoreError             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Not-found conditions and blocked deletions are NOT errors here: the view
//! engine treats unknown ids as no-ops and the category guard reports a
//! blocked deletion as a normal outcome.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant is a structural rule the category guard refuses to break.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested parent category does not exist.
    #[error("Parent category not found for '{category}': {parent_id}")]
    ParentNotFound { category: String, parent_id: String },

    /// The requested parent is itself a child, which would make the tree
    /// three levels deep.
    ///
    /// ## When This Occurs
    /// ```text
    /// Tools (C-1)
    ///   └── Drills (C-2)
    ///          └── Cordless ← parent_id = C-2 → ParentNotTopLevel
    /// ```
    #[error("Category '{category}' cannot be placed under {parent_id}: parent is not top-level")]
    ParentNotTopLevel { category: String, parent_id: String },

    /// A category was given itself as parent.
    #[error("Category {id} cannot be its own parent")]
    SelfParent { id: String },

    /// A category with subcategories was given a parent.
    #[error("Category {id} has {children} subcategories and cannot be nested")]
    HasChildren { id: String, children: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used at the form boundary before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., stray characters in a SKU).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ParentNotTopLevel {
            category: "Cordless".to_string(),
            parent_id: "C-2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Category 'Cordless' cannot be placed under C-2: parent is not top-level"
        );

        let err = CoreError::HasChildren {
            id: "C-1".to_string(),
            children: 2,
        };
        assert_eq!(
            err.to_string(),
            "Category C-1 has 2 subcategories and cannot be nested"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
