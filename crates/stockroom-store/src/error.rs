//! # Store Error Types
//!
//! Error types for inventory store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (stockroom-core)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds lookup and uniqueness failures        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CLI prints the message and shows the menu again                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is returned before the store is touched, so an `Err` always
//! means "nothing changed".

use stockroom_core::{CoreError, ProductCode, ValidationError};
use thiserror::Error;

/// Inventory store errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record carries the requested code.
    #[error("Product not found: {0}")]
    NotFound(ProductCode),

    /// A record with this code exists, or existed and was removed.
    #[error("Duplicate code: {0} is already in use")]
    DuplicateCode(ProductCode),

    /// A code cannot be derived because the store holds no records.
    #[error("Cannot generate a product code: the inventory is empty")]
    EmptyStore,

    /// Codec, validation or arithmetic failure from stockroom-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Checks whether this error is a rejected field value.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Core(CoreError::Validation(_)))
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::NotFound(ProductCode::new(999)).to_string(),
            "Product not found: 999"
        );
        assert_eq!(
            StoreError::EmptyStore.to_string(),
            "Cannot generate a product code: the inventory is empty"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: StoreError = ValidationError::negative("quantity").into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: quantity cannot be negative");
        assert!(!StoreError::EmptyStore.is_validation());
    }
}
