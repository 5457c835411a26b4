//! # Validation Module
//!
//! Field rules and raw-text conversion for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI prompt                                                   │
//! │  └── parse_quantity / Money::from_str / ProductCode::from_str          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE + NewProduct::into_record                        │
//! │  └── non-empty description, non-negative numbers                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: InventoryStore                                               │
//! │  └── unique codes, price not below cost                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_quantity, validate_quantity};
//!
//! let qty = parse_quantity("12").unwrap();
//! assert!(validate_quantity(qty).is_ok());
//! assert!(parse_quantity("twelve").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product description.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock quantity.
///
/// ## Rules
/// - Zero is allowed (out of stock)
/// - Negative is never allowed
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::negative("quantity"));
    }

    Ok(())
}

// =============================================================================
// Text Conversion
// =============================================================================

/// Reads a whole number typed for `field`.
///
/// Surrounding whitespace is ignored; a leading `-` is accepted so that the
/// range rule, not the parser, reports negative values.
pub fn parse_integer(text: &str, field: &str) -> ValidationResult<i64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    text.parse::<i64>().map_err(|_| {
        ValidationError::invalid_format(field, format!("'{}' is not a whole number", text))
    })
}

/// Reads a quantity. Does not check the sign; see [`validate_quantity`].
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    parse_integer(text, "quantity")
}

// =============================================================================
// Unit Tests
// =============================================================================
