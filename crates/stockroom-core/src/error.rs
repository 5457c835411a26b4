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
//! │  ├── CoreError        - Codec and arithmetic failures                  │
//! │  └── ValidationError  - Field value rejected                           │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                               │
//! │  └── StoreError       - Lookup, uniqueness, empty store                │
//! │                                                                         │
//! │  stockroom-cli errors (in app)                                         │
//! │  └── CliError         - I/O, configuration                             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → CliError → stderr    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while decoding records or computing over them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Encoded record does not have the fixed number of fields.
    #[error("Record must have {expected} fields, found {found}")]
    Schema { expected: usize, found: usize },

    /// A record inside the seed blob failed to decode.
    ///
    /// `position` is 1-based so it matches what a person counts by eye.
    #[error("Seed record {position} is invalid: {source}")]
    SeedRecord {
        position: usize,
        #[source]
        source: Box<CoreError>,
    },

    /// Stored values cannot produce a trustworthy result.
    ///
    /// ## When This Occurs
    /// - A stock valuation overflows the cent range
    #[error("Data integrity fault: {0}")]
    DataIntegrity(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state changes, so the caller can report them and move on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Text could not be read as the expected kind of value.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// A new sale price would undercut the unit cost.
    #[error("Sale price {price} is below unit cost {cost}")]
    BelowCost { price: Money, cost: Money },
}

impl ValidationError {
    /// Creates an InvalidFormat error for a field.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a Negative error for a field.
    pub fn negative(field: impl Into<String>) -> Self {
        ValidationError::Negative {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
