//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Record      │   │   NewProduct    │   │   SortOrder     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  description    │   │  description    │   │  Ascending      │       │
//! │  │  code           │   │  quantity       │   │  Descending     │       │
//! │  │  quantity       │   │  unit_cost      │   └─────────────────┘       │
//! │  │  unit_cost      │   │  sale_price     │                              │
//! │  │  sale_price     │   │  (no code yet)  │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Record` is always fully typed: numeric text is checked once when it
//! enters the system (codec or `NewProduct::into_record`), never at each use.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_description, validate_quantity};

// =============================================================================
// Product Code
// =============================================================================

/// Unique product identifier.
///
/// Codes are assigned in increasing order by the store and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductCode(u64);

impl ProductCode {
    /// Wraps a raw code value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        ProductCode(value)
    }

    /// Returns the raw code value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The code that follows this one, `None` at the top of the range.
    #[inline]
    pub fn next(&self) -> Option<ProductCode> {
        self.0.checked_add(1).map(ProductCode)
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductCode {
    type Err = ValidationError;

    /// Parses a code typed by a person. Only ASCII digits are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "code".to_string(),
            });
        }

        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "code",
                format!("'{}' is not a whole number", s),
            ));
        }

        s.parse::<u64>()
            .map(ProductCode)
            .map_err(|_| ValidationError::invalid_format("code", "code is too large"))
    }
}

// =============================================================================
// Record
// =============================================================================

/// One inventory line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Free-text description, never empty.
    pub description: String,

    /// Unique identifier within the store.
    pub code: ProductCode,

    /// Units on hand, never negative.
    pub quantity: i64,

    /// What one unit cost to acquire.
    pub unit_cost: Money,

    /// What one unit sells for.
    pub sale_price: Money,
}

impl Record {
    /// Cost of all units on hand (`quantity × unit_cost`).
    pub fn cost_total(&self) -> CoreResult<Money> {
        self.unit_cost
            .checked_mul_quantity(self.quantity)
            .ok_or_else(|| self.overflow("cost total"))
    }

    /// Revenue if all units on hand sell (`quantity × sale_price`).
    pub fn revenue_total(&self) -> CoreResult<Money> {
        self.sale_price
            .checked_mul_quantity(self.quantity)
            .ok_or_else(|| self.overflow("revenue total"))
    }

    /// Profit if all units on hand sell (`quantity × (sale_price − unit_cost)`).
    pub fn presumed_profit(&self) -> CoreResult<Money> {
        self.sale_price
            .checked_sub(self.unit_cost)
            .and_then(|margin| margin.checked_mul_quantity(self.quantity))
            .ok_or_else(|| self.overflow("presumed profit"))
    }

    /// Checks the field rules every stored record must satisfy.
    ///
    /// ## Rules
    /// - description: non-empty after trimming
    /// - quantity, unit_cost, sale_price: zero or greater
    ///
    /// A sale price below cost is accepted here; only price updates enforce it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_description(&self.description)?;
        validate_quantity(self.quantity)?;

        if self.unit_cost.is_negative() {
            return Err(ValidationError::negative("unit_cost"));
        }
        if self.sale_price.is_negative() {
            return Err(ValidationError::negative("sale_price"));
        }

        Ok(())
    }

    /// Checks whether the product has run out.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    fn overflow(&self, what: &str) -> CoreError {
        CoreError::DataIntegrity(format!("{} of product {} overflows", what, self.code))
    }
}

// =============================================================================
// New Product
// =============================================================================

/// Fields of a product about to be created; the store assigns the code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProduct {
    pub description: String,
    pub quantity: i64,
    pub unit_cost: Money,
    pub sale_price: Money,
}

impl NewProduct {
    /// Builds the record under `code`, trimming the description.
    ///
    /// Fails with the first rule from [`Record::validate`] that is broken.
    pub fn into_record(self, code: ProductCode) -> Result<Record, ValidationError> {
        let record = Record {
            description: self.description.trim().to_string(),
            code,
            quantity: self.quantity,
            unit_cost: self.unit_cost,
            sale_price: self.sale_price,
        };
        record.validate()?;
        Ok(record)
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Direction for quantity sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest quantity first.
    #[default]
    Ascending,
    /// Largest quantity first.
    Descending,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse() -> Record {
        Record {
            description: "Mouse Logitech".to_string(),
            code: ProductCode::new(203),
            quantity: 50,
            unit_cost: Money::from_cents(7000),
            sale_price: Money::from_cents(15000),
        }
    }

    #[test]
    fn test_product_code_parse() {
        assert_eq!("203".parse::<ProductCode>(), Ok(ProductCode::new(203)));
        assert_eq!(" 0203 ".parse::<ProductCode>(), Ok(ProductCode::new(203)));
        assert!(matches!(
            "".parse::<ProductCode>(),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            "-1".parse::<ProductCode>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "20a".parse::<ProductCode>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_product_code_next() {
        assert_eq!(ProductCode::new(212).next(), Some(ProductCode::new(213)));
        assert_eq!(ProductCode::new(u64::MAX).next(), None);
    }

    #[test]
    fn test_record_totals() {
        let record = mouse();
        assert_eq!(record.cost_total(), Ok(Money::from_cents(350000)));
        assert_eq!(record.revenue_total(), Ok(Money::from_cents(750000)));
        assert_eq!(record.presumed_profit(), Ok(Money::from_cents(400000)));
        assert!(!record.is_out_of_stock());
    }

    #[test]
    fn test_record_total_overflow_is_data_integrity() {
        let record = Record {
            quantity: i64::MAX,
            ..mouse()
        };
        assert!(matches!(
            record.revenue_total(),
            Err(CoreError::DataIntegrity(_))
        ));
    }

    #[test]
    fn test_new_product_into_record() {
        let new = NewProduct {
            description: "  Webcam  ".to_string(),
            quantity: 4,
            unit_cost: Money::from_cents(9000),
            sale_price: Money::from_cents(8000),
        };
        let record = new.into_record(ProductCode::new(213)).unwrap();
        assert_eq!(record.description, "Webcam");
        assert_eq!(record.code.value(), 213);
    }

    #[test]
    fn test_new_product_rejects_bad_fields() {
        let base = NewProduct {
            description: "Webcam".to_string(),
            quantity: 4,
            unit_cost: Money::from_cents(9000),
            sale_price: Money::from_cents(12000),
        };
        let code = ProductCode::new(1);

        let blank = NewProduct {
            description: "   ".to_string(),
            ..base.clone()
        };
        assert!(matches!(
            blank.into_record(code),
            Err(ValidationError::Required { .. })
        ));

        let negative_qty = NewProduct {
            quantity: -1,
            ..base.clone()
        };
        assert_eq!(
            negative_qty.into_record(code),
            Err(ValidationError::negative("quantity"))
        );

        let negative_cost = NewProduct {
            unit_cost: Money::from_cents(-1),
            ..base
        };
        assert_eq!(
            negative_cost.into_record(code),
            Err(ValidationError::negative("unit_cost"))
        );
    }

    #[test]
    fn test_record_serializes_decimal_text() {
        let json = serde_json::to_value(mouse()).unwrap();
        assert_eq!(json["code"], 203);
        assert_eq!(json["sale_price"], "150.00");
    }

    #[test]
    fn test_sort_order_default() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }
}
