//! # Money Module
//!
//! Provides the `Money` type for unit costs, sale prices and stock valuations.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A stock valuation sums hundreds of quantity × price products, so      │
//! │  float drift shows up in the report totals.                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "4500.00" ──parse──► 450000 cents ──sum──► exact totals              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price: Money = "150.00".parse().unwrap();
//! assert_eq!(price.cents(), 15000);
//!
//! let line = price.checked_mul_quantity(50).unwrap();
//! assert_eq!(line.to_string(), "7500.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: presumed profit goes negative when a product sells
///   below cost
/// - **Serialized as text**: `"4500.00"` in JSON, the same form the seed uses
/// - **Checked arithmetic**: aggregation reports overflow instead of wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts two amounts, `None` on overflow.
    #[inline]
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Multiplies by a stock quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let unit_cost = Money::from_cents(320000); // 3200.00
    /// assert_eq!(unit_cost.checked_mul_quantity(15), Some(Money::from_cents(4800000)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_mul_quantity(2), None);
    /// ```
    #[inline]
    pub fn checked_mul_quantity(self, quantity: i64) -> Option<Money> {
        self.0.checked_mul(quantity).map(Money)
    }

    /// Parses decimal text, naming `field` in the error.
    ///
    /// ## Accepted Forms
    /// ```text
    /// "3200.00"  → 320000      "70"   → 7000
    /// "10.5"     → 1050        "-2.5" → -250
    /// "10."      → 1000
    ///
    /// Rejected: "", "abc", "1.234", "1,50", "+3", "1e3"
    /// ```
    pub fn parse_field(text: &str, field: &str) -> Result<Money, ValidationError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (major, minor) = match unsigned.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (unsigned, ""),
        };

        let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if major.is_empty() || !is_digits(major) || !is_digits(minor) {
            return Err(ValidationError::invalid_format(
                field,
                format!("'{}' is not a decimal amount", text),
            ));
        }

        if minor.len() > 2 {
            return Err(ValidationError::invalid_format(
                field,
                "at most two decimal places are allowed",
            ));
        }

        let too_large = || ValidationError::invalid_format(field, "amount is too large");

        let major: i64 = major.parse().map_err(|_| too_large())?;
        // "5" after the point means 50 cents
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| too_large())? * 10,
            _ => minor.parse().map_err(|_| too_large())?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(too_large)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as plain decimal with two places (`1234.50`, `-0.75`).
///
/// Honors width and alignment flags so report columns line up.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        f.pad(&format!("{}{}.{:02}", sign, abs / 100, abs % 100))
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_field(s, "amount")
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_string()
    }
}

impl TryFrom<String> for Money {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>10}", Money::from_cents(15000)), "    150.00");
        assert_eq!(format!("{:<8}|", Money::from_cents(700)), "7.00    |");
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!("3200.00".parse::<Money>().unwrap().cents(), 320000);
        assert_eq!("70".parse::<Money>().unwrap().cents(), 7000);
        assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("10.".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!(" 0.07 ".parse::<Money>().unwrap().cents(), 7);
        assert_eq!("-2.5".parse::<Money>().unwrap().cents(), -250);
    }

    #[test]
    fn test_parse_rejected_forms() {
        assert!(matches!(
            "".parse::<Money>(),
            Err(ValidationError::Required { .. })
        ));
        for bad in ["abc", "1.234", "1,50", "+3", "1e3", ".5", "-", "1.2.3"] {
            assert!(
                matches!(bad.parse::<Money>(), Err(ValidationError::InvalidFormat { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_field_names_field() {
        let err = Money::parse_field("x", "sale_price").unwrap_err();
        assert!(err.to_string().starts_with("sale_price has invalid format"));
    }

    #[test]
    fn test_parse_overflow_is_rejected() {
        let err = "99999999999999999999".parse::<Money>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::invalid_format("amount", "amount is too large")
        );
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(2500);
        assert_eq!(a.checked_add(b), Some(Money::from_cents(3500)));
        assert_eq!(a.checked_sub(b), Some(Money::from_cents(-1500)));
        assert_eq!(a.checked_mul_quantity(3), Some(Money::from_cents(3000)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(a), None);
    }

    #[test]
    fn test_serde_uses_decimal_text() {
        let json = serde_json::to_string(&Money::from_cents(450000)).unwrap();
        assert_eq!(json, "\"4500.00\"");

        let back: Money = serde_json::from_str("\"12.30\"").unwrap();
        assert_eq!(back.cents(), 1230);
        assert!(serde_json::from_str::<Money>("\"twelve\"").is_err());
    }
}
