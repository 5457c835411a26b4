//! # Record Codec
//!
//! Text wire format for records and the startup seed.
//!
//! ## Format
//! ```text
//! one record:   description ; code ; quantity ; unit_cost ; sale_price
//!               Mouse Logitech;203;50;70.00;150.00
//!
//! seed blob:    record # record # record ...
//! ```
//!
//! Decoding produces a fully typed [`Record`]: numeric fields are checked
//! here, so a malformed number is reported at load time and never reaches a
//! query or a report.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Record;
use crate::validation::{parse_integer, validate_description};
use crate::{FIELD_DELIMITER, RECORD_ARITY, RECORD_DELIMITER};

/// Decodes one record.
///
/// ## Errors
/// - [`CoreError::Schema`] when the field count is not 5
/// - [`CoreError::Validation`] when a field is empty, malformed or negative
///
/// ## Example
/// ```rust
/// use stockroom_core::codec::parse_record;
///
/// let record = parse_record("Monitor AOC;212;7;700.00;1100.00").unwrap();
/// assert_eq!(record.code.value(), 212);
/// assert!(parse_record("Monitor AOC;212;7").is_err());
/// ```
pub fn parse_record(text: &str) -> CoreResult<Record> {
    let fields: Vec<&str> = text.split(FIELD_DELIMITER).map(str::trim).collect();

    let [description, code, quantity, unit_cost, sale_price] = fields.as_slice() else {
        return Err(CoreError::Schema {
            expected: RECORD_ARITY,
            found: fields.len(),
        });
    };

    validate_description(description)?;

    let record = Record {
        description: description.to_string(),
        code: code.parse()?,
        quantity: parse_integer(quantity, "quantity")?,
        unit_cost: Money::parse_field(unit_cost, "unit_cost")?,
        sale_price: Money::parse_field(sale_price, "sale_price")?,
    };
    record.validate()?;

    Ok(record)
}

/// Decodes the seed blob, in order.
///
/// Empty segments (a trailing `#`, blank lines) are skipped. The first bad
/// record aborts the load and is reported by its 1-based position.
pub fn parse_seed(blob: &str) -> CoreResult<Vec<Record>> {
    blob.split(RECORD_DELIMITER)
        .filter(|segment| !segment.trim().is_empty())
        .enumerate()
        .map(|(index, segment)| {
            parse_record(segment).map_err(|err| CoreError::SeedRecord {
                position: index + 1,
                source: Box::new(err),
            })
        })
        .collect()
}

/// Encodes one record in the wire format.
pub fn encode_record(record: &Record) -> String {
    let sep = FIELD_DELIMITER;
    format!(
        "{}{sep}{}{sep}{}{sep}{}{sep}{}",
        record.description, record.code, record.quantity, record.unit_cost, record.sale_price
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
