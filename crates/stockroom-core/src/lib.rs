//! # stockroom-core: Pure Inventory Types and Rules
//!
//! This crate holds the domain layer of Stockroom. Everything here is a pure
//! function or a plain value; the record collection itself lives in
//! `stockroom-store`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    stockroom-cli (menu)                         │   │
//! │  │    prompt ──► Command ──► dispatch ──► Outcome ──► render       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stockroom-store (InventoryStore)                 │   │
//! │  │    add/remove/find, query, update, reports                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   codec   │  │ validation│  │   │
//! │  │   │  Record   │  │   Money   │  │  parse    │  │   rules   │  │   │
//! │  │   │  Code     │  │  (cents)  │  │  encode   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Record, ProductCode, NewProduct, SortOrder)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`codec`] - Delimited text wire format for records and the seed blob
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation and raw-text conversion
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::codec::parse_record;
//! use stockroom_core::Money;
//!
//! let record = parse_record("Mouse Logitech;203;50;70.00;150.00").unwrap();
//! assert_eq!(record.quantity, 50);
//! assert_eq!(record.sale_price, Money::from_cents(15000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Separates records inside the seed blob.
pub const RECORD_DELIMITER: char = '#';

/// Separates fields inside one encoded record.
pub const FIELD_DELIMITER: char = ';';

/// Number of fields in an encoded record:
/// description, code, quantity, unit_cost, sale_price.
pub const RECORD_ARITY: usize = 5;

/// Quantity below which a product counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 7;

/// Catalogue loaded into a fresh store at startup.
pub const SEED_INVENTORY: &str = "Notebook Dell;201;15;3200.00;4500.00#\
Notebook Lenovo;202;10;2800.00;4200.00#\
Mouse Logitech;203;50;70.00;150.00#\
Mouse Razer;204;40;120.00;250.00#\
Monitor Samsung;205;10;800.00;1200.00#\
Monitor LG;206;8;750.00;1150.00#\
Teclado Mecânico Corsair;207;30;180.00;300.00#\
Teclado Mecânico Razer;208;25;200.00;350.00#\
Impressora HP;209;5;400.00;650.00#\
Impressora Epson;210;3;450.00;700.00#\
Monitor Dell;211;12;850.00;1250.00#\
Monitor AOC;212;7;700.00;1100.00";
