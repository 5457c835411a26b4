//! # stockroom-store: Inventory Store for Stockroom
//!
//! This crate owns the record collection. It is a plain value, created by the
//! program's composition root and passed to whoever needs it; there is no
//! global list.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  CLI Command (Search / UpdatePrice / Report ...)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ InventoryStore│    │  Repositories │    │  Mutations   │  │   │
//! │  │   │  (store.rs)   │    │               │    │(mutation.rs) │  │   │
//! │  │   │               │◄───│ ProductQuery  │    │              │  │   │
//! │  │   │ Vec<Record>   │    │ StockReports  │    │ quantity     │  │   │
//! │  │   │ next_code     │    │               │    │ sale price   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The record collection, code generation, add/remove/find
//! - [`mutation`] - Validated quantity and sale price updates
//! - [`repository`] - Read-only views: search/sort/filter and reports
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use stockroom_core::{SortOrder, SEED_INVENTORY};
//! use stockroom_store::InventoryStore;
//!
//! let store = InventoryStore::from_seed(SEED_INVENTORY).unwrap();
//!
//! let sorted = store.query().sort_by_quantity(SortOrder::Ascending);
//! assert_eq!(sorted[0].quantity, 3);
//!
//! let value = store.reports().total_stock_value().unwrap();
//! assert!(value.cents() > 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod mutation;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::InventoryStore;

pub use repository::query::ProductQuery;
pub use repository::report::{ReportRow, StockReport, StockReports};
