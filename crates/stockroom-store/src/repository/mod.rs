//! # Repository Module
//!
//! Read-only views over the inventory.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CLI dispatcher                                                        │
//! │       │                                                                 │
//! │       │  store.query().filter_below(10)                                │
//! │       │  store.reports().general_report()                              │
//! │       ▼                                                                 │
//! │  ProductQuery / StockReports                                           │
//! │  ├── borrow the record slice                                           │
//! │  └── return new Vecs / values, never reorder the store                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryStore.records (insertion order)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductQuery`](query::ProductQuery) - Search, sort and stock filters
//! - [`StockReports`](report::StockReports) - Valuation and the general report

pub mod query;
pub mod report;
