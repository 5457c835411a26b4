//! # Product Query
//!
//! Search, sort and stock-level filters.
//!
//! Every method returns a new `Vec<Record>` in the order it was asked for;
//! the store keeps its insertion order.
//!
//! ## Search Precedence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    search(description, code)                            │
//! │                                                                         │
//! │  description non-empty? ── yes ──► case-insensitive substring match     │
//! │       │                            (code criterion ignored for the     │
//! │       │                             whole call, even on zero matches)  │
//! │       no                                                                │
//! │       ▼                                                                 │
//! │  code non-empty? ───────── yes ──► exact match on the code's digits     │
//! │       │                                                                 │
//! │       no                                                                │
//! │       ▼                                                                 │
//! │  empty result                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::{Record, SortOrder, DEFAULT_LOW_STOCK_THRESHOLD};
use tracing::debug;

/// Read-only query view over the store's records.
///
/// ## Usage
/// ```rust
/// use stockroom_core::SEED_INVENTORY;
/// use stockroom_store::InventoryStore;
///
/// let store = InventoryStore::from_seed(SEED_INVENTORY).unwrap();
///
/// let monitors = store.query().search(Some("monitor"), None);
/// assert_eq!(monitors.len(), 4);
///
/// let by_code = store.query().search(None, Some("209"));
/// assert_eq!(by_code[0].description, "Impressora HP");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProductQuery<'a> {
    records: &'a [Record],
}

impl<'a> ProductQuery<'a> {
    /// Creates a query view over `records`.
    pub fn new(records: &'a [Record]) -> Self {
        ProductQuery { records }
    }

    /// Finds records by description or code.
    ///
    /// A non-empty `description` is matched as a case-insensitive substring
    /// and `code` is then not consulted at all. Otherwise a non-empty `code`
    /// must equal the record code's decimal text exactly. Blank criteria are
    /// treated as absent; with no criterion the result is empty.
    pub fn search(&self, description: Option<&str>, code: Option<&str>) -> Vec<Record> {
        let description = description.map(str::trim).filter(|d| !d.is_empty());
        let code = code.map(str::trim).filter(|c| !c.is_empty());

        let results: Vec<Record> = match (description, code) {
            (Some(description), _) => {
                let needle = description.to_lowercase();
                self.collect(|record| record.description.to_lowercase().contains(&needle))
            }
            (None, Some(code)) => self.collect(|record| record.code.to_string() == code),
            (None, None) => Vec::new(),
        };

        debug!(?description, ?code, count = results.len(), "Search returned products");
        results
    }

    /// Single-box search: all-digit input is a code, anything else a
    /// description.
    pub fn search_text(&self, input: &str) -> Vec<Record> {
        let input = input.trim();
        if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
            self.search(None, Some(input))
        } else {
            self.search(Some(input), None)
        }
    }

    /// Records ordered by quantity. The sort is stable: equal quantities keep
    /// their insertion order in both directions.
    pub fn sort_by_quantity(&self, order: SortOrder) -> Vec<Record> {
        let mut sorted = self.records.to_vec();
        match order {
            SortOrder::Ascending => sorted.sort_by(|a, b| a.quantity.cmp(&b.quantity)),
            SortOrder::Descending => sorted.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
        }
        sorted
    }

    /// Records whose quantity is strictly below `threshold`.
    pub fn filter_below(&self, threshold: i64) -> Vec<Record> {
        self.collect(|record| record.quantity < threshold)
    }

    /// [`filter_below`](Self::filter_below) with the default threshold of 7.
    pub fn low_stock(&self) -> Vec<Record> {
        self.filter_below(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Records with no units on hand.
    pub fn out_of_stock(&self) -> Vec<Record> {
        self.collect(Record::is_out_of_stock)
    }

    fn collect(&self, predicate: impl Fn(&Record) -> bool) -> Vec<Record> {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
