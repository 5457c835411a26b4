//! # Inventory Store
//!
//! The ordered record collection and the operations that change its shape.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inventory Store Lifecycle                          │
//! │                                                                         │
//! │  Process Startup                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryStore::from_seed(blob) ← Decode + add every seed record      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │  records: Vec<Record>  (insertion order)│                           │
//! │  │  highest_code: max code ever held       │                           │
//! │  │  retired: codes removed from the store  │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ├──► create / add     push to the end                            │
//! │       ├──► remove           retire the code                            │
//! │       ├──► update_*         in place (mutation.rs)                     │
//! │       └──► query / reports  read-only views (repository/)              │
//! │                                                                         │
//! │  Process exit: the store is dropped, nothing is persisted              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Code Uniqueness
//! A code is never handed out twice. Removing the record with the highest
//! code does not lower the next generated code, and `add` refuses codes that
//! were retired.

use std::collections::BTreeSet;

use stockroom_core::codec::parse_seed;
use stockroom_core::{CoreError, NewProduct, ProductCode, Record};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::repository::query::ProductQuery;
use crate::repository::report::StockReports;

/// The in-memory inventory.
///
/// ## Usage
/// ```rust
/// use stockroom_core::{Money, NewProduct};
/// use stockroom_store::InventoryStore;
///
/// let mut store = InventoryStore::from_seed("Mouse;203;50;70.00;150.00").unwrap();
///
/// let webcam = store
///     .create(NewProduct {
///         description: "Webcam".to_string(),
///         quantity: 4,
///         unit_cost: Money::from_cents(9000),
///         sale_price: Money::from_cents(14000),
///     })
///     .unwrap();
/// assert_eq!(webcam.code.value(), 204);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    records: Vec<Record>,
    highest_code: Option<ProductCode>,
    retired: BTreeSet<ProductCode>,
}

impl InventoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InventoryStore::default()
    }

    /// Creates a store from already decoded records, keeping their order.
    ///
    /// ## Errors
    /// - [`StoreError::DuplicateCode`] if two records share a code
    /// - [`StoreError::Core`] if a record breaks a field rule
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> StoreResult<Self> {
        let mut store = InventoryStore::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    /// Creates a store from a seed blob (`record#record#...`).
    pub fn from_seed(blob: &str) -> StoreResult<Self> {
        let store = InventoryStore::from_records(parse_seed(blob)?)?;
        info!(records = store.len(), "Inventory loaded from seed");
        Ok(store)
    }

    // =========================================================================
    // Identifier Generator
    // =========================================================================

    /// Derives the next product code: one above the highest code in use.
    ///
    /// ## How It Works
    /// ```text
    /// codes in store: 201 … 212      highest ever held: 212
    ///      │
    ///      ▼
    /// max(212, 212) + 1 = 213
    ///
    /// after removing 212:            highest ever held: 212
    /// max(211, 212) + 1 = 213        (212 is never handed out again)
    /// ```
    ///
    /// ## Errors
    /// - [`StoreError::EmptyStore`] when there are no records; there is no
    ///   maximum to count from, and no default is substituted
    pub fn next_code(&self) -> StoreResult<ProductCode> {
        let current_max = self
            .records
            .iter()
            .map(|record| record.code)
            .max()
            .ok_or(StoreError::EmptyStore)?;

        let highest = match self.highest_code {
            Some(highest) if highest > current_max => highest,
            _ => current_max,
        };

        highest.next().ok_or_else(|| {
            StoreError::Core(CoreError::DataIntegrity(
                "product code range is exhausted".to_string(),
            ))
        })
    }

    // =========================================================================
    // Collection Operations
    // =========================================================================

    /// Appends a record with a caller-chosen code.
    ///
    /// ## Errors
    /// - [`StoreError::DuplicateCode`] if the code is in use or was retired
    /// - [`StoreError::Core`] if a field rule is broken
    pub fn add(&mut self, record: Record) -> StoreResult<()> {
        self.insert(record).map(|_| ())
    }

    /// Validates and appends `record`, returning its index.
    fn insert(&mut self, record: Record) -> StoreResult<usize> {
        record.validate()?;

        if self.retired.contains(&record.code) || self.find_by_code(record.code).is_some() {
            return Err(StoreError::DuplicateCode(record.code));
        }

        debug!(code = %record.code, description = %record.description, "Adding product");

        if self.highest_code.map_or(true, |highest| record.code > highest) {
            self.highest_code = Some(record.code);
        }
        self.records.push(record);
        Ok(self.records.len() - 1)
    }

    /// Creates a product under a freshly generated code.
    ///
    /// ## Flow
    /// ```text
    /// NewProduct ──► next_code() ──► into_record(code) ──► add()
    ///                    │                  │
    ///                    ▼                  ▼
    ///               EmptyStore       ValidationError
    /// ```
    pub fn create(&mut self, product: NewProduct) -> StoreResult<&Record> {
        let code = self.next_code()?;
        let record = product.into_record(code)?;
        let index = self.insert(record)?;

        let created = &self.records[index];
        info!(code = %code, description = %created.description, "Product created");
        Ok(created)
    }

    /// Removes the record carrying `code` and returns it.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] if no record has the code
    pub fn remove(&mut self, code: ProductCode) -> StoreResult<Record> {
        let index = self.position(code).ok_or(StoreError::NotFound(code))?;

        let record = self.records.remove(index);
        self.retired.insert(code);

        info!(code = %code, description = %record.description, "Product removed");
        Ok(record)
    }

    /// Looks up a record by exact code.
    pub fn find_by_code(&self, code: ProductCode) -> Option<&Record> {
        self.records.iter().find(|record| record.code == code)
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // =========================================================================
    // Repository Accessors
    // =========================================================================

    /// Search, sort and filter views.
    pub fn query(&self) -> ProductQuery<'_> {
        ProductQuery::new(&self.records)
    }

    /// Valuation and the general report.
    pub fn reports(&self) -> StockReports<'_> {
        StockReports::new(&self.records)
    }

    pub(crate) fn position(&self, code: ProductCode) -> Option<usize> {
        self.records.iter().position(|record| record.code == code)
    }

    pub(crate) fn record_mut(&mut self, index: usize) -> &mut Record {
        &mut self.records[index]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{Money, ValidationError, SEED_INVENTORY};

    fn seeded() -> InventoryStore {
        InventoryStore::from_seed(SEED_INVENTORY).unwrap()
    }

    fn new_product(description: &str) -> NewProduct {
        NewProduct {
            description: description.to_string(),
            quantity: 3,
            unit_cost: Money::from_cents(1000),
            sale_price: Money::from_cents(1500),
        }
    }

    fn record(code: u64) -> Record {
        Record {
            description: format!("Item {code}"),
            code: ProductCode::new(code),
            quantity: 1,
            unit_cost: Money::from_cents(100),
            sale_price: Money::from_cents(200),
        }
    }

    #[test]
    fn test_from_seed_keeps_order() {
        let store = seeded();
        assert_eq!(store.len(), 12);
        let codes: Vec<u64> = store.list_all().iter().map(|r| r.code.value()).collect();
        assert_eq!(codes, (201..=212).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_seed_rejects_bad_blob() {
        let err = InventoryStore::from_seed("A;1;1;1.00;2.00#B;2").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::SeedRecord { position: 2, .. })
        ));
    }

    #[test]
    fn test_from_seed_rejects_duplicate_codes() {
        let err = InventoryStore::from_seed("A;7;1;1.00;2.00#B;7;1;1.00;2.00").unwrap_err();
        assert_eq!(err, StoreError::DuplicateCode(ProductCode::new(7)));
    }

    #[test]
    fn test_next_code_on_empty_store_fails() {
        let store = InventoryStore::new();
        assert_eq!(store.next_code(), Err(StoreError::EmptyStore));
    }

    #[test]
    fn test_next_code_is_max_plus_one() {
        let store = InventoryStore::from_records(vec![record(5), record(40), record(12)]).unwrap();
        assert_eq!(store.next_code(), Ok(ProductCode::new(41)));
    }

    #[test]
    fn test_create_codes_strictly_increase() {
        let mut store = seeded();
        let mut previous = store.next_code().unwrap();
        assert_eq!(previous.value(), 213);

        for i in 0..20 {
            let code = store.create(new_product(&format!("Cable {i}"))).unwrap().code;
            assert!(code >= previous);
            assert!(store.list_all().iter().filter(|r| r.code == code).count() == 1);
            previous = code.next().unwrap();
        }
        assert_eq!(store.len(), 32);
    }

    #[test]
    fn test_create_returns_the_stored_record() {
        let mut store = seeded();
        store.remove(ProductCode::new(203)).unwrap();

        let created = store.create(new_product("Webcam")).unwrap().clone();
        assert_eq!(created.code.value(), 213);
        assert_eq!(created.description, "Webcam");
        assert_eq!(store.list_all().last(), Some(&created));
        assert_eq!(store.find_by_code(created.code), Some(&created));
    }

    #[test]
    fn test_removed_highest_code_is_not_reused() {
        let mut store = seeded();
        let created = store.create(new_product("Webcam")).unwrap().code;
        assert_eq!(created.value(), 213);

        store.remove(created).unwrap();
        assert_eq!(store.next_code(), Ok(ProductCode::new(214)));

        let again = store.create(new_product("Webcam")).unwrap().code;
        assert_eq!(again.value(), 214);
    }

    #[test]
    fn test_add_rejects_live_and_retired_codes() {
        let mut store = seeded();
        assert_eq!(
            store.add(record(205)),
            Err(StoreError::DuplicateCode(ProductCode::new(205)))
        );

        store.remove(ProductCode::new(205)).unwrap();
        assert_eq!(
            store.add(record(205)),
            Err(StoreError::DuplicateCode(ProductCode::new(205)))
        );
        assert_eq!(store.len(), 11);
    }

    #[test]
    fn test_add_rejects_invalid_record() {
        let mut store = InventoryStore::new();
        let bad = Record {
            quantity: -2,
            ..record(1)
        };
        assert_eq!(
            store.add(bad),
            Err(StoreError::from(ValidationError::negative("quantity")))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_rejects_invalid_fields_without_change() {
        let mut store = seeded();
        let err = store.create(new_product("   ")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.len(), 12);
        assert_eq!(store.next_code(), Ok(ProductCode::new(213)));
    }

    #[test]
    fn test_create_on_empty_store_fails() {
        let mut store = InventoryStore::new();
        assert_eq!(
            store.create(new_product("First")).unwrap_err(),
            StoreError::EmptyStore
        );
    }

    #[test]
    fn test_remove_then_find_is_not_found() {
        let mut store = seeded();
        let code = ProductCode::new(203);

        let removed = store.remove(code).unwrap();
        assert_eq!(removed.description, "Mouse Logitech");
        assert!(store.find_by_code(code).is_none());
        assert_eq!(store.remove(code), Err(StoreError::NotFound(code)));
    }

    #[test]
    fn test_remove_preserves_order_of_others() {
        let mut store = seeded();
        store.remove(ProductCode::new(202)).unwrap();
        let codes: Vec<u64> = store.list_all().iter().take(3).map(|r| r.code.value()).collect();
        assert_eq!(codes, vec![201, 203, 204]);
    }

    #[test]
    fn test_find_by_code() {
        let store = seeded();
        let found = store.find_by_code(ProductCode::new(209)).unwrap();
        assert_eq!(found.description, "Impressora HP");
        assert!(store.find_by_code(ProductCode::new(999)).is_none());
    }
}
