//! # Mutation Operations
//!
//! Validated in-place updates of an existing record.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      update_quantity / update_price                     │
//! │                                                                         │
//! │  code ──► position(code) ──── none ────► Err(NotFound)                 │
//! │               │                                                         │
//! │               ▼                                                         │
//! │          check new value ──── rejected ─► Err(Validation)              │
//! │               │                           (record untouched)           │
//! │               ▼                                                         │
//! │          write one field ───────────────► Ok(&Record)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The check always runs before the write, so a rejected update never leaves
//! a half-changed record behind.

use stockroom_core::validation::validate_quantity;
use stockroom_core::{Money, ProductCode, Record, ValidationError};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::InventoryStore;

impl InventoryStore {
    /// Sets the stock quantity of the product carrying `code`.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] if no record has the code
    /// - validation error if `new_quantity` is negative
    pub fn update_quantity(
        &mut self,
        code: ProductCode,
        new_quantity: i64,
    ) -> StoreResult<&Record> {
        let index = self.position(code).ok_or(StoreError::NotFound(code))?;

        if let Err(err) = validate_quantity(new_quantity) {
            warn!(code = %code, new_quantity, "Quantity update rejected");
            return Err(err.into());
        }

        let record = self.record_mut(index);
        debug!(code = %code, from = record.quantity, to = new_quantity, "Updating quantity");
        record.quantity = new_quantity;
        Ok(&*record)
    }

    /// Sets the sale price of the product carrying `code`.
    ///
    /// ## Rules
    /// - The new price may equal the unit cost (zero margin)
    /// - It may never be lower than the unit cost
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] if no record has the code
    /// - [`ValidationError::BelowCost`] if `new_price < unit_cost`
    pub fn update_price(&mut self, code: ProductCode, new_price: Money) -> StoreResult<&Record> {
        let index = self.position(code).ok_or(StoreError::NotFound(code))?;
        let record = self.record_mut(index);

        if new_price < record.unit_cost {
            warn!(
                code = %code,
                price = %new_price,
                cost = %record.unit_cost,
                "Price update rejected"
            );
            return Err(ValidationError::BelowCost {
                price: new_price,
                cost: record.unit_cost,
            }
            .into());
        }

        debug!(code = %code, from = %record.sale_price, to = %new_price, "Updating sale price");
        record.sale_price = new_price;
        Ok(&*record)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
