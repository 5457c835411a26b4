//! # Stock Reports
//!
//! Valuation totals and the general inventory report.
//!
//! ## Report Layout
//! ```text
//! Description                         Code       Quantity      Cost     Sale Price  ...
//! ===================================================================================
//! Notebook Dell                        201             15   3200.00        4500.00  ...
//! ===================================================================================
//! TOTAL                                                                              ...
//! ```
//!
//! Every sum is checked. An overflow surfaces as
//! [`CoreError::DataIntegrity`] rather than a wrapped total.

use serde::Serialize;
use std::fmt;

use stockroom_core::{CoreError, CoreResult, Money, ProductCode, Record};
use tracing::debug;

use crate::error::StoreResult;

/// Column widths: description, code, quantity, cost, sale price, cost total,
/// revenue total.
const COLUMN_WIDTHS: [usize; 7] = [30, 10, 15, 10, 15, 15, 20];

// =============================================================================
// Report Types
// =============================================================================

/// One line of the general report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub description: String,
    pub code: ProductCode,
    pub quantity: i64,
    pub unit_cost: Money,
    pub sale_price: Money,
    /// `quantity × unit_cost`
    pub cost_total: Money,
    /// `quantity × sale_price`
    pub revenue_total: Money,
}

impl ReportRow {
    fn from_record(record: &Record) -> CoreResult<Self> {
        Ok(ReportRow {
            description: record.description.clone(),
            code: record.code,
            quantity: record.quantity,
            unit_cost: record.unit_cost,
            sale_price: record.sale_price,
            cost_total: record.cost_total()?,
            revenue_total: record.revenue_total()?,
        })
    }
}

/// The general report: one row per record in store order plus grand totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockReport {
    pub rows: Vec<ReportRow>,
    pub total_cost: Money,
    pub total_revenue: Money,
}

impl fmt::Display for StockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [desc, code, qty, cost, price, cost_total, revenue_total] = COLUMN_WIDTHS;
        let rule = "=".repeat(COLUMN_WIDTHS.iter().sum());

        writeln!(
            f,
            "{:<desc$}{:>code$}{:>qty$}{:>cost$}{:>price$}{:>cost_total$}{:>revenue_total$}",
            "Description", "Code", "Quantity", "Cost", "Sale Price", "Cost Total", "Revenue Total",
        )?;
        writeln!(f, "{}", rule)?;

        for row in &self.rows {
            writeln!(
                f,
                "{:<desc$}{:>code$}{:>qty$}{:>cost$}{:>price$}{:>cost_total$}{:>revenue_total$}",
                row.description,
                row.code,
                row.quantity,
                row.unit_cost,
                row.sale_price,
                row.cost_total,
                row.revenue_total,
            )?;
        }

        writeln!(f, "{}", rule)?;
        write!(
            f,
            "{:<desc$}{:>code$}{:>qty$}{:>cost$}{:>price$}{:>cost_total$}{:>revenue_total$}",
            "TOTAL", "", "", "", "", self.total_cost, self.total_revenue,
        )
    }
}

// =============================================================================
// Report Queries
// =============================================================================

/// Read-only reporting view over the store's records.
#[derive(Debug, Clone, Copy)]
pub struct StockReports<'a> {
    records: &'a [Record],
}

impl<'a> StockReports<'a> {
    /// Creates a reporting view over `records`.
    pub fn new(records: &'a [Record]) -> Self {
        StockReports { records }
    }

    /// Σ quantity × sale_price over all records.
    pub fn total_stock_value(&self) -> StoreResult<Money> {
        let total = checked_sum(self.records.iter().map(Record::revenue_total), "stock value")?;
        debug!(total = %total, "Computed total stock value");
        Ok(total)
    }

    /// Σ quantity × (sale_price − unit_cost) over all records.
    pub fn presumed_profit(&self) -> StoreResult<Money> {
        let profits = self.records.iter().map(Record::presumed_profit);
        let total = checked_sum(profits, "presumed profit")?;
        debug!(total = %total, "Computed presumed profit");
        Ok(total)
    }

    /// Builds the general report in store order.
    pub fn general_report(&self) -> StoreResult<StockReport> {
        let rows = self
            .records
            .iter()
            .map(ReportRow::from_record)
            .collect::<CoreResult<Vec<_>>>()?;

        let total_cost = checked_sum(rows.iter().map(|row| Ok(row.cost_total)), "cost total")?;
        let total_revenue =
            checked_sum(rows.iter().map(|row| Ok(row.revenue_total)), "revenue total")?;

        debug!(rows = rows.len(), "Built general report");
        Ok(StockReport {
            rows,
            total_cost,
            total_revenue,
        })
    }
}

fn checked_sum(mut values: impl Iterator<Item = CoreResult<Money>>, what: &str) -> CoreResult<Money> {
    values.try_fold(Money::zero(), |acc, value| {
        acc.checked_add(value?)
            .ok_or_else(|| CoreError::DataIntegrity(format!("{} of the inventory overflows", what)))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
