//! # Command Dispatcher
//!
//! Executes a [`Command`] against the store and describes the result as an
//! [`Outcome`]. Nothing here writes to the terminal.

use stockroom_core::{Money, Record};
use stockroom_store::{InventoryStore, StockReport};
use tracing::{debug, info};

use crate::command::Command;
use crate::config::CliConfig;
use crate::error::CliResult;

/// What a command produced, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A titled list of records.
    Records { title: String, records: Vec<Record> },
    /// A labelled monetary total.
    Amount { label: String, amount: Money },
    /// A confirmation or "nothing found" line.
    Message(String),
    /// The general report.
    Report(StockReport),
    /// Leave the session.
    Exit,
}

impl Outcome {
    fn records(title: &str, records: Vec<Record>) -> Self {
        Outcome::Records {
            title: title.to_string(),
            records,
        }
    }

    fn records_or(title: &str, records: Vec<Record>, when_empty: &str) -> Self {
        if records.is_empty() {
            Outcome::Message(when_empty.to_string())
        } else {
            Outcome::records(title, records)
        }
    }

    fn amount(label: &str, amount: Money) -> Self {
        Outcome::Amount {
            label: label.to_string(),
            amount,
        }
    }
}

/// Runs one command. Store errors are returned untouched for the session to
/// report; the store is unchanged whenever this returns `Err`.
pub fn execute(
    store: &mut InventoryStore,
    command: Command,
    config: &CliConfig,
) -> CliResult<Outcome> {
    debug!(?command, "Executing command");

    let outcome = match command {
        Command::Create(product) => {
            let record = store.create(product)?;
            Outcome::Message(format!(
                "Product registered: {} (code {})",
                record.description, record.code
            ))
        }
        Command::List => Outcome::records("Products", store.list_all().to_vec()),
        Command::Sort(order) => Outcome::records(
            "Products by quantity",
            store.query().sort_by_quantity(order),
        ),
        Command::Search(text) => Outcome::records_or(
            "Products found",
            store.query().search_text(&text),
            "Product not found",
        ),
        Command::Remove(code) => {
            let removed = store.remove(code)?;
            Outcome::Message(format!(
                "Product removed: {} (code {})",
                removed.description, removed.code
            ))
        }
        Command::OutOfStock => Outcome::records_or(
            "Out-of-stock products",
            store.query().out_of_stock(),
            "No products are out of stock",
        ),
        Command::FilterBelow(threshold) => {
            let threshold = threshold.unwrap_or(config.low_stock_threshold);
            Outcome::records_or(
                &format!("Products with quantity below {}", threshold),
                store.query().filter_below(threshold),
                &format!("No products with quantity below {}", threshold),
            )
        }
        Command::UpdateQuantity { code, quantity } => {
            let record = store.update_quantity(code, quantity)?;
            Outcome::Message(format!(
                "Quantity of {} updated to {}",
                record.code, record.quantity
            ))
        }
        Command::UpdatePrice { code, price } => {
            let record = store.update_price(code, price)?;
            Outcome::Message(format!(
                "Sale price of {} updated to {}",
                record.code,
                config.format_amount(record.sale_price)
            ))
        }
        Command::TotalValue => {
            Outcome::amount("Total stock value", store.reports().total_stock_value()?)
        }
        Command::PresumedProfit => {
            Outcome::amount("Presumed profit", store.reports().presumed_profit()?)
        }
        Command::GeneralReport => Outcome::Report(store.reports().general_report()?),
        Command::Exit => {
            info!("Session ended by user");
            Outcome::Exit
        }
    };

    Ok(outcome)
}

// =============================================================================
// Unit Tests
// =============================================================================
