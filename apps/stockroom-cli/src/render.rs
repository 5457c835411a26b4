//! # Outcome Rendering
//!
//! Writes an [`Outcome`] as text or JSON, depending on [`OutputFormat`].
//!
//! ## Text Layout
//! ```text
//! Products found:
//! Product:
//! description: Monitor LG
//! code: 206
//! quantity: 8
//! unit_cost: 750.00
//! sale_price: 1150.00
//! --------------------
//!
//! Total stock value: R$ 1234.50
//! ```

use std::io::Write;

use serde_json::json;
use stockroom_core::Record;

use crate::config::{CliConfig, OutputFormat};
use crate::dispatch::Outcome;
use crate::error::CliResult;

const RECORD_SEPARATOR_WIDTH: usize = 20;

/// Writes `outcome` to `out` in the configured format. `Exit` writes nothing.
pub fn render(out: &mut impl Write, outcome: &Outcome, config: &CliConfig) -> CliResult<()> {
    match config.output {
        OutputFormat::Text => render_text(out, outcome, config),
        OutputFormat::Json => render_json(out, outcome, config),
    }
}

fn render_text(out: &mut impl Write, outcome: &Outcome, config: &CliConfig) -> CliResult<()> {
    match outcome {
        Outcome::Records { title, records } => {
            writeln!(out, "\n{}:", title)?;
            for record in records {
                write_record(out, record)?;
            }
        }
        Outcome::Amount { label, amount } => {
            writeln!(out, "{}: {}", label, config.format_amount(*amount))?;
        }
        Outcome::Message(message) => writeln!(out, "{}", message)?,
        Outcome::Report(report) => writeln!(out, "{}", report)?,
        Outcome::Exit => {}
    }
    Ok(())
}

fn write_record(out: &mut impl Write, record: &Record) -> CliResult<()> {
    writeln!(out, "Product:")?;
    writeln!(out, "description: {}", record.description)?;
    writeln!(out, "code: {}", record.code)?;
    writeln!(out, "quantity: {}", record.quantity)?;
    writeln!(out, "unit_cost: {}", record.unit_cost)?;
    writeln!(out, "sale_price: {}", record.sale_price)?;
    writeln!(out, "{}", "-".repeat(RECORD_SEPARATOR_WIDTH))?;
    Ok(())
}

fn render_json(out: &mut impl Write, outcome: &Outcome, config: &CliConfig) -> CliResult<()> {
    let value = match outcome {
        Outcome::Records { title, records } => json!({ "title": title, "records": records }),
        Outcome::Amount { label, amount } => json!({
            "label": label,
            "amount": amount,
            "currency": config.currency_symbol,
        }),
        Outcome::Message(message) => json!({ "message": message }),
        Outcome::Report(report) => serde_json::to_value(report)?,
        Outcome::Exit => return Ok(()),
    };

    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::codec::parse_record;
    use stockroom_core::Money;
    use stockroom_store::StockReports;

    fn rendered(outcome: &Outcome, config: &CliConfig) -> String {
        let mut out = Vec::new();
        render(&mut out, outcome, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn json_config() -> CliConfig {
        CliConfig {
            output: OutputFormat::Json,
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_text_records() {
        let outcome = Outcome::Records {
            title: "Products".to_string(),
            records: vec![parse_record("Monitor LG;206;8;750.00;1150.00").unwrap()],
        };
        let text = rendered(&outcome, &CliConfig::default());

        assert!(text.contains("Products:\nProduct:\ndescription: Monitor LG\ncode: 206\n"));
        assert!(text.contains("sale_price: 1150.00\n--------------------\n"));
    }

    #[test]
    fn test_text_amount_uses_currency_symbol() {
        let outcome = Outcome::Amount {
            label: "Total stock value".to_string(),
            amount: Money::from_cents(123450),
        };
        assert_eq!(rendered(&outcome, &CliConfig::default()), "Total stock value: R$ 1234.50\n");
    }

    #[test]
    fn test_text_report_and_exit() {
        let records = vec![parse_record("Mouse;203;50;70.00;150.00").unwrap()];
        let report = StockReports::new(&records).general_report().unwrap();
        let text = rendered(&Outcome::Report(report), &CliConfig::default());
        assert!(text.starts_with("Description"));
        assert!(text.trim_end().ends_with("7500.00"));

        assert_eq!(rendered(&Outcome::Exit, &CliConfig::default()), "");
    }

    #[test]
    fn test_json_records() {
        let outcome = Outcome::Records {
            title: "Products".to_string(),
            records: vec![parse_record("Monitor LG;206;8;750.00;1150.00").unwrap()],
        };
        let value: serde_json::Value =
            serde_json::from_str(&rendered(&outcome, &json_config())).unwrap();

        assert_eq!(value["title"], "Products");
        assert_eq!(value["records"][0]["code"], 206);
        assert_eq!(value["records"][0]["unit_cost"], "750.00");
    }

    #[test]
    fn test_json_amount_and_message() {
        let amount = Outcome::Amount {
            label: "Presumed profit".to_string(),
            amount: Money::from_cents(-50),
        };
        let value: serde_json::Value =
            serde_json::from_str(&rendered(&amount, &json_config())).unwrap();
        assert_eq!(value["amount"], "-0.50");
        assert_eq!(value["currency"], "R$");

        let message = Outcome::Message("Product not found".to_string());
        let value: serde_json::Value =
            serde_json::from_str(&rendered(&message, &json_config())).unwrap();
        assert_eq!(value["message"], "Product not found");
    }
}
