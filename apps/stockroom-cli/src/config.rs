//! # CLI Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::str::FromStr;

use stockroom_core::validation::parse_integer;
use stockroom_core::{Money, DEFAULT_LOW_STOCK_THRESHOLD, SEED_INVENTORY};

use crate::error::{CliError, CliResult};

pub const ENV_LOW_STOCK_THRESHOLD: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";
pub const ENV_CURRENCY_SYMBOL: &str = "STOCKROOM_CURRENCY_SYMBOL";
pub const ENV_OUTPUT: &str = "STOCKROOM_OUTPUT";
pub const ENV_SEED: &str = "STOCKROOM_SEED";

/// How outcomes are written to the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listings and the fixed-width report.
    #[default]
    Text,
    /// Pretty-printed JSON documents.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("expected 'text' or 'json', got '{}'", other)),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Default threshold for the low-stock filter (menu option 7).
    pub low_stock_threshold: i64,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Output format for outcomes.
    pub output: OutputFormat,

    /// Seed blob the store starts from.
    pub seed: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            currency_symbol: "R$".to_string(),
            output: OutputFormat::Text,
            seed: SEED_INVENTORY.to_string(),
        }
    }
}

impl CliConfig {
    /// Creates a CliConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_LOW_STOCK_THRESHOLD`: whole number
    /// - `STOCKROOM_CURRENCY_SYMBOL`: non-empty text
    /// - `STOCKROOM_OUTPUT`: `text` or `json`
    /// - `STOCKROOM_SEED`: replacement seed blob
    pub fn from_env() -> CliResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CliResult<Self> {
        let mut config = CliConfig::default();

        if let Some(raw) = lookup(ENV_LOW_STOCK_THRESHOLD) {
            config.low_stock_threshold = parse_integer(&raw, "threshold")
                .map_err(|err| CliError::config(ENV_LOW_STOCK_THRESHOLD, err.to_string()))?;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            let symbol = symbol.trim();
            if symbol.is_empty() {
                return Err(CliError::config(ENV_CURRENCY_SYMBOL, "must not be empty"));
            }
            config.currency_symbol = symbol.to_string();
        }

        if let Some(raw) = lookup(ENV_OUTPUT) {
            config.output = raw
                .parse()
                .map_err(|reason: String| CliError::config(ENV_OUTPUT, reason))?;
        }

        if let Some(seed) = lookup(ENV_SEED) {
            config.seed = seed;
        }

        Ok(config)
    }

    /// Formats an amount with the currency symbol, e.g. `R$ 1234.50`.
    pub fn format_amount(&self, amount: Money) -> String {
        format!("{} {}", self.currency_symbol, amount)
    }
}
