//! # CLI Error Type
//!
//! Unified error type for the interactive session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Prompt / Dispatcher                                                   │
//! │  Result<T, CliError>                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Store or Input error? ─── recoverable ──► print message, show menu    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Io / Json / Config ────── fatal ────────► main prints, exit code 1    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::ValidationError;
use stockroom_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the terminal or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An environment override holds an unusable value.
    #[error("Invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },

    /// The store rejected an operation (includes field validation).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The menu choice is not one of the listed options.
    #[error("Invalid option: '{0}'")]
    InvalidChoice(String),
}

impl CliError {
    /// Creates a configuration error.
    pub fn config(key: &str, reason: impl Into<String>) -> Self {
        CliError::Config {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the session can report this error and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CliError::Store(_) | CliError::InvalidChoice(_))
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Store(err.into())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
