//! # Stockroom CLI Library
//!
//! Interactive text menu over the inventory store.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── config.rs       ◄─── CliConfig from STOCKROOM_* variables
//! ├── command.rs      ◄─── Menu text, Command enum, prompting
//! ├── dispatch.rs     ◄─── Command → store call → Outcome
//! ├── render.rs       ◄─── Outcome → text or JSON
//! └── error.rs        ◄─── CliError
//! ```
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  read_command ──► execute ──► render ──► ask_continue ──┐               │
//! │       ▲                                                 │ "1"           │
//! │       └─────────────────────────────────────────────────┘               │
//! │                                                                         │
//! │  Exit / "2" / end of input ──► Ok(())                                  │
//! │  Store or input error ──► print message, ask_continue                  │
//! │  I/O or JSON error ──► Err (fatal)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod render;

use std::io::{self, BufRead, Write};

use stockroom_store::InventoryStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use command::Prompt;
use config::CliConfig;
use dispatch::{execute, Outcome};
use error::CliResult;

pub use error::CliError;

/// Runs the interactive menu on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr, `RUST_LOG` override)
/// 2. Load configuration from the environment
/// 3. Build the store from the seed blob
/// 4. Run the session until the user leaves
pub fn run() -> CliResult<()> {
    init_tracing();

    let config = CliConfig::from_env()?;
    info!(output = ?config.output, threshold = config.low_stock_threshold, "Starting Stockroom");

    let mut store = InventoryStore::from_seed(&config.seed)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut store, &config, stdin.lock(), stdout.lock())
}

/// Drives the menu until the user exits or input ends.
pub fn run_session<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    config: &CliConfig,
    input: R,
    output: W,
) -> CliResult<()> {
    let mut prompt = Prompt::new(input, output);

    loop {
        let result = prompt
            .read_command()
            .and_then(|command| match command {
                Some(command) => execute(store, command, config).map(Some),
                None => Ok(None),
            });

        match result {
            Ok(None) | Ok(Some(Outcome::Exit)) => break,
            Ok(Some(outcome)) => render::render(prompt.output(), &outcome, config)?,
            Err(err) if err.is_recoverable() => {
                warn!(error = %err, "Operation rejected");
                writeln!(prompt.output(), "{}", err)?;
            }
            Err(err) => return Err(err),
        }

        if !prompt.ask_continue()? {
            break;
        }
    }

    prompt.output().flush()?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: WARN, INFO for stockroom crates
///
/// Logs go to stderr so they never mix with menu output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stockroom=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================
