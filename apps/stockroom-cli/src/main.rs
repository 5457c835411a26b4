//! # Stockroom Entry Point
//!
//! Runs the interactive menu on stdin/stdout. The actual setup is in
//! `lib.rs` so the session can be driven from tests.

use std::process::ExitCode;

fn main() -> ExitCode {
    match stockroom_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
