//! Ferry-release: release stamping helper for the ferry CLI.
//!
//! This is the main entry point for the `ferry-release` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and maps
//! errors to the process exit code.

mod cli;
mod commands;
pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod exec;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod release;
pub mod stamp;
pub mod sync;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(exit_codes::FAILURE as u8)
        }
    }
}
