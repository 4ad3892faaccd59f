//! Command implementations for ferry-release.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command lives in its own submodule.

mod check;
mod update;
mod version;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Update(args) => update::cmd_update(args),
        Command::Version(args) => version::cmd_version(args),
        Command::Check => check::cmd_check(),
    }
}
