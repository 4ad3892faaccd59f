//! External command runner for ferry-release.
//!
//! Provides a safe wrapper around subprocess invocation with captured
//! stdout/stderr and structured error handling. Both git and the configured
//! date helper go through this module.

use crate::error::{ReleaseError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful command execution.
///
/// Output is captured verbatim. Trailing line endings are preserved so that
/// callers which care about them (the version and date lookups) can apply
/// their own trim.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Raw standard output from the command.
    pub stdout: String,
    /// Raw standard error from the command.
    pub stderr: String,
}

impl CommandOutput {
    /// Create a new CommandOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Run an external command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `program` - The program to execute
/// * `args` - The command arguments
///
/// # Returns
///
/// * `Ok(CommandOutput)` - On successful execution (exit code 0)
/// * `Err(ReleaseError::CommandFailed)` - When the program cannot be spawned
///   or exits non-zero; the message carries the exit code and captured stderr
///
/// # Examples
///
/// ```no_run
/// use ferry_release::exec::run_command;
/// use std::path::Path;
///
/// let output = run_command(Path::new("."), "git", &["describe", "--abbrev=0", "--tags"])?;
/// println!("latest tag: {}", output.stdout);
/// # Ok::<(), ferry_release::error::ReleaseError>(())
/// ```
pub fn run_command<P: AsRef<Path>>(cwd: P, program: &str, args: &[&str]) -> Result<CommandOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new(program)
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            ReleaseError::CommandFailed(format!(
                "failed to execute {}: {}",
                display_name(program, args),
                e
            ))
        })?;

    let captured = CommandOutput::from_output(&output);

    if output.status.success() {
        Ok(captured)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if captured.stderr.trim().is_empty() {
            captured.stdout.trim().to_string()
        } else {
            captured.stderr.trim().to_string()
        };

        Err(ReleaseError::CommandFailed(format!(
            "{} failed (exit code {}): {}",
            display_name(program, args),
            exit_code,
            error_msg
        )))
    }
}

/// Short human-readable name for a command, e.g. `git describe`.
fn display_name(program: &str, args: &[&str]) -> String {
    match args.first() {
        Some(first) => format!("{} {}", program, first),
        None => program.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn run_command_success() {
        let temp_dir = TempDir::new().unwrap();
        let result = run_command(temp_dir.path(), "git", &["--version"]);
        assert!(result.is_ok());
        assert!(result.unwrap().stdout.starts_with("git version"));
    }

    #[test]
    #[cfg(not(windows))]
    fn run_command_preserves_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_command(temp_dir.path(), "echo", &["hello"]).unwrap();
        assert_eq!(output.stdout, "hello\n");
    }

    #[test]
    #[cfg(not(windows))]
    fn run_command_failure_includes_exit_code() {
        let temp_dir = TempDir::new().unwrap();
        let result = run_command(temp_dir.path(), "sh", &["-c", "exit 3"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ReleaseError::CommandFailed(_)));
        assert!(err.to_string().contains("exit code 3"));
    }

    #[test]
    #[cfg(not(windows))]
    fn run_command_failure_prefers_stderr() {
        let temp_dir = TempDir::new().unwrap();
        let result = run_command(temp_dir.path(), "sh", &["-c", "echo boom >&2; exit 1"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn run_command_spawn_failure_is_command_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = run_command(temp_dir.path(), "definitely-not-a-real-program", &["--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ReleaseError::CommandFailed(_)));
        assert!(err.to_string().contains("failed to execute"));
    }

    #[test]
    fn display_name_includes_first_arg() {
        assert_eq!(display_name("git", &["describe", "--tags"]), "git describe");
        assert_eq!(display_name("date", &[]), "date");
    }
}
