//! Git command helpers for ferry-release.
//!
//! All git operations go through `exec::run_command`: repository root
//! detection, latest-tag lookup, and cloning the extension repository.

use crate::error::{ReleaseError, Result};
use crate::exec::{CommandOutput, run_command};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// This works correctly from any location within a git repository.
///
/// # Arguments
///
/// * `cwd` - The current working directory to start the search from
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(ReleaseError::UserError)` - If not inside a git repository
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = run_git_for_repo_detection(cwd.as_ref(), &["rev-parse", "--show-toplevel"])?;
    Ok(PathBuf::from(output.stdout.trim()))
}

/// Internal helper that returns a UserError instead of CommandFailed for repo
/// detection. "Not in a git repo" is an invocation problem, not a subprocess
/// failure.
fn run_git_for_repo_detection<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<CommandOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            ReleaseError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    let captured = CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    };

    if output.status.success() {
        Ok(captured)
    } else {
        let stderr = captured.stderr.trim();
        if stderr.contains("not a git repository") || stderr.contains("fatal:") {
            Err(ReleaseError::UserError(
                "not inside a git repository. Run this command from within the CLI repository."
                    .to_string(),
            ))
        } else {
            Err(ReleaseError::UserError(format!(
                "git command failed: {}",
                if stderr.is_empty() {
                    captured.stdout.trim()
                } else {
                    stderr
                }
            )))
        }
    }
}

/// Get the most recent tag reachable from HEAD using
/// `git describe --abbrev=0 --tags`.
///
/// Returns the raw command output, trailing newline included; the release
/// resolver owns the trim. Fails when the repository has no reachable tags.
pub fn describe_latest_tag<P: AsRef<Path>>(repo_root: P) -> Result<String> {
    let output = run_command(repo_root, "git", &["describe", "--abbrev=0", "--tags"])?;
    Ok(output.stdout)
}

/// Clone `remote` into `dest`.
///
/// `dest` must not exist; the sync step removes any previous clone before
/// calling this. The remote may be a URL or a local path.
pub fn clone_repo<P: AsRef<Path>>(cwd: P, remote: &str, dest: &Path) -> Result<()> {
    let dest = dest.to_string_lossy();
    run_command(cwd, "git", &["clone", remote, &dest])?;
    Ok(())
}
