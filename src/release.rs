//! Release metadata resolution for ferry-release.
//!
//! Produces the version tag and build date that get stamped into the
//! extension launcher. Resolution happens once, explicitly, at the start of
//! a run: a failing tag lookup or date helper stops the run instead of
//! leaking empty strings into the template.

use crate::config::Config;
use crate::error::{ReleaseError, Result};
use crate::exec::run_command;
use crate::git;
use chrono::Utc;
use std::path::Path;

/// Date format used when `date_command` is empty.
const BUILTIN_DATE_FORMAT: &str = "%Y-%m-%d";

/// Version tag and build date for one release run.
///
/// Resolved once and immutable afterwards; every consumer in the run sees
/// the same pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseMeta {
    /// Most recent tag reachable from HEAD (e.g. `v0.9.3`).
    pub version: String,
    /// Formatted build date (e.g. `2026-08-25`).
    pub build_date: String,
}

/// Resolve the release metadata for a run.
///
/// `tag` and `date` override the corresponding lookup entirely and are used
/// verbatim. Without overrides, the version comes from
/// `git describe --abbrev=0 --tags` in `repo_root`, and the date from the
/// configured `date_command` (or the built-in UTC date when that is empty).
/// Subprocess output is passed through [`chomp`].
pub fn resolve(
    repo_root: &Path,
    config: &Config,
    tag: Option<&str>,
    date: Option<&str>,
) -> Result<ReleaseMeta> {
    let version = match tag {
        Some(tag) => tag.to_string(),
        None => chomp(&git::describe_latest_tag(repo_root)?),
    };

    let build_date = match date {
        Some(date) => date.to_string(),
        None => resolve_build_date(repo_root, config)?,
    };

    Ok(ReleaseMeta {
        version,
        build_date,
    })
}

/// Run the configured date command, or fall back to the built-in UTC date
/// when the command is empty.
fn resolve_build_date(repo_root: &Path, config: &Config) -> Result<String> {
    let command = config.date_command.trim();
    if command.is_empty() {
        return Ok(Utc::now().format(BUILTIN_DATE_FORMAT).to_string());
    }

    let mut parts = shell_words::split(command).map_err(|e| {
        ReleaseError::UserError(format!(
            "failed to parse date_command '{}': {}. Check for unmatched quotes.",
            command, e
        ))
    })?;

    if parts.is_empty() {
        return Ok(Utc::now().format(BUILTIN_DATE_FORMAT).to_string());
    }

    let program = parts.remove(0);
    let args: Vec<&str> = parts.iter().map(String::as_str).collect();

    let output = run_command(repo_root, &program, &args)?;
    Ok(chomp(&output.stdout))
}

/// Strip the first newline and the first carriage return from a command's
/// output.
///
/// For well-formed single-line output this removes the trailing line ending,
/// whether `\n` or `\r\n`. It is deliberately not a full trim: spaces and
/// any line breaks beyond the first of each kind are kept.
pub fn chomp(s: &str) -> String {
    s.replacen('\n', "", 1).replacen('\r', "", 1)
}
