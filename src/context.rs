//! Repository context resolution for ferry-release.
//!
//! This module provides the "environment resolution" layer that finds the
//! Git repository root from any working directory and derives the fixed
//! paths a release run touches: the launcher template, the scratch clone
//! directory, the stamped output file, and the audit log.
//!
//! All commands resolve their paths through this module so a run behaves the
//! same regardless of where inside the repository it is invoked from.

use crate::config::Config;
use crate::error::{ReleaseError, Result};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// File name of the optional config file at the repository root.
pub const CONFIG_FILE_NAME: &str = ".ferry-release.yaml";

/// File name of the append-only audit log inside the scratch directory.
pub const EVENTS_FILE_NAME: &str = "events.ndjson";

/// Resolved location of the CLI repository a release run operates on.
///
/// All derived paths are absolute as long as the repository root is, which
/// `git rev-parse --show-toplevel` guarantees.
#[derive(Debug, Clone)]
pub struct ReleaseContext {
    /// Absolute path to the repository root.
    pub repo_root: PathBuf,
}

impl ReleaseContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(ReleaseContext)` - Successfully resolved context
    /// * `Err(ReleaseError::UserError)` - If not in a git repository
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            ReleaseError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd)
    }

    /// Resolve the context from a specific directory.
    ///
    /// This is useful for testing or when the working directory is known.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let repo_root = git::get_repo_root(cwd)?;
        Ok(Self { repo_root })
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.repo_root.join(CONFIG_FILE_NAME)
    }

    /// Scratch directory holding the extension clone and the audit log.
    pub fn work_dir(&self, config: &Config) -> PathBuf {
        self.repo_root.join(&config.work_dir)
    }

    /// Directory the extension repository is cloned into.
    pub fn clone_dir(&self, config: &Config) -> PathBuf {
        self.work_dir(config).join(&config.extension)
    }

    /// The launcher template consumed by a run.
    pub fn template_path(&self, config: &Config) -> PathBuf {
        self.repo_root
            .join(&config.template_dir)
            .join(&config.extension)
    }

    /// The stamped launcher written by a run.
    pub fn output_path(&self, config: &Config) -> PathBuf {
        self.clone_dir(config).join(&config.extension)
    }

    /// Get the path to the audit log file.
    pub fn events_path(&self, config: &Config) -> PathBuf {
        self.work_dir(config).join(EVENTS_FILE_NAME)
    }
}
