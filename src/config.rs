//! Configuration model for ferry-release.
//!
//! This module defines the Config struct that represents `.ferry-release.yaml`
//! at the repository root. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), sensible defaults for every field, and
//! validation of config values. A missing config file means "all defaults".

use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the release helper.
///
/// This struct represents the contents of `.ferry-release.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the gh extension. Doubles as the clone directory name, the
    /// template file name, and the stamped launcher file name.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// URL of the extension repository to clone. May also be a local path.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// `owner/name` slug of the CLI project on GitHub, used by the update
    /// check to look up the latest published release.
    #[serde(default = "default_release_repo")]
    pub release_repo: String,

    /// Scratch directory relative to the repository root. Holds the clone
    /// and the audit log.
    #[serde(default = "default_work_dir")]
    pub work_dir: String,

    /// Directory relative to the repository root containing the launcher
    /// templates.
    #[serde(default = "default_template_dir")]
    pub template_dir: String,

    /// Command that prints the build date (empty uses the built-in UTC date).
    #[serde(default = "default_date_command")]
    pub date_command: String,

    /// Whether `update` runs a best-effort update check after a successful run.
    #[serde(default = "default_true")]
    pub show_updates: bool,
}

// Default value functions for serde
fn default_extension() -> String {
    "gh-ferry".to_string()
}
fn default_remote() -> String {
    "https://github.com/ferry-sh/gh-ferry.git".to_string()
}
fn default_release_repo() -> String {
    "ferry-sh/ferry".to_string()
}
fn default_work_dir() -> String {
    "tmp".to_string()
}
fn default_template_dir() -> String {
    "templates".to_string()
}
fn default_date_command() -> String {
    "date +%Y-%m-%d".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            remote: default_remote(),
            release_repo: default_release_repo(),
            work_dir: default_work_dir(),
            template_dir: default_template_dir(),
            date_command: default_date_command(),
            show_updates: default_true(),
        }
    }
}

impl Config {
    /// Load config from a YAML file, falling back to defaults when the file
    /// does not exist.
    ///
    /// A present-but-invalid file is an error; silently ignoring a typo'd
    /// config would stamp the wrong remote or directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the `.ferry-release.yaml` file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Loaded (or default) and validated config
    /// * `Err(ReleaseError::UserError)` - Read error, parse error, or
    ///   validation failure
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ReleaseError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ReleaseError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `extension` must be a non-empty bare file name
    /// - `remote` must be non-empty
    /// - `release_repo` must be an `owner/name` slug
    /// - `work_dir` and `template_dir` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(ReleaseError::UserError(
                "config validation failed: extension must be non-empty".to_string(),
            ));
        }
        if self.extension.contains('/') || self.extension.contains('\\') {
            return Err(ReleaseError::UserError(format!(
                "config validation failed: extension must be a bare file name (found '{}')",
                self.extension
            )));
        }

        if self.remote.is_empty() {
            return Err(ReleaseError::UserError(
                "config validation failed: remote must be non-empty".to_string(),
            ));
        }

        let parts: Vec<&str> = self.release_repo.split('/').collect();
        if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
            return Err(ReleaseError::UserError(format!(
                "config validation failed: release_repo must be an 'owner/name' slug (found '{}')",
                self.release_repo
            )));
        }

        if self.work_dir.is_empty() {
            return Err(ReleaseError::UserError(
                "config validation failed: work_dir must be non-empty".to_string(),
            ));
        }
        if self.template_dir.is_empty() {
            return Err(ReleaseError::UserError(
                "config validation failed: template_dir must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Name of the CLI the extension launches, derived from the extension
    /// name. gh extensions carry a `gh-` prefix; `gh-ferry` launches `ferry`.
    pub fn cli_name(&self) -> &str {
        self.extension.strip_prefix("gh-").unwrap_or(&self.extension)
    }
}
