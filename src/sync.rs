//! Extension repository sync for ferry-release.
//!
//! Guarantees the clone destination is a fresh checkout of the extension
//! remote. The scratch directory is created if absent, any previous clone is
//! removed, and the remote is cloned in its place. Stale files from earlier
//! runs can therefore never leak into a release.

use crate::config::Config;
use crate::context::ReleaseContext;
use crate::error::{ReleaseError, Result};
use crate::git;
use std::fs;
use std::path::PathBuf;

/// Wipe and re-clone the extension repository.
///
/// Returns the clone directory on success. A failed clone is fatal to the
/// run; the destination is left missing or partial and nothing gets stamped
/// into it.
pub fn sync_extension_repo(ctx: &ReleaseContext, config: &Config) -> Result<PathBuf> {
    let work_dir = ctx.work_dir(config);
    let clone_dir = ctx.clone_dir(config);

    fs::create_dir_all(&work_dir).map_err(|e| {
        ReleaseError::UserError(format!(
            "failed to create scratch directory '{}': {}",
            work_dir.display(),
            e
        ))
    })?;

    if clone_dir.exists() {
        fs::remove_dir_all(&clone_dir).map_err(|e| {
            ReleaseError::UserError(format!(
                "failed to remove previous clone '{}': {}",
                clone_dir.display(),
                e
            ))
        })?;
    }

    println!("cloning {} to {}", config.remote, clone_dir.display());

    git::clone_repo(&work_dir, &config.remote, &clone_dir)?;

    println!("done cloning {} to {}", config.remote, clone_dir.display());

    Ok(clone_dir)
}
