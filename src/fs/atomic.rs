//! Atomic file writes for ferry-release.
//!
//! The stamped launcher overwrites a file inside a fresh clone. Writes go
//! through a temporary file in the target directory followed by a rename, so
//! an interrupted run never leaves a half-written launcher behind.
//!
//! The target directory must already exist. The sync step is responsible for
//! producing it; writing into a missing directory is an error, not a prompt
//! to create one.

use crate::error::{ReleaseError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// Writes the content to a temporary file in the same directory, syncs it to
/// disk, and renames it over the target. The target is either fully replaced
/// or untouched.
///
/// # Arguments
///
/// * `path` - The target file path; its parent directory must exist
/// * `content` - The bytes to write
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(ReleaseError::UserError)` - On write or rename failure, including a
///   missing parent directory
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let temp_path = generate_temp_path(path)?;

    write_and_sync(&temp_path, content)?;

    atomic_replace(&temp_path, path)?;

    Ok(())
}

/// Atomically write a string to a file.
///
/// Convenience wrapper around `atomic_write` for string content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ReleaseError::UserError("invalid file path".to_string()))?;

    let temp_name = format!(".{}.tmp", filename);
    Ok(parent.join(temp_name))
}

/// Write content to a file and sync to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        ReleaseError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        // Clean up temp file on error
        let _ = fs::remove_file(path);
        ReleaseError::UserError(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        ReleaseError::UserError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

/// Atomically replace the target file with the source file.
#[cfg(unix)]
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    // On POSIX, rename() is atomic and replaces the destination if it exists
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        ReleaseError::UserError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })?;

    // Sync the parent directory so the rename itself is persisted.
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Replace `target` by removing it and renaming the temp file into place.
/// Not atomic: the window between remove and rename is acceptable because
/// the target lives in a scratch clone the same run just created.
#[cfg(windows)]
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    if target.exists() {
        fs::remove_file(target).map_err(|e| {
            let _ = fs::remove_file(source);
            ReleaseError::UserError(format!(
                "failed to remove existing file '{}': {}",
                target.display(),
                e
            ))
        })?;
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        ReleaseError::UserError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })
}
