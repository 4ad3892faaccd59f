//! Error types for the ferry-release CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use thiserror::Error;

/// Main error type for release helper operations.
///
/// Every variant is fatal to the run and maps to the single failure exit
/// code; the variants exist so callers can tell a bad invocation apart from
/// a failed subprocess or a failed API request.
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// User provided invalid arguments, config, or the filesystem refused an
    /// operation.
    #[error("{0}")]
    UserError(String),

    /// An external command (git or the date helper) could not be spawned or
    /// exited non-zero. The message carries the exit status and captured
    /// stderr.
    #[error("External command failed: {0}")]
    CommandFailed(String),

    /// A release API request failed or returned an unusable response.
    #[error("Release lookup failed: {0}")]
    NetworkError(String),
}

/// Result type alias for release helper operations.
pub type Result<T> = std::result::Result<T, ReleaseError>;
