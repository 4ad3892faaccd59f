//! Exit code constants for the ferry-release CLI.
//!
//! The helper keeps a narrow contract for callers in release scripts:
//! - 0: Success
//! - 1: Any caught failure (message on stderr)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any caught failure: bad arguments, a failed subprocess, a filesystem
/// error, or a failed release lookup.
pub const FAILURE: i32 = 1;
