//! Filesystem utilities for ferry-release.
//!
//! Provides the atomic write used for the stamped launcher.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
