//! Audit log for ferry-release.
//!
//! Release runs append one JSON object per line to `events.ndjson` in the
//! scratch directory: which release was stamped, when, and by whom. The log
//! sits beside the clone directory, not inside it, so the wipe-and-reclone
//! step never touches it.
//!
//! Fields per line: `ts` (RFC3339), `action`, `actor` (`user@host`), and a
//! freeform `details` object.

use crate::error::{ReleaseError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A launcher was stamped into a fresh clone.
    Update,
    /// The local tag was compared against the published releases.
    Check,
}

/// One line of the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// When the action happened.
    pub ts: DateTime<Utc>,
    /// What happened.
    pub action: EventAction,
    /// Who ran it, as `user@host`.
    pub actor: String,
    /// Action-specific payload (stamped version, compared tags).
    pub details: Value,
}

impl Event {
    /// Event for `action`, stamped with the current time and local actor and
    /// carrying an empty details object.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: local_actor(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Attach the action-specific payload.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize to one NDJSON line, without the trailing newline.
    fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ReleaseError::UserError(format!("failed to serialize event: {}", e)))
    }
}

/// `user@host` for the actor field. Unknown user or host degrades to the
/// literal `unknown` rather than failing the run.
fn local_actor() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append one event line to the log at `path`.
///
/// The parent directory and the file are created on first use. The write is
/// synced before returning; a run that reported success has its record on
/// disk.
pub fn append_event(path: &Path, event: &Event) -> Result<()> {
    let line = event.to_ndjson_line()?;

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ReleaseError::UserError(format!(
                "failed to create events directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ReleaseError::UserError(format!(
                "failed to open events file '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", line).map_err(|e| {
        ReleaseError::UserError(format!(
            "failed to write event to '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.sync_all().map_err(|e| {
        ReleaseError::UserError(format!(
            "failed to sync events file '{}': {}",
            path.display(),
            e
        ))
    })
}
