//! GitHub releases API client for the update check.
//!
//! Fetches the latest published release of the CLI project and extracts its
//! tag name. One request, no retries and no pagination; the caller decides
//! whether a failure is fatal.

use crate::error::{ReleaseError, Result};

/// Fetch the tag name of the latest published release for `repo_slug`
/// (`owner/name`).
pub fn latest_release_tag(repo_slug: &str) -> Result<String> {
    let url = format!("https://api.github.com/repos/{}/releases/latest", repo_slug);

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(&url)
        // The GitHub API rejects requests without a User-Agent.
        .header(reqwest::header::USER_AGENT, "ferry-release")
        .send()
        .map_err(|e| ReleaseError::NetworkError(format!("failed to fetch {}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(ReleaseError::NetworkError(format!(
            "{} returned HTTP {}",
            url,
            response.status()
        )));
    }

    let body = response.text().map_err(|e| {
        ReleaseError::NetworkError(format!("failed to read response from {}: {}", url, e))
    })?;

    parse_latest_tag(&body)
}

/// Extract `tag_name` from a releases-API JSON body.
pub fn parse_latest_tag(body: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ReleaseError::NetworkError(format!("failed to parse release JSON: {}", e)))?;

    match value.get("tag_name").and_then(|v| v.as_str()) {
        Some(tag) if !tag.is_empty() => Ok(tag.to_string()),
        _ => Err(ReleaseError::NetworkError(
            "release JSON has no tag_name field".to_string(),
        )),
    }
}
