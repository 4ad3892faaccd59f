//! Launcher stamping for ferry-release.
//!
//! Reads the extension launcher template, substitutes the version and build
//! date tokens, and writes the result into the clone directory.
//!
//! The tokens are fixed literals, not a template syntax. Only the first
//! occurrence of each is replaced, matching the launcher templates, which
//! contain each token exactly once.

use crate::error::{ReleaseError, Result};
use crate::fs::atomic_write_file;
use crate::release::ReleaseMeta;
use std::fs;
use std::path::Path;

/// Literal token replaced with the release version.
pub const VERSION_TOKEN: &str = "CLI_VERSION";

/// Literal token replaced with the build date.
pub const DATE_TOKEN: &str = "CLI_VERSION_DATE";

/// Substitute the version and date tokens in template content.
///
/// Only the first occurrence of each token is replaced, version first.
/// `CLI_VERSION` is a prefix of `CLI_VERSION_DATE`, so a template must place
/// its version token before its date token; the shipped templates do.
pub fn stamp_content(template: &str, meta: &ReleaseMeta) -> String {
    template
        .replacen(VERSION_TOKEN, &meta.version, 1)
        .replacen(DATE_TOKEN, &meta.build_date, 1)
}

/// Read the template at `template_path`, stamp it, and write the result to
/// `output_path`, replacing any existing file.
///
/// The output directory must already exist; it is the fresh clone produced
/// by the sync step. A missing template or missing destination surfaces as
/// an error instead of quietly producing nothing.
pub fn stamp_template(template_path: &Path, output_path: &Path, meta: &ReleaseMeta) -> Result<()> {
    let template = fs::read_to_string(template_path).map_err(|e| {
        ReleaseError::UserError(format!(
            "failed to read template '{}': {}",
            template_path.display(),
            e
        ))
    })?;

    let stamped = stamp_content(&template, meta);

    atomic_write_file(output_path, &stamped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn meta() -> ReleaseMeta {
        ReleaseMeta {
            version: "v1.0.0".to_string(),
            build_date: "2026-01-02".to_string(),
        }
    }

    #[test]
    fn test_stamp_replaces_both_tokens() {
        let template = "#!/bin/bash\nVERSION=\"CLI_VERSION\"\nVERSION_DATE=\"CLI_VERSION_DATE\"\n";
        let stamped = stamp_content(template, &meta());

        assert_eq!(
            stamped,
            "#!/bin/bash\nVERSION=\"v1.0.0\"\nVERSION_DATE=\"2026-01-02\"\n"
        );
    }

    #[test]
    fn test_stamp_without_tokens_is_identity() {
        let template = "#!/bin/bash\necho hello\n";
        assert_eq!(stamp_content(template, &meta()), template);
    }

    #[test]
    fn test_stamp_replaces_only_first_version_token() {
        let template = "CLI_VERSION and again CLI_VERSION";
        let stamped = stamp_content(template, &meta());

        assert_eq!(stamped, "v1.0.0 and again CLI_VERSION");
    }

    #[test]
    fn test_stamp_replaces_only_first_date_token() {
        // The version token comes first, so the version pass leaves the date
        // tokens untouched.
        let template = "V=CLI_VERSION\nD=CLI_VERSION_DATE\nD2=CLI_VERSION_DATE\n";
        let stamped = stamp_content(template, &meta());

        assert_eq!(stamped, "V=v1.0.0\nD=2026-01-02\nD2=CLI_VERSION_DATE\n");
    }

    #[test]
    fn test_date_token_before_version_token_is_mangled() {
        // Token order matters: the version pass binds to the CLI_VERSION
        // prefix of a leading date token. Templates keep version first.
        let template = "D=CLI_VERSION_DATE V=CLI_VERSION";
        let stamped = stamp_content(template, &meta());

        assert_eq!(stamped, "D=v1.0.0_DATE V=CLI_VERSION");
    }

    #[test]
    fn test_stamp_with_empty_values_removes_tokens() {
        let empty = ReleaseMeta {
            version: String::new(),
            build_date: String::new(),
        };
        let template = "V=CLI_VERSION D=CLI_VERSION_DATE";
        assert_eq!(stamp_content(template, &empty), "V= D=");
    }

    #[test]
    fn test_stamp_template_writes_output() {
        let temp_dir = TempDir::new().unwrap();
        let template_path = temp_dir.path().join("gh-ferry.tmpl");
        let output_path = temp_dir.path().join("gh-ferry");

        std::fs::write(&template_path, "version: CLI_VERSION (CLI_VERSION_DATE)\n").unwrap();

        stamp_template(&template_path, &output_path, &meta()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content, "version: v1.0.0 (2026-01-02)\n");
    }

    #[test]
    fn test_stamp_template_overwrites_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let template_path = temp_dir.path().join("gh-ferry.tmpl");
        let output_path = temp_dir.path().join("gh-ferry");

        std::fs::write(&template_path, "CLI_VERSION\n").unwrap();
        std::fs::write(&output_path, "stale launcher from a previous run\n").unwrap();

        stamp_template(&template_path, &output_path, &meta()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content, "v1.0.0\n");
    }

    #[test]
    fn test_stamp_template_missing_template_fails() {
        let temp_dir = TempDir::new().unwrap();
        let template_path = temp_dir.path().join("missing.tmpl");
        let output_path = temp_dir.path().join("gh-ferry");

        let result = stamp_template(&template_path, &output_path, &meta());
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("failed to read template"));
        assert!(!output_path.exists());
    }

    #[test]
    fn test_stamp_template_missing_destination_fails() {
        // When the clone step failed there is no destination directory; the
        // stamp must fail rather than conjure one up.
        let temp_dir = TempDir::new().unwrap();
        let template_path = temp_dir.path().join("gh-ferry.tmpl");
        let output_path = temp_dir.path().join("tmp").join("gh-ferry").join("gh-ferry");

        std::fs::write(&template_path, "CLI_VERSION\n").unwrap();

        let result = stamp_template(&template_path, &output_path, &meta());
        assert!(result.is_err());
        assert!(!output_path.exists());
    }
}
