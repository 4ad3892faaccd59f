//! Implementation of the `check` command.
//!
//! Compares the locally resolved release tag against the latest published
//! release of the CLI and prints an upgrade hint matched to how the CLI was
//! installed. The comparison is a literal string inequality; no version
//! ordering is attempted.

use crate::api;
use crate::config::Config;
use crate::context::ReleaseContext;
use crate::error::Result;
use crate::events::{Event, EventAction, append_event};
use crate::release::{self, ReleaseMeta};
use serde_json::json;

/// Execute the `check` command.
pub fn cmd_check() -> Result<()> {
    let ctx = ReleaseContext::resolve()?;
    let config = Config::load_or_default(ctx.config_path())?;
    let meta = release::resolve(&ctx.repo_root, &config, None, None)?;

    run_check(&ctx, &config, &meta)
}

/// Fetch the latest published release and report the comparison.
///
/// Also called best-effort at the end of a successful `update` run. Failing
/// to append the audit event only warns; the check result was already
/// printed and is worth keeping.
pub(crate) fn run_check(ctx: &ReleaseContext, config: &Config, meta: &ReleaseMeta) -> Result<()> {
    let latest = api::latest_release_tag(&config.release_repo)?;
    let cli = config.cli_name();

    if update_available(&meta.version, &latest) {
        println!(
            "A new release of {} is available: {} -> {}",
            cli, meta.version, latest
        );
        if let Some(command) = installed_cli_path(cli).and_then(|p| upgrade_hint(cli, &p)) {
            println!("To upgrade, run: {}", command);
        }
    } else {
        println!("{} is up to date ({})", cli, meta.version);
    }

    let event = Event::new(EventAction::Check).with_details(json!({
        "current": meta.version,
        "latest": latest,
    }));
    if let Err(e) = append_event(&ctx.events_path(config), &event) {
        eprintln!("Warning: failed to log check event: {}", e);
    }

    Ok(())
}

/// Literal inequality between the local tag and the published tag.
fn update_available(current: &str, latest: &str) -> bool {
    current != latest
}

/// Locate the installed CLI on PATH, if any.
fn installed_cli_path(cli: &str) -> Option<String> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        let candidate = dir.join(cli);
        if candidate.is_file() {
            return Some(candidate.to_string_lossy().to_string());
        }
        #[cfg(windows)]
        {
            let exe = dir.join(format!("{}.exe", cli));
            if exe.is_file() {
                return Some(exe.to_string_lossy().to_string());
            }
        }
    }
    None
}

/// Guess the upgrade command from where the CLI binary is installed.
///
/// Returns None when no known install method matches; the caller then skips
/// the hint rather than suggesting the wrong one.
fn upgrade_hint(cli: &str, cli_path: &str) -> Option<String> {
    if cli_path.contains("brew") {
        Some(format!("brew upgrade {}", cli))
    } else if cli_path.contains("/usr") {
        Some("curl -fsSL https://ferry.sh/install | bash".to_string())
    } else if cli_path.contains("gh") {
        Some(format!("gh extension upgrade {}", cli))
    } else if cli_path.contains("AppData") {
        Some("iwr -useb https://ferry.sh/install.ps1 | iex".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_available_is_literal_inequality() {
        assert!(!update_available("v1.2.3", "v1.2.3"));
        assert!(update_available("v1.2.3", "v1.2.4"));
        // No semantic ordering: a local tag ahead of the published release
        // still counts as different.
        assert!(update_available("v1.3.0", "v1.2.9"));
        assert!(update_available("v1.0.0", "1.0.0"));
    }

    #[test]
    fn test_upgrade_hint_brew() {
        let hint = upgrade_hint("ferry", "/opt/homebrew/bin/ferry");
        assert_eq!(hint, Some("brew upgrade ferry".to_string()));
    }

    #[test]
    fn test_upgrade_hint_usr() {
        let hint = upgrade_hint("ferry", "/usr/local/bin/ferry");
        assert_eq!(
            hint,
            Some("curl -fsSL https://ferry.sh/install | bash".to_string())
        );
    }

    #[test]
    fn test_upgrade_hint_gh_extension() {
        let hint = upgrade_hint("ferry", "/home/u/.local/share/gh/extensions/gh-ferry/ferry");
        assert_eq!(hint, Some("gh extension upgrade ferry".to_string()));
    }

    #[test]
    fn test_upgrade_hint_windows_installer() {
        let hint = upgrade_hint("ferry", "C:\\Users\\u\\AppData\\Local\\ferry\\ferry.exe");
        assert_eq!(
            hint,
            Some("iwr -useb https://ferry.sh/install.ps1 | iex".to_string())
        );
    }

    #[test]
    fn test_upgrade_hint_unknown_location() {
        assert_eq!(upgrade_hint("ferry", "/opt/tools/ferry"), None);
    }

    #[test]
    fn test_upgrade_hint_brew_wins_over_usr() {
        // Order matters: Homebrew under /usr/local must hint brew, not curl.
        let hint = upgrade_hint("ferry", "/usr/local/Homebrew/bin/ferry");
        assert_eq!(hint, Some("brew upgrade ferry".to_string()));
    }
}
