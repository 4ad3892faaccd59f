//! Implementation of the `version` command.
//!
//! Resolves exactly the metadata an `update` run would stamp and prints it.
//! Useful in release scripts and for checking what a run is about to do.

use crate::cli::VersionArgs;
use crate::config::Config;
use crate::context::ReleaseContext;
use crate::error::Result;
use crate::release::{self, ReleaseMeta};

/// Execute the `version` command.
pub fn cmd_version(args: VersionArgs) -> Result<()> {
    let ctx = ReleaseContext::resolve()?;
    let config = Config::load_or_default(ctx.config_path())?;
    let meta = release::resolve(
        &ctx.repo_root,
        &config,
        args.tag.as_deref(),
        args.date.as_deref(),
    )?;

    println!("{}", render_version(&config, &meta));
    Ok(())
}

/// Format the version line, e.g. `ferry version v0.9.3 2026-08-25`.
pub(crate) fn render_version(config: &Config, meta: &ReleaseMeta) -> String {
    format!(
        "{} version {} {}",
        config.cli_name(),
        meta.version,
        meta.build_date
    )
}
