//! Implementation of the `update` command.
//!
//! This is the orchestrated release run:
//!
//! 1. Resolve the release tag and build date
//! 2. Wipe and re-clone the extension repository into the scratch directory
//! 3. Stamp the launcher template into the fresh clone
//! 4. Record the run in the audit log
//!
//! Steps run strictly in sequence and the first failure stops the run. After
//! a successful run, an update check runs best-effort when `show_updates` is
//! enabled; its failure never fails the command.

use crate::cli::UpdateArgs;
use crate::config::Config;
use crate::context::ReleaseContext;
use crate::error::Result;
use crate::events::{Event, EventAction, append_event};
use crate::release;
use crate::stamp;
use crate::sync;
use serde_json::json;
use std::path::PathBuf;

use super::check;

/// Execute the `update` command.
pub fn cmd_update(args: UpdateArgs) -> Result<()> {
    let ctx = ReleaseContext::resolve()?;
    run_update(&ctx, args)
}

/// Run the release refresh against a resolved context.
pub(crate) fn run_update(ctx: &ReleaseContext, args: UpdateArgs) -> Result<()> {
    let mut config = Config::load_or_default(ctx.config_path())?;

    // Flags override the config file for one run.
    if let Some(remote) = args.remote {
        config.remote = remote;
    }
    if let Some(work_dir) = args.work_dir {
        config.work_dir = work_dir;
    }
    config.validate()?;

    let meta = release::resolve(
        &ctx.repo_root,
        &config,
        args.tag.as_deref(),
        args.date.as_deref(),
    )?;

    sync::sync_extension_repo(ctx, &config)?;

    println!("updating local {}...", config.extension);

    let template_path = resolve_template_path(ctx, &config, args.template);
    let output_path = ctx.output_path(&config);
    stamp::stamp_template(&template_path, &output_path, &meta)?;

    let event = Event::new(EventAction::Update).with_details(json!({
        "version": meta.version,
        "build_date": meta.build_date,
        "remote": config.remote,
        "output": output_path.display().to_string(),
    }));
    append_event(&ctx.events_path(&config), &event)?;

    println!(
        "stamped {} {} ({}) into {}",
        config.extension,
        meta.version,
        meta.build_date,
        output_path.display()
    );

    if config.show_updates {
        if let Err(e) = check::run_check(ctx, &config, &meta) {
            eprintln!("Warning: update check failed: {}", e);
        }
    }

    Ok(())
}

/// Resolve the template path, honoring the `--template` override.
fn resolve_template_path(
    ctx: &ReleaseContext,
    config: &Config,
    template: Option<PathBuf>,
) -> PathBuf {
    match template {
        Some(path) if path.is_absolute() => path,
        Some(path) => ctx.repo_root.join(path),
        None => ctx.template_path(config),
    }
}
