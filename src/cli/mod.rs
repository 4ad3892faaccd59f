//! CLI argument parsing for ferry-release.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ferry-release: refresh the gh-ferry extension from a version-stamped template.
///
/// The helper runs from a checkout of the ferry repository:
/// - The release version comes from the most recent reachable git tag
/// - The extension repository is re-cloned into a scratch directory
/// - The launcher template is stamped with version and build date
#[derive(Parser, Debug)]
#[command(name = "ferry-release")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for ferry-release.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Refresh the extension clone and write the stamped launcher.
    ///
    /// Resolves the release tag and build date, wipes and re-clones the
    /// extension repository into the scratch directory, and substitutes
    /// both tokens into the launcher template.
    Update(UpdateArgs),

    /// Print the release tag and build date that a run would stamp.
    ///
    /// Resolves metadata exactly like `update` but touches nothing.
    Version(VersionArgs),

    /// Compare the local release tag against the latest published release.
    ///
    /// Queries the GitHub releases API and prints an upgrade hint when the
    /// two differ.
    Check,
}

/// Arguments for the `update` command.
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Override the extension repository URL (or local path).
    #[arg(long)]
    pub remote: Option<String>,

    /// Override the scratch directory, relative to the repository root.
    #[arg(long)]
    pub work_dir: Option<String>,

    /// Path to the launcher template. Relative paths are resolved against
    /// the repository root. Defaults to `<template_dir>/<extension>`.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Use this release tag instead of the most recent reachable tag.
    #[arg(long)]
    pub tag: Option<String>,

    /// Use this build date instead of running the date command.
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `version` command.
#[derive(Parser, Debug)]
pub struct VersionArgs {
    /// Use this release tag instead of the most recent reachable tag.
    #[arg(long)]
    pub tag: Option<String>,

    /// Use this build date instead of running the date command.
    #[arg(long)]
    pub date: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
