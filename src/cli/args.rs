//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{
    Settings, DEFAULT_INTEGRATION2_BRANCH, DEFAULT_INTEGRATION_BRANCH, DEFAULT_RELEASE_BRANCH,
    DEFAULT_REMOTE,
};
use crate::resume::ResumeLog;

/// Git DJ - shortcuts for multi-step git workflows.
///
/// If a step fails, fix the problem and run `gdj continue` to pick up where
/// the sequence stopped.
#[derive(Debug, Parser)]
#[command(name = "gdj")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Run as if started in this directory
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Branch, remote and log overrides.
#[derive(Debug, Clone, clap::Args)]
pub struct SettingsArgs {
    /// Branch that `integrate` merges into
    #[arg(long, global = true, env = "GDJ_INTEGRATION_BRANCH", default_value = DEFAULT_INTEGRATION_BRANCH)]
    pub integration_branch: String,

    /// Branch that `integrate2` merges into
    #[arg(long, global = true, env = "GDJ_INTEGRATION2_BRANCH", default_value = DEFAULT_INTEGRATION2_BRANCH)]
    pub integration2_branch: String,

    /// Branch that `release` merges into
    #[arg(long, global = true, env = "GDJ_RELEASE_BRANCH", default_value = DEFAULT_RELEASE_BRANCH)]
    pub release_branch: String,

    /// Remote to pull from and push to
    #[arg(long, global = true, env = "GDJ_REMOTE", default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Where pending commands are kept between runs
    #[arg(long, global = true, env = "GDJ_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl SettingsArgs {
    /// Resolve into [`Settings`].
    pub fn resolve(&self) -> Settings {
        Settings {
            integration_branch: self.integration_branch.clone(),
            integration2_branch: self.integration2_branch.clone(),
            release_branch: self.release_branch.clone(),
            remote: self.remote.clone(),
            log_path: self
                .log_file
                .clone()
                .unwrap_or_else(|| ResumeLog::default().path().to_path_buf()),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge the current branch into the integration branch, and switch back
    Integrate,

    /// Merge the current branch into the second integration branch, and switch back
    Integrate2,

    /// Merge the current branch into BRANCH, and switch back
    I(IntegrateArgs),

    /// Merge the current branch into the release branch, and switch back
    Release,

    /// Pull changes for the current branch from the remote
    Get,

    /// Pull, then push the current branch to the remote
    Put,

    /// Push the current branch, then open a pull request in the browser
    Pr,

    /// Continue the previous failed command sequence (after fixing a merge, etc.)
    Continue,

    /// Show commands left over from a failed sequence
    Pending(PendingArgs),

    /// Discard commands left over from a failed sequence
    Abort(AbortArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `i` command.
#[derive(Debug, Clone, clap::Args)]
pub struct IntegrateArgs {
    /// Branch to merge the current branch into
    pub branch: String,
}

/// Arguments for the `pending` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PendingArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `abort` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AbortArgs {
    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
