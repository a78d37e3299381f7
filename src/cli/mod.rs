//! Command-line interface for `gdj`.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    AbortArgs, Cli, Commands, CompletionsArgs, IntegrateArgs, PendingArgs, SettingsArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
