//! Git DJ - shortcuts for multi-step git workflows.
//!
//! `gdj` turns routine branch juggling (merge my branch into staging and come
//! back, release to master, pull, push, open a pull request) into one verb.
//! Every verb expands to a sequence of shell commands that run one at a time.
//! When a step fails, the unfinished part of the sequence is kept in a resume
//! log so `gdj continue` can pick up where it stopped once the problem is
//! fixed.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Branch names, remote and resume log location
//! - [`error`] - Error types and result aliases
//! - [`git`] - Read-only git queries (current branch, dirty tree, remote URL)
//! - [`resume`] - The resume log of pending commands
//! - [`runner`] - Sequential command execution
//! - [`shell`] - Shell command execution and quoting
//! - [`ui`] - Terminal output and prompts
//! - [`workflow`] - The command sequences behind each verb
//!
//! # Example
//!
//! ```
//! use git_dj::workflow::integrate_commands;
//!
//! let commands = integrate_commands("feature", "staging", "origin");
//! assert_eq!(commands.first().unwrap(), "git checkout staging");
//! assert_eq!(commands.last().unwrap(), "git checkout feature");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod resume;
pub mod runner;
pub mod shell;
pub mod ui;
pub mod workflow;

pub use error::{GitDjError, Result};
