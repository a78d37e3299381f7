//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Workflow verbs (`integrate`,
//! `release`, `get`, ...) share [`workflow::WorkflowCommand`]; the
//! resume-log verbs (`pending`, `abort`) and `completions` have their own.

pub mod abort;
pub mod completions;
pub mod dispatcher;
pub mod pending;
pub mod workflow;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
