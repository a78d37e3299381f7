//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use clap::CommandFactory;

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::shell::CommandExecutor;
use crate::ui::UserInterface;

use super::abort::AbortCommand;
use super::completions::CompletionsCommand;
use super::pending::PendingCommand;
use super::workflow::{Verb, WorkflowCommand};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher with resolved settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Dispatch and execute a command.
    ///
    /// Workflow verbs run their git commands through `executor`.
    pub fn dispatch(
        &self,
        cli: &Cli,
        executor: &mut dyn CommandExecutor,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let settings = &self.settings;
        let verb = match &cli.command {
            Some(Commands::Integrate) => Verb::Integrate {
                target: settings.integration_branch.clone(),
            },
            Some(Commands::Integrate2) => Verb::Integrate {
                target: settings.integration2_branch.clone(),
            },
            Some(Commands::I(args)) => Verb::Integrate {
                target: args.branch.clone(),
            },
            Some(Commands::Release) => Verb::Release,
            Some(Commands::Get) => Verb::Get,
            Some(Commands::Put) => Verb::Put,
            Some(Commands::Pr) => Verb::PullRequest,
            Some(Commands::Continue) => Verb::Continue,
            Some(Commands::Pending(args)) => {
                return PendingCommand::new(settings.resume_log(), args.clone()).execute(ui);
            }
            Some(Commands::Abort(args)) => {
                return AbortCommand::new(settings.resume_log(), args.clone()).execute(ui);
            }
            Some(Commands::Completions(args)) => {
                return CompletionsCommand::new(args.clone()).execute(ui);
            }
            None => {
                Cli::command().print_help()?;
                return Ok(CommandResult::success());
            }
        };

        WorkflowCommand::new(settings, executor, verb).execute(ui)
    }
}
