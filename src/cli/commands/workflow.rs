//! Workflow verbs: `integrate`, `integrate2`, `i`, `release`, `get`, `put`,
//! `pr` and `continue`.

use crate::config::Settings;
use crate::error::Result;
use crate::shell::CommandExecutor;
use crate::ui::UserInterface;
use crate::workflow::Workflow;

use super::dispatcher::{Command, CommandResult};

/// Which workflow to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// Merge the current branch into `target`.
    Integrate { target: String },
    /// Merge the current branch into the release branch.
    Release,
    /// Pull the current branch.
    Get,
    /// Pull, then push the current branch.
    Put,
    /// Push and open a pull request page.
    PullRequest,
    /// Resume the last failed sequence.
    Continue,
}

/// Runs one workflow verb.
pub struct WorkflowCommand<'a> {
    settings: &'a Settings,
    executor: &'a mut dyn CommandExecutor,
    verb: Verb,
}

impl<'a> WorkflowCommand<'a> {
    /// Create a new workflow command.
    pub fn new(settings: &'a Settings, executor: &'a mut dyn CommandExecutor, verb: Verb) -> Self {
        Self {
            settings,
            executor,
            verb,
        }
    }
}

impl Command for WorkflowCommand<'_> {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("Running {:?}", self.verb);
        let mut workflow = Workflow::new(self.settings, &mut *self.executor);

        match &self.verb {
            Verb::Integrate { target } => workflow.integrate(target, ui)?,
            Verb::Release => workflow.release(ui)?,
            Verb::Get => workflow.get(ui)?,
            Verb::Put => workflow.put(ui)?,
            Verb::PullRequest => workflow.pull_request(ui)?,
            Verb::Continue => workflow.resume(ui)?,
        }

        Ok(CommandResult::success())
    }
}
