//! Sequential command execution with a persisted resume log.

use crate::error::{GitDjError, Result};
use crate::resume::ResumeLog;
use crate::shell::CommandExecutor;
use crate::ui::UserInterface;

/// Outcome of executing a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The command exited with status zero.
    Succeeded,
    /// The command exited non-zero, was killed, or never started.
    Failed { exit_code: Option<i32> },
}

/// Lifecycle of one [`SequenceRunner::run`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No command has been started yet.
    Ready,
    /// Commands are being executed.
    Running,
    /// Every command succeeded and the log is clear.
    Completed,
    /// A command failed; the log holds it and everything after it.
    Failed,
}

/// Runs command sequences one step at a time.
///
/// The whole sequence is written to the [`ResumeLog`] before the first step
/// runs. After each successful step the log is rewritten to hold exactly the
/// commands after it. A failed step leaves the log untouched, so it still
/// starts with the failed command.
pub struct SequenceRunner<'a> {
    executor: &'a mut dyn CommandExecutor,
    log: &'a ResumeLog,
    state: RunState,
}

impl<'a> SequenceRunner<'a> {
    /// Create a runner that executes through `executor` and persists to `log`.
    pub fn new(executor: &'a mut dyn CommandExecutor, log: &'a ResumeLog) -> Self {
        Self {
            executor,
            log,
            state: RunState::Ready,
        }
    }

    /// State after the most recent [`run`](Self::run).
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run `commands` in order, stopping at the first failure.
    ///
    /// Returns [`GitDjError::CommandFailed`] for the failing step after
    /// telling the user to fix it and run `gdj continue`.
    pub fn run(&mut self, commands: &[String], ui: &mut dyn UserInterface) -> Result<()> {
        self.state = RunState::Running;
        let total = commands.len();

        // The new queue replaces whatever an earlier sequence left behind.
        if let Err(e) = self.log.save(commands) {
            self.state = RunState::Failed;
            return Err(e);
        }

        for (index, command) in commands.iter().enumerate() {
            tracing::info!("Step {}/{}: {}", index + 1, total, command);
            ui.show_command(command);

            match self.execute_step(command) {
                StepOutcome::Succeeded => {
                    if let Err(e) = self.log.save(&commands[index + 1..]) {
                        self.state = RunState::Failed;
                        return Err(e);
                    }
                }
                StepOutcome::Failed { exit_code } => {
                    tracing::debug!(
                        "Step {}/{} failed with exit code {:?}",
                        index + 1,
                        total,
                        exit_code
                    );
                    self.state = RunState::Failed;
                    ui.error(&format!("Command failed: {}.", command));
                    ui.error("Fix it and run gdj continue");
                    return Err(GitDjError::CommandFailed {
                        command: command.clone(),
                        code: exit_code,
                    });
                }
            }
        }

        self.state = RunState::Completed;
        Ok(())
    }

    fn execute_step(&mut self, command: &str) -> StepOutcome {
        match self.executor.run(command) {
            Ok(result) if result.success => StepOutcome::Succeeded,
            Ok(result) => StepOutcome::Failed {
                exit_code: result.exit_code,
            },
            Err(e) => {
                tracing::warn!("Could not run `{}`: {}", command, e);
                StepOutcome::Failed { exit_code: None }
            }
        }
    }
}
