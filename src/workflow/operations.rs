//! Workflow operations behind the CLI verbs.

use crate::config::Settings;
use crate::error::{GitDjError, Result};
use crate::git::GitRepo;
use crate::resume::ResumeLog;
use crate::runner::SequenceRunner;
use crate::shell::CommandExecutor;
use crate::ui::UserInterface;

use super::sequences;

/// Checks preconditions, builds a command sequence and runs it.
///
/// Every operation replaces any previous resume log with its own sequence
/// before the first command runs. Precondition failures return early and
/// leave the log alone.
pub struct Workflow<'a> {
    settings: &'a Settings,
    executor: &'a mut dyn CommandExecutor,
    log: ResumeLog,
}

impl<'a> Workflow<'a> {
    /// Create a workflow using `settings` and running through `executor`.
    pub fn new(settings: &'a Settings, executor: &'a mut dyn CommandExecutor) -> Self {
        Self {
            settings,
            executor,
            log: settings.resume_log(),
        }
    }

    /// The resume log this workflow writes.
    pub fn log(&self) -> &ResumeLog {
        &self.log
    }

    /// Merge the current branch into `target` and switch back.
    pub fn integrate(&mut self, target: &str, ui: &mut dyn UserInterface) -> Result<()> {
        let current = self.git().current_branch()?;

        if self.git().has_uncommitted_changes()? {
            return Err(GitDjError::UncommittedChanges {
                action: "integrate".to_string(),
                branch: current,
            });
        }
        if current == target {
            return Err(GitDjError::SameBranch { branch: current });
        }

        let commands = sequences::integrate_commands(&current, target, &self.settings.remote);
        self.run(&commands, ui)?;

        ui.success(&format!("Successfully integrated {}", current));
        Ok(())
    }

    /// Merge the current branch into the release branch and switch back.
    pub fn release(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let settings = self.settings;
        let current = self.git().current_branch()?;
        let release = settings.release_branch.as_str();

        if self.git().has_uncommitted_changes()? {
            return Err(GitDjError::UncommittedChanges {
                action: "release".to_string(),
                branch: current,
            });
        }
        if self.is_shared_branch(&current) {
            return Err(GitDjError::ProtectedBranch {
                branch: current,
                target: release.to_string(),
            });
        }

        let commands = sequences::release_commands(&current, release, &settings.remote);
        self.run(&commands, ui)?;

        ui.success(&format!("Successfully released {}", current));
        Ok(())
    }

    /// Pull the current branch from the remote with rebase.
    pub fn get(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let current = self.git().current_branch()?;
        let commands = sequences::get_commands(&current, &self.settings.remote);
        self.run(&commands, ui)
    }

    /// Pull with rebase, then push the current branch.
    pub fn put(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let current = self.git().current_branch()?;
        let commands = sequences::put_commands(&current, &self.settings.remote);
        self.run(&commands, ui)
    }

    /// Push the current branch and open its compare page.
    pub fn pull_request(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let settings = self.settings;
        let current = self.git().current_branch()?;
        let remote = settings.remote.as_str();
        let repo_url = self.git().remote_url(remote)?;

        let commands = sequences::pull_request_commands(&current, &repo_url, remote);
        self.run(&commands, ui)
    }

    /// Re-run whatever the last failed sequence left pending.
    pub fn resume(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let pending = self.log.load()?;
        tracing::info!("Resuming {} pending command(s)", pending.len());
        self.run(&pending, ui)?;

        ui.success("Finished pending commands");
        Ok(())
    }

    fn is_shared_branch(&self, branch: &str) -> bool {
        [
            &self.settings.release_branch,
            &self.settings.integration_branch,
            &self.settings.integration2_branch,
        ]
        .iter()
        .any(|shared| shared.as_str() == branch)
    }

    fn git(&mut self) -> GitRepo<'_> {
        GitRepo::new(&mut *self.executor)
    }

    fn run(&mut self, commands: &[String], ui: &mut dyn UserInterface) -> Result<()> {
        SequenceRunner::new(&mut *self.executor, &self.log).run(commands, ui)
    }
}
