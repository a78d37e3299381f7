//! Pending command implementation.
//!
//! The `gdj pending` command shows what `gdj continue` would run.

use serde::Serialize;
use std::path::PathBuf;

use crate::cli::args::PendingArgs;
use crate::error::{GitDjError, Result};
use crate::resume::ResumeLog;
use crate::ui::theme::Theme;
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// JSON shape of `gdj pending --json`.
#[derive(Debug, Serialize)]
struct PendingReport {
    log: PathBuf,
    commands: Vec<String>,
}

/// The pending command implementation.
pub struct PendingCommand {
    log: ResumeLog,
    args: PendingArgs,
}

impl PendingCommand {
    /// Create a new pending command.
    pub fn new(log: ResumeLog, args: PendingArgs) -> Self {
        Self { log, args }
    }

    fn pending(&self) -> Result<Vec<String>> {
        match self.log.load() {
            Ok(commands) => Ok(commands),
            Err(GitDjError::NoResumeLog { .. }) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
}

impl Command for PendingCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let commands = self.pending()?;

        if self.args.json {
            let report = PendingReport {
                log: self.log.path().to_path_buf(),
                commands,
            };
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| GitDjError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if commands.is_empty() {
            ui.message("No pending commands.");
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        ui.message(&format!(
            "{} {}",
            theme.key.apply_to("Pending commands"),
            theme.dim.apply_to(format!("({})", self.log.path().display())),
        ));
        for (i, command) in commands.iter().enumerate() {
            ui.message(&format!(
                "  {} {}",
                theme.dim.apply_to(format!("{}.", i + 1)),
                theme.command.apply_to(command)
            ));
        }
        ui.show_hint("Run `gdj continue` to resume or `gdj abort` to discard them.");

        Ok(CommandResult::success())
    }
}
