//! Abort command implementation.
//!
//! The `gdj abort` command drops whatever a failed sequence left behind so
//! that `gdj continue` has nothing to resume.

use crate::cli::args::AbortArgs;
use crate::error::Result;
use crate::resume::ResumeLog;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The abort command implementation.
pub struct AbortCommand {
    log: ResumeLog,
    args: AbortArgs,
}

impl AbortCommand {
    /// Create a new abort command.
    pub fn new(log: ResumeLog, args: AbortArgs) -> Self {
        Self { log, args }
    }
}

impl Command for AbortCommand {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.log.exists() {
            ui.message("No pending commands.");
            return Ok(CommandResult::success());
        }

        if !self.args.yes && !ui.confirm("Discard pending commands?", false)? {
            ui.message("Kept pending commands.");
            return Ok(CommandResult::failure(1));
        }

        self.log.clear()?;
        ui.success("Discarded pending commands");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn saved_log(temp: &TempDir) -> ResumeLog {
        let log = ResumeLog::new(temp.path().join("gdj_activity"));
        log.save(&["git push origin staging".to_string()]).unwrap();
        log
    }

    #[test]
    fn yes_discards_without_asking() {
        let temp = TempDir::new().unwrap();
        let log = saved_log(&temp);
        let mut ui = MockUI::new();

        let result = AbortCommand::new(log.clone(), AbortArgs { yes: true })
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(!log.exists());
        assert!(ui.confirmations().is_empty());
    }

    #[test]
    fn confirmed_abort_discards() {
        let temp = TempDir::new().unwrap();
        let log = saved_log(&temp);
        let mut ui = MockUI::new();
        ui.set_confirm_response(true);

        AbortCommand::new(log.clone(), AbortArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(!log.exists());
        assert!(ui.has_success("Discarded"));
    }

    #[test]
    fn declined_abort_keeps_log() {
        let temp = TempDir::new().unwrap();
        let log = saved_log(&temp);
        let mut ui = MockUI::new();

        let result = AbortCommand::new(log.clone(), AbortArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(!result.success);
        assert!(log.exists());
        assert_eq!(ui.confirmations(), &["Discard pending commands?"]);
    }

    #[test]
    fn nothing_to_abort() {
        let temp = TempDir::new().unwrap();
        let log = ResumeLog::new(temp.path().join("gdj_activity"));
        let mut ui = MockUI::new();

        let result = AbortCommand::new(log, AbortArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("No pending commands"));
    }
}
