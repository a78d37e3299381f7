//! Terminal UI.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use std::io::{IsTerminal, Write};

use crate::error::{GitDjError, Result};

use super::{should_use_colors, OutputMode, Theme, UserInterface};

/// Terminal UI implementation.
///
/// Status output goes to stdout; errors and prompts go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }

    /// Whether prompts can be answered: stderr and stdin are both terminals.
    fn is_interactive(&self) -> bool {
        self.err.is_term() && std::io::stdin().is_terminal()
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_commands() {
            writeln!(self.out, "{}", self.theme.format_command(command)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        if !self.is_interactive() {
            tracing::debug!("Not a terminal, answering '{}' with {}", question, default);
            return Ok(default);
        }

        Confirm::with_theme(&prompt_theme())
            .with_prompt(question)
            .default(default)
            .interact_on(&self.err)
            .map_err(|e| GitDjError::Io(e.into()))
    }
}
