//! Visual theme and styling.

use console::Style;

/// Terminal styles for gdj output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
    /// Style for contextual hints (magenta dim).
    pub hint: Style,
    /// Style for key labels (bold).
    pub key: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            command: Style::new().dim().italic(),
            hint: Style::new().magenta().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            command: Style::new(),
            hint: Style::new(),
            key: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a command echo.
    pub fn format_command(&self, command: &str) -> String {
        format!(
            "{} {}",
            self.dim.apply_to("$"),
            self.command.apply_to(command)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = Theme::plain().format_success("Successfully integrated feature");
        assert_eq!(msg, "✓ Successfully integrated feature");
    }

    #[test]
    fn theme_formats_error() {
        let msg = Theme::plain().format_error("Command failed: git push.");
        assert_eq!(msg, "✗ Command failed: git push.");
    }

    #[test]
    fn theme_formats_command() {
        let msg = Theme::plain().format_command("git checkout staging");
        assert_eq!(msg, "$ git checkout staging");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = Theme::default();
        let new = Theme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
