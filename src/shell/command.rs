//! Shell command execution.

use crate::error::{GitDjError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::platform::{detect_shell, ShellInfo};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout and stderr (if false, both are inherited from the parent).
    pub capture: bool,
}

/// Runs shell command strings.
///
/// Sequence steps go through [`run`](CommandExecutor::run), which inherits the
/// terminal so merge editors, pagers and credential prompts work. Read-only
/// git queries go through [`capture`](CommandExecutor::capture).
pub trait CommandExecutor {
    /// Run a command with inherited standard streams.
    fn run(&mut self, command: &str) -> Result<CommandResult>;

    /// Run a command and collect its output.
    fn capture(&mut self, command: &str) -> Result<CommandResult>;
}

/// [`CommandExecutor`] backed by the user's shell.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: ShellInfo,
    cwd: Option<PathBuf>,
}

impl ShellExecutor {
    /// Executor using the detected shell and the current directory.
    pub fn new() -> Self {
        Self {
            shell: detect_shell(),
            cwd: None,
        }
    }

    /// Run commands in `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Use a specific shell.
    pub fn with_shell(mut self, shell: ShellInfo) -> Self {
        self.shell = shell;
        self
    }

    fn options(&self, capture: bool) -> CommandOptions {
        CommandOptions {
            cwd: self.cwd.clone(),
            capture,
        }
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for ShellExecutor {
    fn run(&mut self, command: &str) -> Result<CommandResult> {
        execute_with(&self.shell, command, &self.options(false))
    }

    fn capture(&mut self, command: &str) -> Result<CommandResult> {
        execute_with(&self.shell, command, &self.options(true))
    }
}

/// Execute a shell command with a specific shell.
pub fn execute_with(
    shell: &ShellInfo,
    command: &str,
    options: &CommandOptions,
) -> Result<CommandResult> {
    let mut cmd = Command::new(&shell.executable);
    cmd.arg(shell.name.command_flag());
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    if options.capture {
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    }

    tracing::debug!(
        "Executing via {}: {}",
        shell.executable.display(),
        command
    );

    let output = cmd.output().map_err(|e| {
        tracing::warn!("Failed to spawn `{}`: {}", command, e);
        GitDjError::CommandFailed {
            command: command.to_string(),
            code: None,
        }
    })?;

    let (stdout, stderr) = if options.capture {
        (
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    } else {
        (String::new(), String::new())
    };

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh() -> ShellInfo {
        ShellInfo::from_executable("/bin/sh")
    }

    fn captured() -> CommandOptions {
        CommandOptions {
            capture: true,
            ..Default::default()
        }
    }

    #[test]
    fn execute_successful_command() {
        let result = execute_with(&sh(), "echo hello", &captured()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute_with(&sh(), "exit 3", &captured()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn execute_captures_stderr() {
        let result = execute_with(&sh(), "echo oops >&2", &captured()).unwrap();
        assert!(result.stderr.contains("oops"));
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            capture: true,
        };

        let result = execute_with(&sh(), "pwd", &options).unwrap();

        assert!(result.success);
        let name = temp.path().file_name().unwrap().to_string_lossy();
        assert!(result.stdout.contains(name.as_ref()));
    }

    #[test]
    fn inherited_run_leaves_output_empty() {
        let result = execute_with(&sh(), "true", &CommandOptions::default()).unwrap();
        assert!(result.success);
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn missing_shell_is_command_failed() {
        let shell = ShellInfo::from_executable("/nonexistent/shell-for-gdj-tests");
        let err = execute_with(&shell, "true", &captured()).unwrap_err();
        assert!(matches!(err, GitDjError::CommandFailed { code: None, .. }));
    }

    #[test]
    fn shell_executor_runs_in_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "x").unwrap();

        let mut exec = ShellExecutor::new()
            .with_shell(sh())
            .in_dir(temp.path());

        let result = exec.capture("ls").unwrap();
        assert!(result.stdout.contains("marker.txt"));
    }

    #[test]
    fn shell_executor_run_reports_status() {
        let mut exec = ShellExecutor::new().with_shell(sh());
        assert!(exec.run("true").unwrap().success);
        assert!(!exec.run("false").unwrap().success);
    }
}
