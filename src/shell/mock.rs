//! Scripted executor for testing.
//!
//! `ScriptedExecutor` implements [`CommandExecutor`] without spawning any
//! process. Every command succeeds unless it has been told otherwise, and
//! every call is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use git_dj::shell::{CommandExecutor, ScriptedExecutor};
//!
//! let mut exec = ScriptedExecutor::new();
//! exec.fail("git push origin staging", 1);
//! exec.set_output("git branch", "* feature\n  staging\n");
//!
//! assert!(exec.run("git checkout staging").unwrap().success);
//! assert!(!exec.run("git push origin staging").unwrap().success);
//! assert_eq!(exec.capture("git branch").unwrap().stdout, "* feature\n  staging\n");
//! assert_eq!(exec.runs(), &["git checkout staging", "git push origin staging"]);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::{GitDjError, Result};

use super::command::{CommandExecutor, CommandResult};

/// What a scripted command does when called.
#[derive(Debug, Clone)]
enum Script {
    Exit { code: i32, stdout: String },
    SpawnError,
}

/// Fake [`CommandExecutor`] driven by per-command scripts.
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    scripts: HashMap<String, Script>,
    queues: HashMap<String, VecDeque<Script>>,
    runs: Vec<String>,
    captures: Vec<String>,
}

impl ScriptedExecutor {
    /// Create an executor where every command succeeds with no output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` exit with `code` every time it runs.
    pub fn fail(&mut self, command: &str, code: i32) {
        self.scripts.insert(
            command.to_string(),
            Script::Exit {
                code,
                stdout: String::new(),
            },
        );
    }

    /// Make `command` fail only on its next call, then fall back to its script.
    pub fn fail_once(&mut self, command: &str, code: i32) {
        self.queues
            .entry(command.to_string())
            .or_default()
            .push_back(Script::Exit {
                code,
                stdout: String::new(),
            });
    }

    /// Make `command` fail as if its process could not be spawned.
    pub fn fail_to_spawn(&mut self, command: &str) {
        self.scripts
            .insert(command.to_string(), Script::SpawnError);
    }

    /// Make `command` succeed with the given stdout.
    pub fn set_output(&mut self, command: &str, stdout: &str) {
        self.scripts.insert(
            command.to_string(),
            Script::Exit {
                code: 0,
                stdout: stdout.to_string(),
            },
        );
    }

    /// Commands passed to `run`, in order.
    pub fn runs(&self) -> &[String] {
        &self.runs
    }

    /// Commands passed to `capture`, in order.
    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    fn respond(&mut self, command: &str) -> Result<CommandResult> {
        let script = self
            .queues
            .get_mut(command)
            .and_then(|q| q.pop_front())
            .or_else(|| self.scripts.get(command).cloned())
            .unwrap_or(Script::Exit {
                code: 0,
                stdout: String::new(),
            });

        match script {
            Script::Exit { code: 0, stdout } => {
                Ok(CommandResult::success(stdout, String::new()))
            }
            Script::Exit { code, stdout } => {
                Ok(CommandResult::failure(Some(code), stdout, String::new()))
            }
            Script::SpawnError => Err(GitDjError::CommandFailed {
                command: command.to_string(),
                code: None,
            }),
        }
    }
}

impl CommandExecutor for ScriptedExecutor {
    fn run(&mut self, command: &str) -> Result<CommandResult> {
        self.runs.push(command.to_string());
        self.respond(command)
    }

    fn capture(&mut self, command: &str) -> Result<CommandResult> {
        self.captures.push(command.to_string());
        self.respond(command)
    }
}
