//! Error types for git-dj operations.
//!
//! This module defines [`GitDjError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Precondition failures (`UncommittedChanges`, `SameBranch`, ...) are
//!   raised before any command runs and never touch the resume log
//! - `CommandFailed` halts a sequence; the runner has already told the user
//!   how to resume, so `main` only sets the exit code
//! - Use `anyhow::Error` (via `GitDjError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for git-dj operations.
#[derive(Debug, Error)]
pub enum GitDjError {
    /// A step of a command sequence exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// `continue` was invoked but there is nothing to resume.
    #[error("No pending commands to continue (no log at {path})")]
    NoResumeLog { path: PathBuf },

    /// The working tree has unstaged changes.
    #[error("Failed to {action} {branch}: you have uncommitted changes")]
    UncommittedChanges { action: String, branch: String },

    /// Source and destination branch are the same.
    #[error("Can not integrate {branch} into {branch}")]
    SameBranch { branch: String },

    /// The current branch may not be released.
    #[error("Can not integrate {branch} into {target}")]
    ProtectedBranch { branch: String, target: String },

    /// HEAD does not point at a branch.
    #[error("Not on a branch (detached HEAD or no commits yet)")]
    DetachedHead,

    /// The remote has no URL configured.
    #[error("Remote '{remote}' has no URL configured")]
    MissingRemote { remote: String },

    /// A read-only git query failed.
    #[error("`{command}` failed: {message}")]
    GitQuery { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GitDjError {
    /// Whether the user has already been told about this error.
    ///
    /// The runner prints its own failure notice before returning
    /// `CommandFailed`.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::CommandFailed { .. })
    }
}

/// Result type alias for git-dj operations.
pub type Result<T> = std::result::Result<T, GitDjError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = GitDjError::CommandFailed {
            command: "git push origin staging".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("git push origin staging"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn no_resume_log_displays_path() {
        let err = GitDjError::NoResumeLog {
            path: PathBuf::from("/tmp/gdj_activity"),
        };
        assert!(err.to_string().contains("/tmp/gdj_activity"));
    }

    #[test]
    fn uncommitted_changes_names_action_and_branch() {
        let err = GitDjError::UncommittedChanges {
            action: "integrate".into(),
            branch: "feature/login".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to integrate feature/login: you have uncommitted changes"
        );
    }

    #[test]
    fn same_branch_repeats_branch() {
        let err = GitDjError::SameBranch {
            branch: "staging".into(),
        };
        assert_eq!(err.to_string(), "Can not integrate staging into staging");
    }

    #[test]
    fn protected_branch_names_target() {
        let err = GitDjError::ProtectedBranch {
            branch: "staging".into(),
            target: "master".into(),
        };
        assert_eq!(err.to_string(), "Can not integrate staging into master");
    }

    #[test]
    fn git_query_displays_command_and_message() {
        let err = GitDjError::GitQuery {
            command: "git branch".into(),
            message: "not a git repository".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("git branch"));
        assert!(msg.contains("not a git repository"));
    }

    #[test]
    fn only_command_failed_is_reported() {
        let failed = GitDjError::CommandFailed {
            command: "false".into(),
            code: Some(1),
        };
        assert!(failed.is_reported());
        assert!(!GitDjError::DetachedHead.is_reported());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GitDjError = io_err.into();
        assert!(matches!(err, GitDjError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(GitDjError::DetachedHead)
        }
        assert!(returns_error().is_err());
    }
}
