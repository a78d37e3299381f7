//! Read-only git queries.
//!
//! These run through [`CommandExecutor::capture`] before a sequence starts,
//! so they never touch the resume log.

use crate::error::{GitDjError, Result};
use crate::shell::{quote, CommandExecutor};

/// Queries against the repository in the executor's working directory.
pub struct GitRepo<'a> {
    executor: &'a mut dyn CommandExecutor,
}

impl<'a> GitRepo<'a> {
    /// Wrap an executor.
    pub fn new(executor: &'a mut dyn CommandExecutor) -> Self {
        Self { executor }
    }

    /// Name of the checked-out branch.
    pub fn current_branch(&mut self) -> Result<String> {
        let output = self.query("git branch")?;
        parse_current_branch(&output).ok_or(GitDjError::DetachedHead)
    }

    /// Whether `git diff` reports unstaged changes.
    pub fn has_uncommitted_changes(&mut self) -> Result<bool> {
        let output = self.query("git diff")?;
        Ok(!output.trim().is_empty())
    }

    /// Browser URL of `remote`.
    pub fn remote_url(&mut self, remote: &str) -> Result<String> {
        let output = self.query(&format!("git ls-remote --get-url {}", quote(remote)))?;
        // git echoes the name back when the remote is not configured.
        if output.trim() == remote {
            return Err(GitDjError::MissingRemote {
                remote: remote.to_string(),
            });
        }
        normalize_remote_url(&output).ok_or_else(|| GitDjError::MissingRemote {
            remote: remote.to_string(),
        })
    }

    fn query(&mut self, command: &str) -> Result<String> {
        let result = self.executor.capture(command).map_err(|e| match e {
            GitDjError::CommandFailed { .. } => GitDjError::GitQuery {
                command: command.to_string(),
                message: "could not start git".to_string(),
            },
            other => other,
        })?;

        if !result.success {
            let message = result.stderr.trim();
            return Err(GitDjError::GitQuery {
                command: command.to_string(),
                message: if message.is_empty() {
                    format!("exit code {:?}", result.exit_code)
                } else {
                    message.to_string()
                },
            });
        }

        tracing::debug!("`{}` -> {:?}", command, result.stdout.trim());
        Ok(result.stdout)
    }
}

/// Pick the starred line out of `git branch` output.
///
/// Returns `None` for a detached HEAD or an empty listing.
pub fn parse_current_branch(output: &str) -> Option<String> {
    let line = output.lines().find(|line| line.starts_with('*'))?;
    let name = line.trim_start_matches('*').trim();
    if name.is_empty() || name.starts_with('(') {
        return None;
    }
    Some(name.to_string())
}

/// Turn a remote URL into something a browser can open.
///
/// Strips a trailing `.git` and rewrites `git@host:owner/repo` and
/// `ssh://git@host/owner/repo` to `https://host/owner/repo`.
pub fn normalize_remote_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }
    let url = url.strip_suffix('/').unwrap_or(url);
    let url = url.strip_suffix(".git").unwrap_or(url);

    if let Some(rest) = url.strip_prefix("ssh://") {
        let rest = rest.split_once('@').map(|(_, r)| r).unwrap_or(rest);
        let (host, path) = rest.split_once('/')?;
        // Drop an explicit port; the web UI does not use it.
        let host = host.split(':').next().unwrap_or(host);
        return Some(format!("https://{}/{}", host, path));
    }

    if !url.contains("://") {
        if let Some((user_host, path)) = url.split_once(':') {
            let host = user_host
                .split_once('@')
                .map(|(_, h)| h)
                .unwrap_or(user_host);
            return Some(format!("https://{}/{}", host, path));
        }
    }

    Some(url.to_string())
}
