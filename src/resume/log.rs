//! File-backed queue of pending commands.
//!
//! The record is plain text, one command per line, and is absent whenever
//! nothing is pending. There is no escaping: a command containing a newline
//! would be split into two on reload.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{GitDjError, Result};

/// File name of the default log inside the system temp directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "gdj_activity";

/// Persisted list of commands still to run from the last sequence.
///
/// # Example
///
/// ```
/// use git_dj::resume::ResumeLog;
///
/// let dir = tempfile::tempdir().unwrap();
/// let log = ResumeLog::new(dir.path().join("activity"));
///
/// log.save(&["git push origin staging".to_string()]).unwrap();
/// assert_eq!(log.load().unwrap(), vec!["git push origin staging"]);
///
/// log.save(&[]).unwrap();
/// assert!(!log.exists());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeLog {
    path: PathBuf,
}

impl ResumeLog {
    /// Log stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the record.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a record is present.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the record. Missing records are fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Cleared resume log {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the record with `remaining`, or clear it if empty.
    ///
    /// Writes a sibling temp file and renames it over the record so a crash
    /// never leaves a truncated queue behind.
    pub fn save(&self, remaining: &[String]) -> Result<()> {
        if remaining.is_empty() {
            return self.clear();
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, remaining.join("\n"))?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            "Saved {} pending command(s) to {}",
            remaining.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Read the pending commands back.
    ///
    /// Trailing whitespace is trimmed and blank lines are dropped. A missing
    /// or empty record is [`GitDjError::NoResumeLog`].
    pub fn load(&self) -> Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(self.missing());
            }
            Err(e) => return Err(e.into()),
        };

        let commands = parse_record(&content);
        if commands.is_empty() {
            return Err(self.missing());
        }
        Ok(commands)
    }

    fn missing(&self) -> GitDjError {
        GitDjError::NoResumeLog {
            path: self.path.clone(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for ResumeLog {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME))
    }
}

fn parse_record(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
