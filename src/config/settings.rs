//! Resolved runtime settings.

use std::path::PathBuf;

use crate::resume::ResumeLog;

/// Default shared integration branch.
pub const DEFAULT_INTEGRATION_BRANCH: &str = "staging";
/// Default secondary integration branch.
pub const DEFAULT_INTEGRATION2_BRANCH: &str = "staging2";
/// Default release branch.
pub const DEFAULT_RELEASE_BRANCH: &str = "master";
/// Default remote.
pub const DEFAULT_REMOTE: &str = "origin";

/// Branch names, remote and resume log location for one invocation.
///
/// Built from CLI flags, which fall back to `GDJ_*` environment variables
/// and then to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Branch that `gdj integrate` merges into.
    pub integration_branch: String,
    /// Branch that `gdj integrate2` merges into.
    pub integration2_branch: String,
    /// Branch that `gdj release` merges into.
    pub release_branch: String,
    /// Remote to pull from and push to.
    pub remote: String,
    /// Resume log location.
    pub log_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            integration_branch: DEFAULT_INTEGRATION_BRANCH.to_string(),
            integration2_branch: DEFAULT_INTEGRATION2_BRANCH.to_string(),
            release_branch: DEFAULT_RELEASE_BRANCH.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            log_path: ResumeLog::default().path().to_path_buf(),
        }
    }
}

impl Settings {
    /// The resume log at [`log_path`](Self::log_path).
    pub fn resume_log(&self) -> ResumeLog {
        ResumeLog::new(&self.log_path)
    }
}
