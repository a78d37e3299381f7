//! Runtime configuration.
//!
//! There is no configuration file. Every setting comes from a CLI flag,
//! its `GDJ_*` environment variable, or a built-in default.
//!
//! | Setting | Flag | Environment | Default |
//! |---|---|---|---|
//! | integration branch | `--integration-branch` | `GDJ_INTEGRATION_BRANCH` | `staging` |
//! | second integration branch | `--integration2-branch` | `GDJ_INTEGRATION2_BRANCH` | `staging2` |
//! | release branch | `--release-branch` | `GDJ_RELEASE_BRANCH` | `master` |
//! | remote | `--remote` | `GDJ_REMOTE` | `origin` |
//! | resume log | `--log-file` | `GDJ_LOG_FILE` | `$TMPDIR/gdj_activity` |

pub mod settings;

pub use settings::{
    Settings, DEFAULT_INTEGRATION2_BRANCH, DEFAULT_INTEGRATION_BRANCH, DEFAULT_RELEASE_BRANCH,
    DEFAULT_REMOTE,
};
