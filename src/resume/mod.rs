//! Resume state for interrupted command sequences.
//!
//! When a step fails, the commands that still have to run stay in a
//! [`ResumeLog`] so `gdj continue` can pick up where the sequence stopped.

pub mod log;

pub use log::{ResumeLog, DEFAULT_LOG_FILE_NAME};
