//! Git workflows built from command sequences.

pub mod operations;
pub mod sequences;

pub use operations::Workflow;
pub use sequences::{
    compare_url, get_commands, integrate_commands, pull_request_commands, put_commands,
    release_commands,
};
