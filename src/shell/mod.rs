//! Shell command execution.

pub mod command;
pub mod mock;
pub mod platform;
pub mod quote;

pub use command::{execute_with, CommandExecutor, CommandOptions, CommandResult, ShellExecutor};
pub use mock::ScriptedExecutor;
pub use platform::{browser_opener, detect_shell, ShellInfo, ShellType};
pub use quote::quote;
