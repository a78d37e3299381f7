//! Platform-specific shell and browser detection.

use std::path::{Path, PathBuf};

/// Known shell types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// `sh` or anything else that takes `-c`.
    Posix,
    PowerShell,
    Cmd,
}

impl ShellType {
    /// Parse shell type from executable name.
    pub fn from_executable(exe: &str) -> Self {
        let name = Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "powershell" | "pwsh" => ShellType::PowerShell,
            "cmd" => ShellType::Cmd,
            _ => ShellType::Posix,
        }
    }

    /// The flag that makes this shell run a single command string.
    pub fn command_flag(self) -> &'static str {
        match self {
            ShellType::Cmd => "/C",
            ShellType::PowerShell => "-Command",
            ShellType::Posix => "-c",
        }
    }
}

/// The shell used to run sequence steps.
#[derive(Debug, Clone)]
pub struct ShellInfo {
    /// Shell executable path.
    pub executable: PathBuf,

    /// Shell kind, which decides the command flag.
    pub name: ShellType,
}

impl ShellInfo {
    /// Shell for a specific executable.
    pub fn from_executable(executable: impl Into<PathBuf>) -> Self {
        let executable = executable.into();
        let name = ShellType::from_executable(&executable.to_string_lossy());
        Self { executable, name }
    }
}

/// The platform command interpreter.
///
/// Always `/bin/sh` on Unix, whatever the login shell is, since commands are
/// quoted for POSIX `sh`. On Windows this is `%COMSPEC%`, falling back to
/// `cmd.exe`.
pub fn detect_shell() -> ShellInfo {
    let executable = if cfg!(target_os = "windows") {
        std::env::var("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cmd.exe"))
    } else {
        PathBuf::from("/bin/sh")
    };

    ShellInfo::from_executable(executable)
}

/// Command prefix that opens a URL in the default browser.
///
/// The URL is appended (already quoted) by the caller so the open step can
/// live in a resumable command sequence like any other step.
pub fn browser_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "start \"\""
    } else {
        "xdg-open"
    }
}
