//! Git DJ CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use git_dj::cli::{Cli, CommandDispatcher};
use git_dj::shell::ShellExecutor;
use git_dj::ui::{OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("git_dj=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("git_dj=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("gdj starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut ui = TerminalUI::new(output_mode);

    let mut executor = ShellExecutor::new();
    if let Some(repo) = &cli.repo {
        executor = executor.in_dir(repo);
    }

    let dispatcher = CommandDispatcher::new(cli.settings.resolve());

    match dispatcher.dispatch(&cli, &mut executor, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code.clamp(0, 255) as u8),
        Err(e) => {
            // Failed steps already told the user how to recover.
            if !e.is_reported() {
                ui.error(&e.to_string());
            }
            ExitCode::from(1)
        }
    }
}
