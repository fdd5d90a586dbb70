//! scriptmeta CLI entry point.
//!
//! Handles command-line argument parsing, delegates to the CLI executor, and
//! renders failures through the user-friendly error path so end users see a
//! colored message with suggestions instead of a backtrace.

use anyhow::Result;
use clap::Parser;
use scriptmeta::cli::Cli;
use scriptmeta::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
