//! fastfetch entry point
//!
//! Parses the command line, runs the pipeline and reports fatal errors with
//! a suggestion before exiting with status 1.

use anyhow::Result;
use clap::Parser;
use fastfetch::cli;
use fastfetch::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
