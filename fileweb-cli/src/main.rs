//! Main entry point for the fileweb CLI.
//!
//! This is the command-line interface for the fileweb file browser.
//! It provides commands for working with the configured root:
//! - `login`: Check credentials and configuration
//! - `list`: List a directory
//! - `download`: Download a single file
//! - `archive`: Download a selection as a ZIP archive

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    fileweb::init_logger(cli.verbose, cli.quiet).install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        user: cli.user,
        password: cli.password,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Login(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Download(cmd) => cmd.execute(&global),
        cli::Command::Archive(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
