//! Login command implementation.
//!
//! Verifies the credentials and that the root is usable, then prints the
//! canonical root directory.

use crate::error::CliError;
use crate::utils::{login, GlobalOptions};
use clap::Args;

/// Check credentials and configuration.
#[derive(Args)]
pub struct LoginCommand {}

impl LoginCommand {
    /// Execute the login command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (browser, _session) = login(global)?;
        let resolver = browser.settings().resolver()?;

        if !global.quiet {
            eprintln!("Logged in as {}", browser.settings().credentials.username());
        }
        println!("{}", resolver.root().display());

        Ok(())
    }
}
