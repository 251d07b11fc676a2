//! Download command implementation.
//!
//! Streams one file below the root to a local file or standard output.

use crate::error::CliError;
use crate::utils::{format_size, login, GlobalOptions, OutputTarget};
use clap::Args;
use std::path::PathBuf;

/// Download a single file.
#[derive(Args)]
pub struct DownloadCommand {
    /// Root-relative path of the file
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Write to this file instead of the file's own name (`-` for stdout)
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,
}

impl DownloadCommand {
    /// Execute the download command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (browser, mut session) = login(global)?;

        let mut download = browser.download(&mut session, &self.path)?;
        let target = OutputTarget::from_arg(self.output.as_deref(), download.filename());

        let written = target.write_with(|out| Ok(download.copy_to(out)?))?;

        if !global.quiet && target != OutputTarget::Stdout {
            eprintln!(
                "Saved {} to {} ({})",
                download.relative_path(),
                target.describe(),
                format_size(written)
            );
        }

        Ok(())
    }
}
