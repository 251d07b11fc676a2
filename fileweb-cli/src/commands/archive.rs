//! Archive command implementation.
//!
//! Bundles any mix of files and directories below the root into one
//! uncompressed ZIP archive.

use crate::error::CliError;
use crate::utils::{format_size, login, GlobalOptions, OutputTarget};
use clap::Args;
use fileweb::{ArchiveRequest, Selection};
use std::io::Write;
use std::path::PathBuf;

/// Download files and directories as one ZIP archive.
#[derive(Args)]
pub struct ArchiveCommand {
    /// Root-relative paths to include; directories are included recursively
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Directory the selection was made from; names the archive
    #[arg(long, value_name = "DIR")]
    pub current_dir: Option<String>,

    /// Write to this file instead of the derived archive name (`-` for stdout)
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,
}

impl ArchiveCommand {
    /// Execute the archive command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (browser, mut session) = login(global)?;

        let mut request = ArchiveRequest::new(Selection::new(self.paths));
        if let Some(current_dir) = self.current_dir {
            request = request.with_current_dir(current_dir);
        }

        let archive = browser.download_archive(&mut session, &request)?;
        let target = OutputTarget::from_arg(self.output.as_deref(), &archive.file_name);

        let written = target.write_with(|out| {
            out.write_all(&archive.bytes)?;
            Ok(archive.bytes.len() as u64)
        })?;

        if !global.quiet {
            if !archive.summary.is_complete() {
                eprintln!(
                    "Warning: {} file(s) could not be read and were left out",
                    archive.summary.skipped
                );
            }
            if target != OutputTarget::Stdout {
                eprintln!(
                    "Saved {} file(s) to {} ({})",
                    archive.summary.written,
                    target.describe(),
                    format_size(written)
                );
            }
        }

        Ok(())
    }
}
