//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ArchiveCommand, CompletionsCommand, DownloadCommand, ListCommand, LoginCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable supplying `--user`.
pub const LOGIN_USER_ENV: &str = "FILEWEB_LOGIN_USER";
/// Environment variable supplying `--password`.
pub const LOGIN_PASSWORD_ENV: &str = "FILEWEB_LOGIN_PASSWORD";

/// Command-line tool for browsing a password-gated directory tree.
#[derive(Parser)]
#[command(name = "fileweb")]
#[command(version, about = "Browse and download files below a configured root", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read configuration from this file instead of ~/.fileweb/config.yaml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Username to log in with
    #[arg(long, value_name = "USER", global = true, env = LOGIN_USER_ENV)]
    pub user: Option<String>,

    /// Password to log in with
    #[arg(
        long,
        value_name = "PASSWORD",
        global = true,
        env = LOGIN_PASSWORD_ENV,
        hide_env_values = true
    )]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Check credentials and configuration
    Login(LoginCommand),

    /// List a directory below the root
    List(ListCommand),

    /// Download a single file
    Download(DownloadCommand),

    /// Download files and directories as one ZIP archive
    Archive(ArchiveCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
