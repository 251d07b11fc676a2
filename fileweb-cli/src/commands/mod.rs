//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `login`: Check credentials and configuration
//! - `list`: List a directory below the root
//! - `download`: Download a single file
//! - `archive`: Download a selection as one ZIP archive
//! - `completions`: Generate shell completion scripts

pub mod archive;
pub mod completions;
pub mod download;
pub mod list;
pub mod login;

pub use archive::ArchiveCommand;
pub use completions::CompletionsCommand;
pub use download::DownloadCommand;
pub use list::ListCommand;
pub use login::LoginCommand;
