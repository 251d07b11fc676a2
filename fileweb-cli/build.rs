//! Build script for fileweb-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("fileweb")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse and download files below a configured root")
        .long_about(
            "Command-line tool for listing, downloading and bundling files below a \
             single password-gated root directory",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of ~/.fileweb/config.yaml")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("user")
                .long("user")
                .help("Username to log in with")
                .value_name("USER")
                .global(true)
                .env("FILEWEB_LOGIN_USER"),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .help("Password to log in with")
                .value_name("PASSWORD")
                .global(true)
                .env("FILEWEB_LOGIN_PASSWORD")
                .hide_env_values(true),
        )
        .subcommands(vec![
            Command::new("login")
                .about("Check credentials and configuration")
                .long_about("Log in with the given credentials and print the root directory"),
            Command::new("list")
                .about("List a directory below the root")
                .long_about("Display the entries of a directory in various formats"),
            Command::new("download")
                .about("Download a single file")
                .long_about("Copy one file below the root to a local file or standard output"),
            Command::new("archive")
                .about("Download files and directories as one ZIP archive")
                .long_about(
                    "Bundle the selected files and directories into an uncompressed ZIP archive",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main fileweb.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("fileweb.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
