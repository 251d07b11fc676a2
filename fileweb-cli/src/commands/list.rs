//! List command implementation.
//!
//! This module implements the `list` command, which displays one directory
//! below the root in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{format_size, login, GlobalOptions};
use clap::{Args, ValueEnum};
use fileweb::config::OutputFormat as ConfiguredFormat;
use fileweb::{DirEntry, Listing};
use serde::Serialize;
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 4] = ["type", "name", "size", "path"];

/// List a directory below the root.
#[derive(Args)]
pub struct ListCommand {
    /// Root-relative directory to list (the root itself when omitted)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Output format [default: configured output_format, else table]
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

/// Output format for list command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<ConfiguredFormat> for OutputFormat {
    fn from(format: ConfiguredFormat) -> Self {
        match format {
            ConfiguredFormat::Table => Self::Table,
            ConfiguredFormat::Json => Self::Json,
            ConfiguredFormat::Csv => Self::Csv,
            ConfiguredFormat::Tsv => Self::Tsv,
        }
    }
}

/// One CSV/TSV record.
#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'a str,
    size: Option<u64>,
    path: &'a str,
}

impl<'a> From<&'a DirEntry> for Row<'a> {
    fn from(entry: &'a DirEntry) -> Self {
        Row {
            kind: entry_kind(entry),
            name: entry.name(),
            size: entry.size(),
            path: entry.relative_path(),
        }
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Log in with the global credentials
        let (browser, mut session) = login(global)?;

        // 2. Read the directory
        let listing = browser.list(&mut session, self.path.as_deref().unwrap_or_default())?;

        // 3. Format and output to stdout
        let format = self
            .format
            .unwrap_or_else(|| browser.settings().output_format.into());

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match format {
            OutputFormat::Table => format_as_table(&listing, &mut handle)?,
            OutputFormat::Json => format_as_json(&listing, &mut handle)?,
            OutputFormat::Csv => format_as_delimited(&listing, b',', &mut handle)?,
            OutputFormat::Tsv => format_as_delimited(&listing, b'\t', &mut handle)?,
        }

        Ok(())
    }
}

fn entry_kind(entry: &DirEntry) -> &'static str {
    if entry.is_dir() {
        "dir"
    } else {
        "file"
    }
}

/// Format a listing as a human-readable table.
fn format_as_table(listing: &Listing, out: &mut dyn Write) -> Result<(), CliError> {
    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for entry in &listing.entries {
        let size = entry.size().map_or_else(|| "-".to_string(), format_size);
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            entry_kind(entry),
            entry.name(),
            size,
            entry.relative_path()
        )?;
    }

    Ok(())
}

/// Format a listing as JSON, including its navigation context.
fn format_as_json(listing: &Listing, out: &mut dyn Write) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, listing).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format a listing as delimited output (CSV or TSV).
fn format_as_delimited(listing: &Listing, delimiter: u8, out: &mut dyn Write) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for entry in &listing.entries {
        writer.serialize(Row::from(entry)).map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}
