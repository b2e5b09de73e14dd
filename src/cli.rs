//! Command-line interface definitions.
//!
//! # Example
//!
//! ```bash
//! # Scan the current directory
//! fsame
//!
//! # Scan a specific directory, showing checking/omitted lines
//! fsame -v ~/Downloads
//!
//! # Extra exclusion patterns and JSON output
//! fsame --exclude '\.git' --exclude 'node_modules' --output json ~/src
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Reports groups of files with identical content.
///
/// fsame walks a directory tree, digests every regular file with SHA-1
/// and prints the groups of files whose content is byte-identical.
/// Files are only reported, never touched.
#[derive(Debug, Parser)]
#[command(name = "fsame")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to scan (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Prune directories whose full path matches this regex (repeatable)
    ///
    /// The pattern is searched anywhere in the path, not matched against
    /// the directory name alone.
    #[arg(
        short,
        long = "exclude",
        value_name = "REGEX",
        default_value = r"\.opera"
    )]
    pub exclude: Vec<String>,

    /// Increase verbosity (-v shows checking/omitted lines and debug logs)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress everything except errors and the final report
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Number of I/O threads for digesting
    ///
    /// Lower values reduce disk thrashing on HDDs; 1 scans sequentially.
    #[arg(long, value_name = "N", default_value = "4", env = "FSAME_IO_THREADS")]
    pub io_threads: usize,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Output format for the duplicate report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable `same key:` blocks
    Text,
    /// JSON for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
