//! fsame - duplicate content reporter
//!
//! Walks a directory tree, digests every regular file with streaming
//! SHA-1 and reports the groups of files whose content is identical.
//! Directories matching an exclusion pattern are pruned whole, symbolic
//! links are never followed or hashed, and a Ctrl+C mid-scan still
//! yields a report over whatever was digested so far.
//!
//! Digest equality stands in for content equality: two different
//! contents colliding on the same SHA-1 value would be reported as
//! duplicates. No secondary byte comparison is performed.

pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod scanner;
pub mod signal;

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use regex::Regex;

use cli::{Cli, OutputFormat};
use duplicates::{DuplicateFinder, FinderConfig};
use error::ExitCode;
use output::{JsonReport, TextReport};
use progress::ConsoleObserver;
use scanner::TraversalConfig;

/// Run a full scan from parsed CLI arguments and print the report.
///
/// Per-file and per-directory problems are warned about and skipped;
/// only startup failures (an invalid exclusion pattern, no usable
/// current directory) and report-writing failures surface as errors.
///
/// # Errors
///
/// Returns an error when an exclusion pattern does not compile, the
/// current directory cannot be determined, or the report cannot be
/// written.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let exclude = compile_patterns(&cli.exclude)?;
    let root = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine the current directory")?,
    };

    let handler = signal::install_handler()?;
    let observer = Arc::new(ConsoleObserver::new(cli.verbose > 0));

    let config = FinderConfig::default()
        .with_io_threads(cli.io_threads)
        .with_traversal(TraversalConfig::new(exclude))
        .with_shutdown_flag(handler.get_flag())
        .with_observer(observer);

    let finder = DuplicateFinder::new(config);
    let (groups, summary) = finder.find_duplicates(&root);

    if summary.interrupted {
        println!("Canceled!");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.output {
        OutputFormat::Text => TextReport::new(&groups)
            .write_to(&mut out)
            .context("cannot write report")?,
        OutputFormat::Json => {
            let json = JsonReport::new(&groups, &summary)
                .to_json_pretty()
                .context("cannot serialize report")?;
            writeln!(out, "{json}").context("cannot write report")?;
        }
    }

    log::debug!(
        "finished in {:?}: {} files, {} groups, {} failed",
        summary.scan_duration,
        summary.total_files,
        summary.duplicate_groups,
        summary.failed_files
    );

    Ok(ExitCode::Success)
}

/// Compile CLI exclusion patterns, rejecting the run on a bad regex.
fn compile_patterns(patterns: &[String]) -> anyhow::Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("invalid exclusion pattern '{p}'")))
        .collect()
}
