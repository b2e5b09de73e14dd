//! Scan notifications.
//!
//! The walker and finder report progress through the [`ScanObserver`]
//! trait rather than printing directly. [`ConsoleObserver`] renders the
//! `checking:` / `omitted:` lines on stdout; tests substitute recording
//! implementations.

use std::path::Path;

use crate::scanner::HashError;

/// Receives traversal and digesting notifications during a scan.
pub trait ScanObserver: Send + Sync {
    /// A directory passed the exclusion patterns and is being enumerated.
    fn on_checking(&self, dir: &Path);

    /// A directory matched an exclusion pattern; its whole subtree is
    /// pruned.
    fn on_omitted(&self, dir: &Path);

    /// A file could not be opened or read; it is excluded from grouping
    /// and the scan continues.
    fn on_file_error(&self, _path: &Path, _error: &HashError) {}
}

/// Prints scan notifications to stdout, interleaved with the report.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleObserver {
    verbose: bool,
}

impl ConsoleObserver {
    /// Create a console observer. Directory notifications are only
    /// printed when `verbose` is set; file errors are always logged.
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ScanObserver for ConsoleObserver {
    fn on_checking(&self, dir: &Path) {
        if self.verbose {
            println!("checking: {}", dir.display());
        }
    }

    fn on_omitted(&self, dir: &Path) {
        if self.verbose {
            println!("omitted: {}", dir.display());
        }
    }

    fn on_file_error(&self, _path: &Path, error: &HashError) {
        log::warn!("{error}");
    }
}
