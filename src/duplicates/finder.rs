//! Scan orchestration: traversal, digesting, grouping.
//!
//! # Overview
//!
//! [`DuplicateFinder`] runs the whole pipeline:
//! 1. **Walk** - collect regular-file paths, applying exclusion pruning
//! 2. **Digest** - hash file contents across a bounded worker pool
//! 3. **Group** - fold results into a [`GroupTable`] in discovery order
//!
//! Per-file and per-directory failures are recorded and reported through
//! the observer, never propagated: the pipeline always produces a report,
//! partial if the scan was cancelled midway.
//!
//! # Example
//!
//! ```no_run
//! use fsame::duplicates::{DuplicateFinder, FinderConfig};
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::new(FinderConfig::default());
//! let (groups, summary) = finder.find_duplicates(Path::new("/some/path"));
//!
//! println!(
//!     "{} groups among {} files",
//!     summary.duplicate_groups, summary.total_files
//! );
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::progress::ScanObserver;
use crate::scanner::{Digest, HashError, Hasher, ScanError, TraversalConfig, Walker};

use super::{DigestGroup, GroupTable};

/// Configuration for the duplicate finder.
#[derive(Clone)]
pub struct FinderConfig {
    /// Number of I/O threads for parallel digesting.
    /// Default is 4 to prevent disk thrashing; 1 gives a fully
    /// sequential scan.
    pub io_threads: usize,
    /// Traversal configuration (exclusion patterns).
    pub traversal: TraversalConfig,
    /// Optional cancellation flag shared with the walker and hasher.
    pub shutdown_flag: Option<Arc<AtomicBool>>,
    /// Optional notification sink.
    pub observer: Option<Arc<dyn ScanObserver>>,
}

impl std::fmt::Debug for FinderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinderConfig")
            .field("io_threads", &self.io_threads)
            .field("traversal", &self.traversal)
            .field("shutdown_flag", &self.shutdown_flag)
            .field("observer", &self.observer.as_ref().map(|_| "<observer>"))
            .finish()
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            io_threads: 4,
            traversal: TraversalConfig::default(),
            shutdown_flag: None,
            observer: None,
        }
    }
}

impl FinderConfig {
    /// Set the I/O thread count (clamped to at least 1).
    #[must_use]
    pub fn with_io_threads(mut self, threads: usize) -> Self {
        self.io_threads = threads.max(1);
        self
    }

    /// Set the traversal configuration.
    #[must_use]
    pub fn with_traversal(mut self, traversal: TraversalConfig) -> Self {
        self.traversal = traversal;
        self
    }

    /// Set the cancellation flag.
    #[must_use]
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown_flag = Some(flag);
        self
    }

    /// Set the notification sink.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ScanObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Check if cancellation has been requested.
    fn is_shutdown_requested(&self) -> bool {
        self.shutdown_flag
            .as_ref()
            .is_some_and(|f| f.load(Ordering::SeqCst))
    }
}

/// Summary statistics from a scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Regular files yielded by traversal
    pub total_files: usize,
    /// Files successfully digested
    pub hashed_files: usize,
    /// Files skipped because they could not be read
    pub failed_files: usize,
    /// Groups with 2+ members
    pub duplicate_groups: usize,
    /// Redundant copies across all groups (originals not counted)
    pub duplicate_files: usize,
    /// Wall-clock duration of the scan
    pub scan_duration: Duration,
    /// Whether the scan was cancelled before completing
    pub interrupted: bool,
    /// Traversal errors encountered and skipped
    pub walk_errors: Vec<ScanError>,
}

/// Runs the walk/digest/group pipeline.
pub struct DuplicateFinder {
    config: FinderConfig,
    hasher: Hasher,
}

impl DuplicateFinder {
    /// Create a finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        let mut hasher = Hasher::new();
        if let Some(flag) = &config.shutdown_flag {
            hasher = hasher.with_shutdown_flag(Arc::clone(flag));
        }
        Self { config, hasher }
    }

    /// Create a finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// Scan `root` and return every group of identically-digested files
    /// together with summary statistics.
    ///
    /// This never fails as a whole: unreadable directories and files are
    /// skipped (warned about, counted in the summary) and cancellation
    /// produces a partial result with `interrupted` set.
    pub fn find_duplicates(&self, root: &Path) -> (Vec<DigestGroup>, ScanSummary) {
        let start = Instant::now();
        let mut summary = ScanSummary::default();

        log::info!("scanning {}", root.display());

        let mut walker = Walker::new(root, self.config.traversal.clone());
        if let Some(flag) = &self.config.shutdown_flag {
            walker = walker.with_shutdown_flag(Arc::clone(flag));
        }
        if let Some(observer) = &self.config.observer {
            walker = walker.with_observer(Arc::clone(observer));
        }

        let mut paths = Vec::new();
        for entry in walker.walk() {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => {
                    log::warn!("{e}");
                    summary.walk_errors.push(e);
                }
            }
        }
        summary.total_files = paths.len();

        if self.config.is_shutdown_requested() {
            summary.interrupted = true;
        }

        let mut table = GroupTable::new();
        for (path, result) in self.digest_all(paths) {
            match result {
                Ok(digest) => {
                    summary.hashed_files += 1;
                    table.insert(digest, path);
                }
                Err(HashError::Interrupted) => {
                    summary.interrupted = true;
                }
                Err(e) => {
                    summary.failed_files += 1;
                    if let Some(observer) = &self.config.observer {
                        observer.on_file_error(&path, &e);
                    } else {
                        log::warn!("{e}");
                    }
                }
            }
        }

        let groups = table.into_groups();
        summary.duplicate_groups = groups.len();
        summary.duplicate_files = groups.iter().map(DigestGroup::duplicate_count).sum();
        summary.scan_duration = start.elapsed();

        log::info!(
            "scan done: {} files, {} duplicate groups, {} failed{}",
            summary.total_files,
            summary.duplicate_groups,
            summary.failed_files,
            if summary.interrupted {
                " (interrupted)"
            } else {
                ""
            }
        );

        (groups, summary)
    }

    /// Digest all paths across a pool of `io_threads` workers.
    ///
    /// The result vector keeps the input order, so folding it into the
    /// group table preserves discovery order within each group even
    /// though hashing itself is parallel.
    fn digest_all(&self, paths: Vec<PathBuf>) -> Vec<(PathBuf, Result<Digest, HashError>)> {
        if paths.is_empty() {
            return Vec::new();
        }

        let hasher = &self.hasher;
        let config = &self.config;
        let run = move || {
            paths
                .into_par_iter()
                .map(|path| {
                    if config.is_shutdown_requested() {
                        return (path, Err(HashError::Interrupted));
                    }
                    let result = hasher.digest_file(&path);
                    (path, result)
                })
                .collect()
        };

        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.io_threads)
            .build()
        {
            Ok(pool) => pool.install(run),
            Err(e) => {
                log::warn!("failed to build hashing pool, using global pool: {e}");
                run()
            }
        }
    }
}
