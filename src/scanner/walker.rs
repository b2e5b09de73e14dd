//! Directory walker with exclusion pruning.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree and yielding the paths of regular files. Directories whose full
//! path matches any exclusion pattern are pruned whole: nothing under them
//! is yielded and their subdirectories are never entered. Symbolic links
//! are skipped silently, whatever they point at.
//!
//! # Example
//!
//! ```no_run
//! use fsame::scanner::{TraversalConfig, Walker};
//! use regex::Regex;
//! use std::path::Path;
//!
//! let config = TraversalConfig::new(vec![Regex::new(r"\.opera").unwrap()]);
//! let walker = Walker::new(Path::new("/home/user"), config);
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(path) => println!("{}", path.display()),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::progress::ScanObserver;

use super::{ScanError, TraversalConfig};

/// Directory walker yielding regular-file paths.
///
/// Traversal order is whatever the underlying directory enumeration
/// provides; no sort is imposed and the order is not guaranteed stable
/// across platforms or filesystems.
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: TraversalConfig,
    /// Optional cancellation flag checked at entry boundaries
    shutdown_flag: Option<Arc<AtomicBool>>,
    /// Optional sink for checking/omitted notifications
    observer: Option<Arc<dyn ScanObserver>>,
}

impl Walker {
    /// Create a new walker for the given root.
    #[must_use]
    pub fn new(path: &Path, config: TraversalConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
            shutdown_flag: None,
            observer: None,
        }
    }

    /// Set the cancellation flag. When the flag becomes `true`, iteration
    /// stops at the next entry boundary.
    #[must_use]
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown_flag = Some(flag);
        self
    }

    /// Set the notification sink for `checking`/`omitted` events.
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

    /// Walk the tree, yielding the full path of every regular file in a
    /// non-excluded directory.
    ///
    /// Enumeration failures are yielded as [`ScanError`] values rather than
    /// stopping iteration; the affected subtree contributes no further
    /// entries. A root that cannot be read behaves the same way, so the
    /// caller sees a warning and an empty sequence instead of an abort.
    pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf, ScanError>> + '_ {
        let exclude = self.config.exclude.clone();
        let observer = self.observer.clone();

        WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(move |entry| {
                // Exclusion applies to directories and prunes the subtree.
                if !entry.file_type().is_dir() {
                    return true;
                }
                let path_str = entry.path().to_string_lossy();
                if exclude.iter().any(|re| re.is_match(&path_str)) {
                    if let Some(ref obs) = observer {
                        obs.on_omitted(entry.path());
                    }
                    return false;
                }
                true
            })
            .take_while(move |_| !self.is_shutdown_requested())
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    if file_type.is_dir() {
                        if let Some(ref obs) = self.observer {
                            obs.on_checking(entry.path());
                        }
                        return None;
                    }
                    // Symlinks are never yielded, broken or not, even when
                    // the target's content would have matched another file.
                    if file_type.is_symlink() {
                        log::trace!("skipping symlink: {}", entry.path().display());
                        return None;
                    }
                    if !file_type.is_file() {
                        log::trace!("skipping special file: {}", entry.path().display());
                        return None;
                    }
                    Some(Ok(entry.into_path()))
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map_or_else(|| self.root.clone(), Path::to_path_buf);
                    Some(Err(map_walk_error(path, e)))
                }
            })
    }
}

impl std::fmt::Debug for Walker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walker")
            .field("root", &self.root)
            .field("config", &self.config)
            .field("shutdown_flag", &self.shutdown_flag)
            .field("observer", &self.observer.as_ref().map(|_| "<observer>"))
            .finish()
    }
}

/// Convert a walkdir error into a [`ScanError`].
fn map_walk_error(path: PathBuf, error: walkdir::Error) -> ScanError {
    let is_permission = error
        .io_error()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::PermissionDenied);
    if is_permission {
        return ScanError::PermissionDenied(path);
    }
    let source = error
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop or walk error"));
    ScanError::Io { path, source }
}
