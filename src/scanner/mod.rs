//! Scanner module for directory traversal and file digesting.
//!
//! The scanner is divided into submodules:
//! - [`walker`]: directory traversal with exclusion pruning
//! - [`hasher`]: streaming SHA-1 content digests
//!
//! # Example
//!
//! ```no_run
//! use fsame::scanner::{TraversalConfig, Walker};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."), TraversalConfig::default());
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(path) => println!("{}", path.display()),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::path::PathBuf;

use regex::Regex;

// Re-export main types
pub use hasher::{digest_to_hex, Digest, Hasher, CHUNK_SIZE};
pub use walker::Walker;

/// Configuration for directory traversal.
#[derive(Debug, Clone, Default)]
pub struct TraversalConfig {
    /// Patterns that prune whole subtrees. Each pattern is searched
    /// anywhere in a directory's full path string, not matched against
    /// the final component only, so a root whose own path matches
    /// prunes the entire walk.
    pub exclude: Vec<Regex>,
}

impl TraversalConfig {
    /// Create a configuration from a set of exclusion patterns.
    #[must_use]
    pub fn new(exclude: Vec<Regex>) -> Self {
        Self { exclude }
    }
}

/// Errors that can occur during directory traversal.
///
/// These are yielded inline by [`Walker::walk`]; the affected subtree
/// simply produces no further entries and the walk continues.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when reading a directory.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory could not be enumerated.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while digesting a single file.
///
/// A failed file is excluded from grouping; it never aborts the run.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The file vanished between discovery and hashing.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Cancellation was requested while the file was being read.
    #[error("digest interrupted")]
    Interrupted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_config_default() {
        let config = TraversalConfig::default();
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_traversal_config_new() {
        let config = TraversalConfig::new(vec![Regex::new(r"\.cache").unwrap()]);
        assert_eq!(config.exclude.len(), 1);
        assert!(config.exclude[0].is_match("/home/user/.cache/something"));
    }

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::PermissionDenied(PathBuf::from("/locked"));
        assert_eq!(err.to_string(), "permission denied: /locked");
    }

    #[test]
    fn test_hash_error_display() {
        let err = HashError::NotFound(PathBuf::from("/missing"));
        assert_eq!(err.to_string(), "file not found: /missing");

        let err = HashError::Interrupted;
        assert_eq!(err.to_string(), "digest interrupted");
    }
}
