//! Digest-keyed grouping of file paths.
//!
//! # Overview
//!
//! [`GroupTable`] accumulates `digest -> paths` over one scan; it is
//! created empty, populated as files are digested, and consumed once at
//! the end. [`GroupTable::into_groups`] keeps only digests shared by two
//! or more paths, so unique files never surface in a report.
//!
//! # Example
//!
//! ```
//! use fsame::duplicates::GroupTable;
//! use std::path::PathBuf;
//!
//! let digest = [7u8; 20];
//! let mut table = GroupTable::new();
//! table.insert(digest, PathBuf::from("/a.txt"));
//! table.insert(digest, PathBuf::from("/b.txt"));
//! table.insert([9u8; 20], PathBuf::from("/unique.txt"));
//!
//! let groups = table.into_groups();
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].paths.len(), 2);
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use crate::scanner::{digest_to_hex, Digest};

/// Accumulates paths keyed by content digest over one scan.
///
/// Within a key, paths keep the order they were inserted in. Callers
/// insert each discovered path exactly once, so every path ends up in
/// exactly one group.
#[derive(Debug, Default)]
pub struct GroupTable {
    map: HashMap<Digest, Vec<PathBuf>>,
    entries: usize,
}

impl GroupTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` to the list for `digest`, creating the list when the
    /// digest is new.
    pub fn insert(&mut self, digest: Digest, path: PathBuf) {
        self.map.entry(digest).or_default().push(path);
        self.entries += 1;
    }

    /// Number of distinct digests recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Total number of paths recorded.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries
    }

    /// Consume the table, keeping only digests shared by 2+ paths.
    #[must_use]
    pub fn into_groups(self) -> Vec<DigestGroup> {
        self.map
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(digest, paths)| DigestGroup { digest, paths })
            .collect()
    }
}

/// Paths sharing one content digest.
///
/// Only groups with two or more members are ever produced; a unique file
/// has no group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestGroup {
    /// Shared SHA-1 digest of the members' content
    pub digest: Digest,
    /// Member paths, in discovery order
    pub paths: Vec<PathBuf>,
}

impl DigestGroup {
    /// Number of paths in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of redundant copies (total minus one original).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.paths.len().saturating_sub(1)
    }

    /// Digest as lowercase hexadecimal.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        digest_to_hex(&self.digest)
    }
}
