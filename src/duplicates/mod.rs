//! Digest grouping and scan orchestration.
//!
//! - [`groups`]: the digest-keyed accumulation table and reported groups
//! - [`finder`]: the walk/digest/group pipeline

pub mod finder;
pub mod groups;

// Re-export main types
pub use finder::{DuplicateFinder, FinderConfig, ScanSummary};
pub use groups::{DigestGroup, GroupTable};
