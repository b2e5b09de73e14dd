//! JSON output for scripting.
//!
//! # Example
//!
//! ```no_run
//! use fsame::duplicates::DuplicateFinder;
//! use fsame::output::JsonReport;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let (groups, summary) = finder.find_duplicates(Path::new("."));
//!
//! let report = JsonReport::new(&groups, &summary);
//! println!("{}", report.to_json_pretty().unwrap());
//! ```

use serde::Serialize;

use crate::duplicates::{DigestGroup, ScanSummary};

/// Machine-readable scan report.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    groups: Vec<JsonGroup>,
    summary: JsonSummary,
}

/// One duplicate group in JSON form.
#[derive(Debug, Serialize)]
struct JsonGroup {
    digest: String,
    paths: Vec<String>,
}

/// Scan counters in JSON form.
#[derive(Debug, Serialize)]
struct JsonSummary {
    total_files: usize,
    hashed_files: usize,
    failed_files: usize,
    duplicate_groups: usize,
    duplicate_files: usize,
    interrupted: bool,
    scan_duration_ms: u128,
}

impl JsonReport {
    /// Build a report from scan results.
    #[must_use]
    pub fn new(groups: &[DigestGroup], summary: &ScanSummary) -> Self {
        Self {
            groups: groups
                .iter()
                .map(|g| JsonGroup {
                    digest: g.digest_hex(),
                    paths: g
                        .paths
                        .iter()
                        .map(|p| p.to_string_lossy().into_owned())
                        .collect(),
                })
                .collect(),
            summary: JsonSummary {
                total_files: summary.total_files,
                hashed_files: summary.hashed_files,
                failed_files: summary.failed_files,
                duplicate_groups: summary.duplicate_groups,
                duplicate_files: summary.duplicate_files,
                interrupted: summary.interrupted,
                scan_duration_ms: summary.scan_duration.as_millis(),
            },
        }
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error from `serde_json`.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_json_report_round_trip() {
        let groups = vec![DigestGroup {
            digest: [0x01; 20],
            paths: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        }];
        let summary = ScanSummary {
            total_files: 3,
            hashed_files: 3,
            duplicate_groups: 1,
            duplicate_files: 1,
            ..Default::default()
        };

        let json = JsonReport::new(&groups, &summary).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["groups"][0]["digest"], "01".repeat(20));
        assert_eq!(value["groups"][0]["paths"][0], "/a");
        assert_eq!(value["summary"]["total_files"], 3);
        assert_eq!(value["summary"]["interrupted"], false);
    }
}
