//! Human-readable duplicate report.
//!
//! Each group is written as a `same key:` line carrying the hex digest,
//! one member path per line in discovery order, then a blank separator:
//!
//! ```text
//! same key: aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d
//! /tmp/a.txt
//! /tmp/b.txt
//!
//! ```

use std::io::{self, Write};

use crate::duplicates::DigestGroup;

/// Writes duplicate groups in the text block format.
#[derive(Debug)]
pub struct TextReport<'a> {
    groups: &'a [DigestGroup],
}

impl<'a> TextReport<'a> {
    /// Create a report over the given groups.
    #[must_use]
    pub fn new(groups: &'a [DigestGroup]) -> Self {
        Self { groups }
    }

    /// Write the report to `out`. Groups of one member never occur here;
    /// the grouping layer has already suppressed them.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for group in self.groups {
            writeln!(out, "same key: {}", group.digest_hex())?;
            for path in &group.paths {
                writeln!(out, "{}", path.display())?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_text_report_format() {
        let groups = vec![DigestGroup {
            digest: [0xaa; 20],
            paths: vec![PathBuf::from("/tmp/a.txt"), PathBuf::from("/tmp/b.txt")],
        }];

        let mut buf = Vec::new();
        TextReport::new(&groups).write_to(&mut buf).unwrap();

        let expected = format!("same key: {}\n/tmp/a.txt\n/tmp/b.txt\n\n", "aa".repeat(20));
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_text_report_empty() {
        let mut buf = Vec::new();
        TextReport::new(&[]).write_to(&mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
