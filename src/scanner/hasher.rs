//! Streaming SHA-1 file digests.
//!
//! # Overview
//!
//! This module provides the [`Hasher`] struct for computing the SHA-1
//! digest of a file's content by folding fixed-size chunks into a running
//! hash. Only one chunk buffer is held at a time, so peak memory stays
//! constant regardless of file size.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sha1::{Digest as _, Sha1};

use super::HashError;

/// Bytes read per chunk while digesting a file.
pub const CHUNK_SIZE: usize = 8192;

/// 160-bit SHA-1 digest of a file's content, the grouping key.
pub type Digest = [u8; 20];

/// Computes streaming content digests.
///
/// # Example
///
/// ```no_run
/// use fsame::scanner::{digest_to_hex, Hasher};
/// use std::path::Path;
///
/// let hasher = Hasher::new();
/// let digest = hasher.digest_file(Path::new("a.txt")).unwrap();
/// println!("{}", digest_to_hex(&digest));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hasher {
    /// Optional cancellation flag checked between chunks
    shutdown_flag: Option<Arc<AtomicBool>>,
}

impl Hasher {
    /// Create a new hasher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shutdown_flag: None,
        }
    }

    /// Set the cancellation flag. When the flag becomes `true`, an
    /// in-flight read is abandoned at the next chunk boundary and the
    /// file handle released.
    #[must_use]
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown_flag = Some(flag);
        self
    }

    /// Check if cancellation has been requested.
    fn is_shutdown_requested(&self) -> bool {
        self.shutdown_flag
            .as_ref()
            .is_some_and(|f| f.load(Ordering::SeqCst))
    }

    /// Digest a file by reading it to exhaustion in [`CHUNK_SIZE`] chunks.
    ///
    /// The chunking is invisible in the result: the digest equals that of
    /// the file's full content hashed in one pass. The handle is released
    /// on every exit path, including mid-read errors and cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the file cannot be opened or a read
    /// fails; the caller is expected to skip the file and continue.
    pub fn digest_file(&self, path: &Path) -> Result<Digest, HashError> {
        let mut file = File::open(path).map_err(|e| map_io_error(path, e))?;
        let mut sha = Sha1::new();
        let mut buf = [0u8; CHUNK_SIZE];

        loop {
            if self.is_shutdown_requested() {
                return Err(HashError::Interrupted);
            }
            match file.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => sha.update(&buf[..n]),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(map_io_error(path, e)),
            }
        }

        Ok(sha.finalize().into())
    }
}

/// Render a digest as lowercase hexadecimal.
#[must_use]
pub fn digest_to_hex(digest: &Digest) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Classify an I/O error for a given file.
fn map_io_error(path: &Path, error: std::io::Error) -> HashError {
    use std::io::ErrorKind;

    match error.kind() {
        ErrorKind::NotFound => HashError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => HashError::PermissionDenied(path.to_path_buf()),
        _ => HashError::Io {
            path: path.to_path_buf(),
            source: error,
        },
    }
}
