//! Process exit codes.

/// Exit codes for the fsame binary.
///
/// Cancellation is not a failure: an interrupted scan still prints its
/// partial report and exits with `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The scan completed (including after cancellation).
    Success = 0,
    /// Startup or report writing failed.
    GeneralError = 1,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
