//! Tracker error types.
//!
//! Every failure ends the invocation: there is no retry and no partial
//! success. Errors are grouped by what the user has to do about them:
//!
//! | Category | Variants | Recovery |
//! |----------|----------|----------|
//! | **Usage** | `MissingArgument`, `InvalidStatus`, `UnknownCommand` | Fix the command line |
//! | **Lookup** | `NotFound` | Check the id with `list` |
//! | **Storage** | `CorruptStore`, `Io` | Repair or move the store file |

use std::path::PathBuf;

use thiserror::Error;

use crate::job::JobId;

/// Errors that can occur while running a tracker command.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackerError {
    // ── Usage errors ─────────────────────────────────────────────────
    /// A required positional argument was absent or blank.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// A status token outside the closed status set.
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// The first token is not a known command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ── Lookup errors ────────────────────────────────────────────────
    /// No entry carries the requested id.
    #[error("No job found with id: {0}")]
    NotFound(JobId),

    // ── Storage errors ───────────────────────────────────────────────
    /// The store file exists but does not hold a valid collection.
    #[error("Corrupt store {}: {reason}", path.display())]
    CorruptStore {
        /// Location of the store file.
        path: PathBuf,
        /// What failed to validate.
        reason: String,
    },

    /// The store file could not be read or written.
    #[error("Cannot access store {}: {source}", path.display())]
    Io {
        /// Location of the store file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl TrackerError {
    /// Process exit status to report for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Returns `true` if the usage text should be printed alongside the error.
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::InvalidStatus(_) | Self::UnknownCommand(_))
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CorruptStore {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors() {
        assert!(TrackerError::InvalidStatus("done".into()).shows_usage());
        assert!(TrackerError::UnknownCommand("frobnicate".into()).shows_usage());
        assert!(!TrackerError::MissingArgument("id").shows_usage());
        assert!(!TrackerError::NotFound("abc".into()).shows_usage());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TrackerError::MissingArgument("company").to_string(),
            "Missing required argument: company"
        );
        assert_eq!(
            TrackerError::InvalidStatus("hired".into()).to_string(),
            "Invalid status: hired"
        );
        assert_eq!(
            TrackerError::NotFound("1a2b3c4d".into()).to_string(),
            "No job found with id: 1a2b3c4d"
        );
    }

    #[test]
    fn test_corrupt_store_display() {
        let err = TrackerError::corrupt("/tmp/jobs.json", "expected an array");
        assert_eq!(
            err.to_string(),
            "Corrupt store /tmp/jobs.json: expected an array"
        );
        assert_eq!(err.exit_code(), 1);
    }
}
