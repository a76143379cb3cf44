//! Error types for the simulation engine.

use std::error::Error;
use std::fmt;

/// Error returned by a [`SnapshotSink`](crate::SnapshotSink).
///
/// Sinks live outside this crate, so the failure is carried as a
/// human-readable reason rather than a concrete foreign type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    /// The sink failed to persist the snapshot.
    WriteFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed { reason } => write!(f, "snapshot write failed: {reason}"),
        }
    }
}

impl Error for SnapshotError {}

/// Errors that abort a simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// A snapshot sink failed; the run stops where it was.
    SnapshotFailed {
        /// Iteration at which the snapshot was attempted.
        iteration: u64,
        /// The underlying sink error.
        reason: SnapshotError,
    },
    /// An expansion pushed the grid past the configured extent ceiling.
    ExtentExceeded {
        /// Grid width after the offending expansion.
        width: usize,
        /// Grid height after the offending expansion.
        height: usize,
        /// The configured ceiling.
        limit: usize,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SnapshotFailed { iteration, reason } => {
                write!(f, "snapshot at iteration {iteration} failed: {reason}")
            }
            Self::ExtentExceeded {
                width,
                height,
                limit,
            } => {
                write!(f, "grid grew to {width}x{height}, past the extent ceiling {limit}")
            }
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SnapshotFailed { reason, .. } => Some(reason),
            Self::ExtentExceeded { .. } => None,
        }
    }
}
