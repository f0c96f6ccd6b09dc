//! Error types used by the crate.

use thiserror::Error;

/// Trajectory error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrajectoryError {
    /// Index does not point to an existing point (or, for insertion, to the end of the trajectory).
    #[error("index {index} is out of range for trajectory of {len} points")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of points in the trajectory.
        len: usize,
    },
    /// Range of points is reversed or reaches past the end of the trajectory.
    #[error("range {start}..{end} is invalid for trajectory of {len} points")]
    InvalidRange {
        /// Start of the range (inclusive).
        start: usize,
        /// End of the range (exclusive).
        end: usize,
        /// Number of points in the trajectory.
        len: usize,
    },
}
