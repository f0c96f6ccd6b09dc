//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WaypathTypesError {
    /// Number of weights does not match the number of points they are applied to.
    #[error("got {weights} weights for {points} points")]
    LengthMismatch {
        /// Number of points in the sequence.
        points: usize,
        /// Number of weights in the sequence.
        weights: usize,
    },

    /// Iterative algorithm ran out of its iteration budget before reaching the tolerance.
    #[error("no convergence after {iterations} iterations (last step {last_step})")]
    DidNotConverge {
        /// Number of iterations performed.
        iterations: usize,
        /// Distance the estimate moved during the last iteration.
        last_step: f64,
    },
}
