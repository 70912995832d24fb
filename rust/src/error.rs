//! Error types for the estimators.
//!
//! Degenerate inputs fail fast instead of producing an infinite or NaN
//! estimate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EstimateError>;

/// Errors raised while configuring or running an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// The trial count was zero; every ratio would divide by zero.
    #[error("trial count must be positive")]
    ZeroTrials,

    /// No needle crossed a line, so the needle-drop ratio is undefined.
    #[error("no crossings observed in {trials} trials")]
    NoCrossings { trials: u64 },

    /// The inclusive trial range `0..=n` does not fit in a `u64`.
    #[error("trial count overflows the inclusive range")]
    TrialCountOverflow,

    /// Thread count outside the valid range.
    #[error("invalid thread count {0}: must be in range [1, 1024]")]
    InvalidThreadCount(usize),

    /// The OS could not start a worker thread.
    #[error("failed to spawn worker {worker}: {reason}")]
    ThreadSpawn { worker: usize, reason: String },

    /// A worker thread panicked before reporting its count.
    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}
