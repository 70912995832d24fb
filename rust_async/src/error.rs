use thiserror::Error;
use tokio::task::JoinError;

use pi_estimator::EstimateError;

pub type Result<T> = std::result::Result<T, AsyncEstimateError>;

/// Errors from the task-based estimators.
#[derive(Debug, Error)]
pub enum AsyncEstimateError {
    #[error(transparent)]
    Estimate(#[from] EstimateError),

    /// A blocking task panicked or was cancelled.
    #[error("task {task} failed: {source}")]
    Join {
        task: usize,
        #[source]
        source: JoinError,
    },
}
