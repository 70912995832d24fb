//! Task-based fork-join over the shared estimators.
//!
//! Each partition runs in its own `spawn_blocking` task with a generator
//! seeded for that partition index, so results match the thread-based
//! engine bit for bit. The configured backend is ignored; tokio's blocking
//! pool does the scheduling.

use tokio::task;
use tracing::debug;

use pi_estimator::partition::partition;
use pi_estimator::{Estimate, EstimatorConfig, Method};

use crate::error::{AsyncEstimateError, Result};

/// Estimates π with `method` from `n` trials, one blocking task per partition.
///
/// # Errors
///
/// - [`AsyncEstimateError::Estimate`] for invalid input or zero crossings
/// - [`AsyncEstimateError::Join`] if a task panics
pub async fn estimate(method: Method, n: u64, config: &EstimatorConfig) -> Result<Estimate> {
    config.validate()?;
    let executed = Method::executed_trials(n, config)?;
    let seeds = *config.seed_policy();

    let mut handles = Vec::with_capacity(config.threads());
    for (task_id, range) in partition(executed, config.threads()).into_iter().enumerate() {
        handles.push(task::spawn_blocking(move || {
            method.count_worker(task_id, range, &seeds)
        }));
    }

    let mut hits = 0;
    for (task_id, handle) in handles.into_iter().enumerate() {
        let count = handle.await.map_err(|source| AsyncEstimateError::Join {
            task: task_id,
            source,
        })?;
        debug!(task = task_id, count, "task finished");
        hits += count;
    }

    Ok(method.finish(n, executed, hits)?)
}

/// Circle-dart estimate with the default configuration.
pub async fn pi_montecarlo(n: u64) -> Result<f64> {
    let estimate = estimate(Method::Circle, n, &EstimatorConfig::default()).await?;
    Ok(estimate.value)
}

/// Needle-drop estimate with the default configuration.
pub async fn buffon(n: u64) -> Result<f64> {
    let estimate = estimate(Method::Buffon, n, &EstimatorConfig::default()).await?;
    Ok(estimate.value)
}
