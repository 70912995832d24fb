//! Fork-join scaffolding shared by the estimators.
//!
//! The trial range is split into one contiguous chunk per worker, each chunk
//! is counted independently, and the partial counts are summed once after
//! every worker has finished. Chunk `w` is always seeded for worker `w`, so
//! the result depends only on the configured thread count and never on
//! which OS thread picked the chunk up.

use std::ops::Range;
use std::thread;

use rayon::prelude::*;
use tracing::debug;

use crate::config::{Backend, EstimatorConfig};
use crate::error::{EstimateError, Result};

/// Splits `0..total` into `workers` contiguous, non-overlapping ranges.
///
/// The first `total % workers` ranges hold one extra trial. Ranges may be
/// empty when there are more workers than trials. Returns no ranges for
/// zero workers.
///
/// # Examples
///
/// ```rust
/// use pi_estimator::partition::partition;
///
/// assert_eq!(partition(10, 3), vec![0..4, 4..7, 7..10]);
/// ```
pub fn partition(total: u64, workers: usize) -> Vec<Range<u64>> {
    if workers == 0 {
        return Vec::new();
    }

    let workers = workers as u64;
    let per_worker = total / workers;
    let remainder = total % workers;

    let mut start = 0;
    (0..workers)
        .map(|worker| {
            let len = per_worker + u64::from(worker < remainder);
            let range = start..start + len;
            start += len;
            range
        })
        .collect()
}

/// Runs `kernel(worker, range)` for every partition of `0..total` and sums
/// the returned counts.
///
/// The kernel owns whatever per-worker state it needs; nothing is shared
/// between partitions apart from the final sum.
///
/// # Errors
///
/// - [`EstimateError::InvalidThreadCount`] if the thread count is outside
///   `[1, MAX_THREADS]`
/// - [`EstimateError::ThreadSpawn`] if the OS refuses a worker thread under
///   [`Backend::Threads`]
/// - [`EstimateError::WorkerPanicked`] if a worker thread panics under
///   [`Backend::Threads`] (rayon re-raises worker panics on the caller)
pub fn fork_join<F>(total: u64, config: &EstimatorConfig, kernel: F) -> Result<u64>
where
    F: Fn(usize, Range<u64>) -> u64 + Sync,
{
    config.validate()?;
    let ranges = partition(total, config.threads());

    let count_one = |worker: usize, range: Range<u64>| {
        let trials = range.end - range.start;
        let count = kernel(worker, range);
        debug!(worker, trials, count, "partition finished");
        count
    };

    match config.backend() {
        Backend::Rayon => Ok(ranges
            .into_par_iter()
            .enumerate()
            .map(|(worker, range)| count_one(worker, range))
            .sum::<u64>()),
        Backend::Threads => join_threads(ranges, &count_one),
    }
}

fn join_threads<F>(ranges: Vec<Range<u64>>, kernel: &F) -> Result<u64>
where
    F: Fn(usize, Range<u64>) -> u64 + Sync,
{
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(ranges.len());
        let mut spawn_error = None;
        for (worker, range) in ranges.into_iter().enumerate() {
            let spawned = thread::Builder::new()
                .name(format!("pi-worker-{worker}"))
                .spawn_scoped(scope, move || kernel(worker, range));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    spawn_error = Some(EstimateError::ThreadSpawn {
                        worker,
                        reason: err.to_string(),
                    });
                    break;
                }
            }
        }

        // Join everything before reporting so no panicked thread is left
        // for the scope to re-raise.
        let joined: Vec<_> = handles.into_iter().map(|handle| handle.join()).collect();
        if let Some(err) = spawn_error {
            return Err(err);
        }

        let mut total = 0;
        for (worker, result) in joined.into_iter().enumerate() {
            total += result.map_err(|_| EstimateError::WorkerPanicked { worker })?;
        }
        Ok(total)
    })
}
