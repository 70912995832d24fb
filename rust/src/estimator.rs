//! Method dispatch and the estimate record.

use std::f64::consts::PI;
use std::fmt;
use std::ops::Range;

use tracing::debug;

use crate::buffon;
use crate::config::EstimatorConfig;
use crate::error::{EstimateError, Result};
use crate::lcg::{Lcg, SeedPolicy};
use crate::monte_carlo;
use crate::partition::fork_join;

/// Estimation method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Darts in the unit quarter circle.
    Circle,
    /// Buffon's needle.
    Buffon,
}

impl Method {
    /// Number of trials to execute for a request of `n`.
    ///
    /// # Errors
    ///
    /// - [`EstimateError::ZeroTrials`] if `n` is zero
    /// - [`EstimateError::TrialCountOverflow`] if the inclusive range overflows
    pub fn executed_trials(n: u64, config: &EstimatorConfig) -> Result<u64> {
        if n == 0 {
            return Err(EstimateError::ZeroTrials);
        }
        config.trial_range().executed(n)
    }

    /// Counts hits for one worker's partition with a freshly seeded generator.
    pub fn count_worker(self, worker: usize, trials: Range<u64>, seeds: &SeedPolicy) -> u64 {
        let mut rng = Lcg::for_worker(worker, seeds);
        let trial: fn(&mut Lcg) -> bool = match self {
            Self::Circle => monte_carlo::is_hit::<Lcg>,
            Self::Buffon => buffon::crosses::<Lcg>,
        };

        let mut hits = 0;
        for _ in trials {
            if trial(&mut rng) {
                hits += 1;
            }
        }
        hits
    }

    /// Converts the reduced hit count into an [`Estimate`].
    ///
    /// # Errors
    ///
    /// [`EstimateError::NoCrossings`] for [`Method::Buffon`] with zero hits.
    pub fn finish(self, trials: u64, executed: u64, hits: u64) -> Result<Estimate> {
        let value = match self {
            Self::Circle => monte_carlo::pi_from_hits(trials, hits),
            Self::Buffon => buffon::pi_from_crossings(trials, hits)?,
        };

        Ok(Estimate {
            method: self,
            trials,
            executed,
            hits,
            value,
        })
    }

    /// Runs the full fork-join estimate for `n` trials.
    pub fn estimate(self, n: u64, config: &EstimatorConfig) -> Result<Estimate> {
        let executed = Self::executed_trials(n, config)?;
        let seeds = *config.seed_policy();

        let hits = fork_join(executed, config, |worker, range| {
            self.count_worker(worker, range, &seeds)
        })?;

        let estimate = self.finish(n, executed, hits)?;
        debug!(
            method = %self,
            threads = config.threads(),
            executed,
            hits,
            value = estimate.value,
            "estimate finished"
        );
        Ok(estimate)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle => write!(f, "circle"),
            Self::Buffon => write!(f, "buffon"),
        }
    }
}

/// Outcome of one estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    pub method: Method,
    /// Requested trial count; the ratio's `n`.
    pub trials: u64,
    /// Trials actually executed.
    pub executed: u64,
    /// Darts inside the circle or needles crossing a line.
    pub hits: u64,
    /// Estimate of π.
    pub value: f64,
}

impl Estimate {
    /// `|value - π|`.
    #[inline]
    pub fn abs_error(&self) -> f64 {
        (self.value - PI).abs()
    }
}
