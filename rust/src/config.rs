//! Estimator configuration.
//!
//! Use [`EstimatorConfig::builder`] to override the defaults:
//! one worker per rayon thread, the rayon backend, the inclusive trial
//! range and the `25234 + 17 * worker` seed policy.

use crate::error::{EstimateError, Result};
use crate::lcg::SeedPolicy;

/// Maximum number of partitions (and so worker threads) per estimate.
pub const MAX_THREADS: usize = 1024;

/// Which thread pool executes the partitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Rayon's global pool; partitions are fed through a parallel iterator.
    #[default]
    Rayon,
    /// One scoped OS thread per partition.
    Threads,
}

/// How many trials a request for `n` executes.
///
/// The denominator of every ratio is `n` regardless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrialRange {
    /// Trials `0..=n`, i.e. `n + 1` of them. Matches reference output.
    #[default]
    Inclusive,
    /// Trials `0..n`.
    Exclusive,
}

impl TrialRange {
    /// Number of trials executed for a request of `n`.
    ///
    /// # Errors
    ///
    /// [`EstimateError::TrialCountOverflow`] when `n + 1` overflows.
    pub fn executed(self, n: u64) -> Result<u64> {
        match self {
            Self::Inclusive => n.checked_add(1).ok_or(EstimateError::TrialCountOverflow),
            Self::Exclusive => Ok(n),
        }
    }
}

/// Immutable estimator configuration.
///
/// # Examples
///
/// ```rust
/// use pi_estimator::config::{Backend, EstimatorConfig, TrialRange};
///
/// let config = EstimatorConfig::builder()
///     .threads(4)
///     .backend(Backend::Threads)
///     .trial_range(TrialRange::Exclusive)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.threads(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EstimatorConfig {
    threads: usize,
    backend: Backend,
    trial_range: TrialRange,
    seed_policy: SeedPolicy,
}

impl EstimatorConfig {
    #[inline]
    pub fn builder() -> EstimatorConfigBuilder {
        EstimatorConfigBuilder::default()
    }

    /// Number of partitions, and so of independently seeded generators.
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }

    #[inline]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    #[inline]
    pub fn trial_range(&self) -> TrialRange {
        self.trial_range
    }

    #[inline]
    pub fn seed_policy(&self) -> &SeedPolicy {
        &self.seed_policy
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`EstimateError::InvalidThreadCount`] if `threads` is 0 or greater
    /// than [`MAX_THREADS`].
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 || self.threads > MAX_THREADS {
            return Err(EstimateError::InvalidThreadCount(self.threads));
        }
        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            threads: rayon::current_num_threads().clamp(1, MAX_THREADS),
            backend: Backend::default(),
            trial_range: TrialRange::default(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

/// Builder for [`EstimatorConfig`].
#[derive(Clone, Debug, Default)]
pub struct EstimatorConfigBuilder {
    threads: Option<usize>,
    backend: Backend,
    trial_range: TrialRange,
    seed_policy: Option<SeedPolicy>,
}

impl EstimatorConfigBuilder {
    /// Sets the number of partitions. Defaults to the rayon pool size.
    #[inline]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    #[inline]
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    #[inline]
    pub fn trial_range(mut self, trial_range: TrialRange) -> Self {
        self.trial_range = trial_range;
        self
    }

    #[inline]
    pub fn seed_policy(mut self, seed_policy: SeedPolicy) -> Self {
        self.seed_policy = Some(seed_policy);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// [`EstimateError::InvalidThreadCount`] if `threads` is outside
    /// `[1, MAX_THREADS]`.
    pub fn build(self) -> Result<EstimatorConfig> {
        let defaults = EstimatorConfig::default();
        let config = EstimatorConfig {
            threads: self.threads.unwrap_or(defaults.threads),
            backend: self.backend,
            trial_range: self.trial_range,
            seed_policy: self.seed_policy.unwrap_or(defaults.seed_policy),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = EstimatorConfig::builder().build().unwrap();

        assert_eq!(
            config.threads(),
            rayon::current_num_threads().clamp(1, MAX_THREADS)
        );
        assert_eq!(config.backend(), Backend::Rayon);
        assert_eq!(config.trial_range(), TrialRange::Inclusive);
        assert_eq!(*config.seed_policy(), SeedPolicy::new(25_234, 17));
    }

    #[test]
    fn test_builder_overrides() {
        let config = EstimatorConfig::builder()
            .threads(3)
            .backend(Backend::Threads)
            .trial_range(TrialRange::Exclusive)
            .seed_policy(SeedPolicy::new(1, 2))
            .build()
            .unwrap();

        assert_eq!(config.threads(), 3);
        assert_eq!(config.backend(), Backend::Threads);
        assert_eq!(config.trial_range(), TrialRange::Exclusive);
        assert_eq!(config.seed_policy().stride, 2);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let result = EstimatorConfig::builder().threads(0).build();
        assert_eq!(result, Err(EstimateError::InvalidThreadCount(0)));
    }

    #[test]
    fn test_thread_count_capped() {
        let at_cap = EstimatorConfig::builder().threads(MAX_THREADS).build();
        assert!(at_cap.is_ok());

        let over = EstimatorConfig::builder().threads(MAX_THREADS + 1).build();
        assert_eq!(over, Err(EstimateError::InvalidThreadCount(MAX_THREADS + 1)));

        let huge = EstimatorConfig::builder().threads(usize::MAX).build();
        assert_eq!(huge, Err(EstimateError::InvalidThreadCount(usize::MAX)));
    }

    #[test]
    fn test_trial_range_executed() {
        assert_eq!(TrialRange::Inclusive.executed(10), Ok(11));
        assert_eq!(TrialRange::Exclusive.executed(10), Ok(10));
        assert_eq!(
            TrialRange::Inclusive.executed(u64::MAX),
            Err(EstimateError::TrialCountOverflow)
        );
    }
}
