//! Circle-dart estimator.
//!
//! Darts land uniformly in the unit square; the fraction inside the quarter
//! circle `x² + y² ≤ 1` tends to π/4.

use crate::config::EstimatorConfig;
use crate::error::Result;
use crate::estimator::{Estimate, Method};
use crate::lcg::Draw;

/// Throws one dart. Draws `x` then `y`.
#[inline]
pub fn is_hit<D: Draw>(rng: &mut D) -> bool {
    let x = rng.draw(1.0);
    let y = rng.draw(1.0);
    x * x + y * y <= 1.0
}

/// `4 * hits / n`.
#[inline]
pub fn pi_from_hits(trials: u64, hits: u64) -> f64 {
    4.0 * hits as f64 / trials as f64
}

/// Estimates π from `n` darts with the default configuration.
///
/// # Errors
///
/// [`EstimateError::ZeroTrials`](crate::EstimateError::ZeroTrials) if `n` is zero.
///
/// # Examples
///
/// ```rust
/// let pi = pi_estimator::pi_montecarlo(100_000).unwrap();
/// assert!((pi - std::f64::consts::PI).abs() < 0.05);
/// ```
pub fn pi_montecarlo(n: u64) -> Result<f64> {
    estimate(n, &EstimatorConfig::default()).map(|estimate| estimate.value)
}

/// Estimates π from `n` darts under `config`.
pub fn estimate(n: u64, config: &EstimatorConfig) -> Result<Estimate> {
    Method::Circle.estimate(n, config)
}
