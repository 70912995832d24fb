//! Needle-drop estimator (Buffon's needle).
//!
//! A needle of length one lands with its centre at `x ∈ [0, 1)` between two
//! lines one unit apart, at angle `θ ∈ [0, π/2)`. It crosses a line when
//! its half-projection `cos(θ) / 2` reaches either side. The crossing
//! frequency tends to `2 / π`.

use std::f64::consts::PI;

use crate::config::EstimatorConfig;
use crate::error::{EstimateError, Result};
use crate::estimator::{Estimate, Method};
use crate::lcg::Draw;

/// Drops one needle. Draws `x` then the angle.
#[inline]
pub fn crosses<D: Draw>(rng: &mut D) -> bool {
    let x = rng.draw(1.0);
    let theta = rng.draw(1.0) * PI / 2.0;
    let half = theta.cos() / 2.0;
    x + half >= 1.0 || x - half <= 0.0
}

/// `2 * n / crossings`.
///
/// # Errors
///
/// [`EstimateError::NoCrossings`] when `crossings` is zero.
#[inline]
pub fn pi_from_crossings(trials: u64, crossings: u64) -> Result<f64> {
    if crossings == 0 {
        return Err(EstimateError::NoCrossings { trials });
    }
    Ok(2.0 * trials as f64 / crossings as f64)
}

/// Estimates π from `n` needle drops with the default configuration.
///
/// # Errors
///
/// - [`EstimateError::ZeroTrials`] if `n` is zero
/// - [`EstimateError::NoCrossings`] if no needle crossed a line
///
/// # Examples
///
/// ```rust
/// let pi = pi_estimator::buffon(100_000).unwrap();
/// assert!((pi - std::f64::consts::PI).abs() < 0.1);
/// ```
pub fn buffon(n: u64) -> Result<f64> {
    estimate(n, &EstimatorConfig::default()).map(|estimate| estimate.value)
}

/// Estimates π from `n` needle drops under `config`.
pub fn estimate(n: u64, config: &EstimatorConfig) -> Result<Estimate> {
    Method::Buffon.estimate(n, config)
}
