//! Parallel Monte Carlo estimators of π.
//!
//! Two estimators share one engine: the trial range is partitioned across
//! workers, each worker draws from its own [`Lcg`] seeded from its index,
//! and the per-worker hit counts are summed once at the end.
//!
//! ```rust
//! use pi_estimator::{buffon, pi_montecarlo};
//!
//! let circle = pi_montecarlo(1_000_000).unwrap();
//! let needle = buffon(1_000_000).unwrap();
//! assert!((circle - std::f64::consts::PI).abs() < 0.01);
//! assert!((needle - std::f64::consts::PI).abs() < 0.05);
//! ```
//!
//! Results are reproducible for a fixed thread count; see
//! [`EstimatorConfig`] to pin it.

pub mod buffon;
pub mod config;
pub mod error;
pub mod estimator;
pub mod lcg;
pub mod monte_carlo;
pub mod partition;

#[cfg(test)]
mod test_support;

pub use buffon::buffon;
pub use config::{Backend, EstimatorConfig, EstimatorConfigBuilder, TrialRange, MAX_THREADS};
pub use error::{EstimateError, Result};
pub use estimator::{Estimate, Method};
pub use lcg::{Draw, Lcg, SeedPolicy};
pub use monte_carlo::pi_montecarlo;
