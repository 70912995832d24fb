//! Tokio front-end for the π estimators.
//!
//! Same partitioning and seeding as [`pi_estimator`], with each partition
//! counted in a blocking task so async callers are never stalled.

pub mod error;
pub mod monte_carlo;

pub use error::{AsyncEstimateError, Result};
pub use monte_carlo::{buffon, estimate, pi_montecarlo};
