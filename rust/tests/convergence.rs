//! Statistical and reproducibility checks against the public API.

use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use pi_estimator::{
    buffon, pi_montecarlo, Backend, EstimateError, EstimatorConfig, Method, TrialRange,
};

const TRIALS: u64 = 1_000_000;

fn config(threads: usize) -> EstimatorConfig {
    EstimatorConfig::builder().threads(threads).build().unwrap()
}

#[test]
fn test_default_entry_points_converge() {
    assert_abs_diff_eq!(pi_montecarlo(TRIALS).unwrap(), PI, epsilon = 0.01);
    assert_abs_diff_eq!(buffon(TRIALS).unwrap(), PI, epsilon = 0.05);
}

#[test]
fn test_expectation_independent_of_thread_count() {
    for threads in [1, 2, 4, 8] {
        let circle = Method::Circle.estimate(TRIALS, &config(threads)).unwrap();
        let needle = Method::Buffon.estimate(TRIALS, &config(threads)).unwrap();

        assert!(circle.abs_error() < 0.01, "{threads} threads: {circle:?}");
        assert!(needle.abs_error() < 0.05, "{threads} threads: {needle:?}");
    }
}

#[test]
fn test_reference_values_at_one_million() {
    let single = Method::Circle.estimate(TRIALS, &config(1)).unwrap();
    assert_eq!(single.hits, 785_184);
    assert_eq!(single.value, 3.140736);

    let eight = Method::Circle.estimate(TRIALS, &config(8)).unwrap();
    assert_eq!(eight.hits, 784_921);
}

#[test]
fn test_fixed_thread_count_is_reproducible() {
    for threads in [1, 3, 8] {
        let first = pi_estimator::monte_carlo::estimate(300_000, &config(threads)).unwrap();
        let second = pi_estimator::monte_carlo::estimate(300_000, &config(threads)).unwrap();
        assert_eq!(first.value.to_bits(), second.value.to_bits());
    }
}

#[test]
fn test_backends_produce_identical_counts() {
    for method in [Method::Circle, Method::Buffon] {
        let rayon = method.estimate(250_000, &config(5)).unwrap();
        let threads = method
            .estimate(
                250_000,
                &EstimatorConfig::builder()
                    .threads(5)
                    .backend(Backend::Threads)
                    .build()
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(rayon, threads);
    }
}

#[test]
fn test_inclusive_range_runs_one_extra_trial() {
    let exclusive = EstimatorConfig::builder()
        .threads(2)
        .trial_range(TrialRange::Exclusive)
        .build()
        .unwrap();

    let inclusive = Method::Buffon.estimate(10_000, &config(2)).unwrap();
    let exclusive = Method::Buffon.estimate(10_000, &exclusive).unwrap();

    assert_eq!(inclusive.executed, 10_001);
    assert_eq!(exclusive.executed, 10_000);
    assert_eq!(inclusive.trials, exclusive.trials);
}

#[test]
fn test_zero_trials_fail_fast() {
    assert_eq!(pi_montecarlo(0), Err(EstimateError::ZeroTrials));
    assert_eq!(buffon(0), Err(EstimateError::ZeroTrials));

    for threads in [1, 4] {
        for method in [Method::Circle, Method::Buffon] {
            assert_eq!(
                method.estimate(0, &config(threads)),
                Err(EstimateError::ZeroTrials)
            );
        }
    }
}

#[test]
fn test_more_threads_than_trials() {
    let estimate = Method::Circle.estimate(3, &config(16)).unwrap();
    assert_eq!(estimate.executed, 4);
    assert!(estimate.value.is_finite());
}
