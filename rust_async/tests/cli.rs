//! Runs the `pi_estimator_async` binary end to end.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pi_estimator_async"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

#[test]
fn test_reports_estimate() {
    let output = run(&["buffon", "1000", "--tasks", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hits: 625"), "{stdout}");
    assert!(stdout.contains("Pi estimate: 3.200000"), "{stdout}");
}

#[test]
fn test_error_reported_once() {
    let output = run(&["circle", "0"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.matches("trial count must be positive").count(),
        1,
        "{stderr}"
    );
}
