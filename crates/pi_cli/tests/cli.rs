//! End-to-end tests for the `mc-pi` binary.
//!
//! Each test runs the binary in its own temporary working directory so the
//! plots and any `mc-pi.toml` stay isolated.

use std::path::Path;
use std::process::{Command, Output};

fn mc_pi(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mc-pi"));
    cmd.current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("MC_PI_CONFIG")
        .env_remove("MC_PI_NUM_SAMPLES")
        .env_remove("MC_PI_SEED")
        .env_remove("MC_PI_OUTPUT_DIR")
        .env_remove("MC_PI_FORMAT")
        .env_remove("MC_PI_PLOT_POINTS")
        .env_remove("MC_PI_LOG_LEVEL");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to launch mc-pi")
}

#[test]
fn test_rejects_zero_samples() {
    let dir = tempfile::tempdir().unwrap();
    let output = mc_pi(dir.path(), &["0"], &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid argument"), "stderr: {}", stderr);
}

#[test]
fn test_rejects_non_integer_samples() {
    let dir = tempfile::tempdir().unwrap();

    for arg in ["abc", "1.5", "1e4", "2**10", "-3"] {
        let output = mc_pi(dir.path(), &[arg], &[]);
        assert!(!output.status.success(), "{} should be rejected", arg);
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_rejects_extra_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let output = mc_pi(dir.path(), &["10", "20"], &[]);

    assert!(!output.status.success());
}

#[test]
fn test_rejects_invalid_format_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = mc_pi(dir.path(), &["10"], &[("MC_PI_FORMAT", "gif")]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"), "stderr: {}", stderr);
}

#[test]
fn test_rejects_malformed_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("mc-pi.toml"), "num_samples = \"many\"\n").unwrap();

    let output = mc_pi(dir.path(), &["10"], &[]);

    assert!(!output.status.success());
}

#[test]
fn test_reports_estimate_and_writes_plots() {
    let dir = tempfile::tempdir().unwrap();
    let output = mc_pi(
        dir.path(),
        &["2000"],
        &[("MC_PI_SEED", "42"), ("MC_PI_FORMAT", "svg")],
    );

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("2000 drops"));

    let estimate_line = lines.next().unwrap();
    let estimate: f64 = estimate_line
        .strip_prefix("pi is estimated as:\t")
        .unwrap()
        .parse()
        .unwrap();
    assert!((0.0..=4.0).contains(&estimate));

    assert!(dir.path().join("2000_points.svg").exists());
    assert!(dir.path().join("Pi_estimate_for_2000_drops_thrown.svg").exists());
}

#[test]
fn test_png_format_writes_both_plots() {
    let dir = tempfile::tempdir().unwrap();
    let output = mc_pi(
        dir.path(),
        &["100"],
        &[("MC_PI_SEED", "3"), ("MC_PI_FORMAT", "png")],
    );

    assert!(output.status.success(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("100 drops\n"));

    for name in ["100_points.png", "Pi_estimate_for_100_drops_thrown.png"] {
        let len = std::fs::metadata(dir.path().join(name)).unwrap().len();
        assert!(len > 0, "{} is empty", name);
    }
}

#[test]
fn test_seeded_runs_print_identical_estimates() {
    let dir = tempfile::tempdir().unwrap();
    let envs = [
        ("MC_PI_SEED", "7"),
        ("MC_PI_FORMAT", "svg"),
        ("MC_PI_PLOT_POINTS", "false"),
    ];

    let first = mc_pi(dir.path(), &["500"], &envs);
    let second = mc_pi(dir.path(), &["500"], &envs);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(!dir.path().join("500_points.svg").exists());
}
