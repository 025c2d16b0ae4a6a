//! CLI output integration tests.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn insurance_check() -> Command {
    let dir = std::env::temp_dir();
    let mut cmd = cargo_bin_cmd!("insurance-check");
    // Keep a stray insurance-check.toml in the checkout from leaking in.
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    insurance_check()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("insurance-check"))
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("interactive"))
        .stdout(predicate::str::contains("sweep"));
}

#[test]
fn test_version() {
    insurance_check()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("insurance-check"));
}

#[test]
fn test_missing_explicit_config_fails() {
    insurance_check()
        .args(["--color", "never", "--config", "/nonexistent/insurance-check.toml"])
        .arg("evaluate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_default_evaluation_draws_both_bars() {
    insurance_check()
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ist diese Versicherung sinnvoll?"))
        .stdout(predicate::str::contains("Mit Versicherung"))
        .stdout(predicate::str::contains("Ohne Versicherung"))
        .stdout(predicate::str::contains("29,980.00"))
        .stdout(predicate::str::contains("29,990.63"))
        .stdout(predicate::str::contains("Insurance is not worth it"));
}

#[test]
fn test_flags_override_inputs() {
    insurance_check()
        .args([
            "--color",
            "never",
            "evaluate",
            "--risk-aversion",
            "5",
            "--monthly-costs",
            "100",
            "--payout",
            "25000",
            "--probability",
            "0.001",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("29,900.00"))
        .stdout(predicate::str::contains("Insurance is worth it"));
}

#[test]
fn test_json_output_parses() {
    let output = insurance_check()
        .args(["--json", "evaluate"])
        .output()
        .expect("run insurance-check");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");
    assert_eq!(value["verdict"], "not_worthwhile");
    assert_eq!(value["chart"]["bars"][0]["label"], "Mit Versicherung");
    assert_eq!(value["chart"]["bars"][1]["label"], "Ohne Versicherung");

    let with = value["wealth_with_insurance"].as_f64().unwrap();
    let without = value["wealth_without_insurance"].as_f64().unwrap();
    assert!((with - 29_980.0).abs() < 1e-6);
    assert!((without - 29_990.629_392_243_685).abs() < 1e-6);
}

#[test]
fn test_ruin_exits_nonzero_with_diagnostic() {
    insurance_check()
        .args(["--color", "never", "evaluate", "--payout", "30000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wealth must be positive"));
}

#[test]
fn test_ruin_in_json_mode_is_a_json_error() {
    let output = insurance_check()
        .args(["--json", "evaluate", "--payout", "30000"])
        .output()
        .expect("run insurance-check");
    assert!(!output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stderr).expect("stderr is one JSON document");
    assert_eq!(value["type"], "error");
    assert!(value["payload"]["message"]
        .as_str()
        .unwrap()
        .contains("wealth must be positive"));
}

#[test]
fn test_invalid_probability_is_rejected() {
    insurance_check()
        .args(["--color", "never", "evaluate", "--probability", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("probability_per_month"));
}

#[test]
fn test_sweep_prints_table() {
    insurance_check()
        .args([
            "--color",
            "never",
            "sweep",
            "--field",
            "monthly-costs",
            "--from",
            "0",
            "--to",
            "40",
            "--steps",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sweep: Monthly costs"))
        .stdout(predicate::str::contains("Margin"))
        .stdout(predicate::str::contains("insurance is worth it"))
        .stdout(predicate::str::contains("insurance is not worth it"));
}

#[test]
fn test_sweep_rejects_single_step() {
    insurance_check()
        .args([
            "sweep", "--field", "payout", "--from", "0", "--to", "1", "--steps", "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("steps"));
}

#[test]
fn test_interactive_json_mode_is_rejected_with_guidance() {
    insurance_check()
        .args(["--json", "interactive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("evaluate --json"));
}

#[test]
fn test_config_init_then_evaluate() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("insurance-check.toml");

    insurance_check()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(path.exists());

    insurance_check()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    fs::write(&path, "[inputs]\nmonthly_costs = 0.0\nprobability_per_month = 0.0\n")
        .expect("write config");
    insurance_check()
        .args(["--color", "never", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Both options are equivalent"));
}

#[test]
fn test_config_validate_reports_parse_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[inputs]\npayout = \"lots\"\n").expect("write config");

    insurance_check()
        .args(["--color", "never", "--config"])
        .arg(&path)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn test_config_show_json_uses_defaults() {
    let output = insurance_check()
        .args(["--json", "config", "show"])
        .output()
        .expect("run insurance-check");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");
    assert_eq!(value["inputs"]["current_wealth"], 30_000.0);
    assert_eq!(value["inputs"]["probability_per_month"], 0.0005);
    assert_eq!(value["logging"]["format"], "pretty");
}

#[test]
fn test_quiet_prints_only_the_verdict() {
    insurance_check()
        .args(["--color", "never", "-q", "evaluate"])
        .assert()
        .success()
        .stdout("  ⚠ Insurance is not worth it\n");

    insurance_check()
        .args([
            "--color",
            "never",
            "-q",
            "evaluate",
            "--risk-aversion",
            "5",
            "--monthly-costs",
            "100",
            "--payout",
            "25000",
            "--probability",
            "0.001",
        ])
        .assert()
        .success()
        .stdout("  ✓ Insurance is worth it\n");

    insurance_check()
        .args([
            "--color",
            "never",
            "-q",
            "evaluate",
            "--monthly-costs",
            "0",
            "--probability",
            "0",
        ])
        .assert()
        .success()
        .stdout("  = Both options are equivalent\n");
}

fn evaluated_payout(config: &std::path::Path, extra: &[&str]) -> f64 {
    let output = insurance_check()
        .arg("--config")
        .arg(config)
        .args(["--json", "evaluate"])
        .args(extra)
        .output()
        .expect("run insurance-check");
    assert!(output.status.success(), "evaluate failed: {output:?}");

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");
    value["inputs"]["payout"].as_f64().expect("payout is a number")
}

#[test]
fn test_flag_overrides_config_value() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("insurance-check.toml");
    fs::write(&path, "[inputs]\npayout = 5000.0\n").expect("write config");

    assert_eq!(evaluated_payout(&path, &[]), 5_000.0);
    assert_eq!(evaluated_payout(&path, &["--payout", "25000"]), 25_000.0);
}

#[test]
fn test_flag_replaces_out_of_range_config_value() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("insurance-check.toml");
    fs::write(&path, "[inputs]\npayout = -1.0\n").expect("write config");

    assert_eq!(evaluated_payout(&path, &["--payout", "5000"]), 5_000.0);

    insurance_check()
        .args(["--color", "never", "--config"])
        .arg(&path)
        .arg("evaluate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("payout"));

    insurance_check()
        .args(["--color", "never", "--config"])
        .arg(&path)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("payout"));
}
