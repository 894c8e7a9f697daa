//! End-to-end CLI tests for the evaluar binary
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const VALID_INPUT: &str = "[8, 9, 10]\n[10, 10, 10]\n[1.1, 2.2, 3.3]\n";

/// Write a results file into a fresh temp dir and return both
fn write_input(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.txt");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    cmd.arg(dir.path().join("absent.txt"))
        .arg("--no-plots")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_worked_example_text_report() {
    let (_dir, path) = write_input(VALID_INPUT);
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    cmd.arg(&path)
        .arg("--no-plots")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mean success rate: 90.00%"))
        .stdout(predicate::str::contains("t-statistic=0, p-value=1"))
        .stdout(predicate::str::contains("no significant difference"));
}

#[test]
fn test_worked_example_chinese_locale() {
    let (_dir, path) = write_input(VALID_INPUT);
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    cmd.arg(&path)
        .arg("--no-plots")
        .arg("--locale")
        .arg("zh")
        .assert()
        .success()
        .stdout(predicate::str::contains("平均成功率: 90.00%"))
        .stdout(predicate::str::contains("没有足够证据表明存在显著差异"));
}

#[test]
fn test_json_format() {
    let (_dir, path) = write_input(VALID_INPUT);
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    let output = cmd
        .arg(&path)
        .arg("--no-plots")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["records"].as_array().unwrap().len(), 3);
    assert_eq!(json["ttest"]["p_value"], 1.0);
    assert_eq!(json["significant"], false);
}

#[test]
fn test_csv_format() {
    let (_dir, path) = write_input(VALID_INPUT);
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    cmd.arg(&path)
        .arg("--no-plots")
        .arg("--format")
        .arg("csv")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "experiment,successes,attempts,time_taken,success_rate",
        ))
        .stdout(predicate::str::contains("Exp1,8,10,1.1,0.8"));
}

#[test]
fn test_mismatched_lengths_fail() {
    let (_dir, path) = write_input("[8, 9]\n[10, 10, 10]\n[1.1, 2.2, 3.3]\n");
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    cmd.arg(&path)
        .arg("--no-plots")
        .assert()
        .failure()
        .stderr(predicate::str::contains("list lengths differ"));
}

#[test]
fn test_zero_attempts_fail() {
    let (_dir, path) = write_input("[8, 9]\n[10, 0]\n[1.1, 2.2]\n");
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    cmd.arg(&path)
        .arg("--no-plots")
        .assert()
        .failure()
        .stderr(predicate::str::contains("attempts is zero"));
}

#[test]
fn test_non_numeric_token_fails() {
    let (_dir, path) = write_input("[8, oops]\n[10, 10]\n[1.1, 2.2]\n");
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    cmd.arg(&path)
        .arg("--no-plots")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse"));
}

#[test]
fn test_invalid_null_mean_rejected() {
    let (_dir, path) = write_input(VALID_INPUT);
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    cmd.arg(&path)
        .arg("--no-plots")
        .arg("--null-mean=-0.5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for --null-mean"));
}

#[test]
fn test_benchmark_null_mean_drops_degenerate_note() {
    let (_dir, path) = write_input(VALID_INPUT);
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    cmd.arg(&path)
        .arg("--no-plots")
        .arg("--null-mean")
        .arg("0.95")
        .assert()
        .success()
        .stdout(predicate::str::contains("p-value"))
        .stdout(predicate::str::contains("note:").not());
}

#[test]
fn test_stats_extended_block() {
    let (_dir, path) = write_input(VALID_INPUT);
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    cmd.arg(&path)
        .arg("--no-plots")
        .arg("--stats-extended")
        .assert()
        .success()
        .stdout(predicate::str::contains("Median (P50):"));
}

#[test]
fn test_cleanup_removes_input() {
    let (_dir, path) = write_input(VALID_INPUT);
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    cmd.arg(&path)
        .arg("--no-plots")
        .arg("--cleanup")
        .assert()
        .success();
    assert!(!path.exists());
}

#[test]
fn test_failed_run_keeps_input() {
    let (_dir, path) = write_input("[8]\n[0]\n[1.1]\n");
    let mut cmd = Command::cargo_bin("evaluar").unwrap();
    cmd.arg(&path)
        .arg("--no-plots")
        .arg("--cleanup")
        .assert()
        .failure();
    assert!(path.exists());
}
