//! Binary-level tests: argument handling, exit status and the summary line.

mod common;

use assert_cmd::Command;
use common::{sample_record, write_jsonl, write_text};
use std::fs;
use tempfile::TempDir;

fn evifuncqa_csv() -> Command {
    let mut cmd = Command::cargo_bin("evifuncqa-csv").unwrap();
    cmd.env_remove("EVIFUNCQA_IN")
        .env_remove("EVIFUNCQA_OUT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_reports_rows_written() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_jsonl(
        temp_dir.path(),
        "evifuncqa.jsonl",
        &[sample_record("a"), sample_record("b")],
    );
    let output = temp_dir.path().join("evifuncqa.csv");

    let result = evifuncqa_csv()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert_eq!(
        stdout.trim_end(),
        format!("Wrote 2 rows to {}", output.display())
    );
    assert!(fs::read_to_string(&output).unwrap().starts_with("id,entry,split,"));
}

#[test]
fn test_paths_can_come_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_jsonl(temp_dir.path(), "in.jsonl", &[sample_record("a")]);
    let output = temp_dir.path().join("out.csv");

    evifuncqa_csv()
        .env("EVIFUNCQA_IN", &input)
        .env("EVIFUNCQA_OUT", &output)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn test_missing_input_fails_with_message() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("absent.jsonl");
    let output = temp_dir.path().join("out.csv");

    let result = evifuncqa_csv()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("input file not found"), "stderr: {stderr}");
    assert!(result.stdout.is_empty());
}

#[test]
fn test_malformed_input_fails_with_line_number() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_text(temp_dir.path(), "in.jsonl", "{\"id\": 1}\n\n{broken\n");
    let output = temp_dir.path().join("out.csv");

    let result = evifuncqa_csv()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("in.jsonl:3"), "stderr: {stderr}");
}

#[test]
fn test_requires_both_paths() {
    evifuncqa_csv().arg("--in").arg("x.jsonl").assert().failure();
    evifuncqa_csv().assert().failure();
}
