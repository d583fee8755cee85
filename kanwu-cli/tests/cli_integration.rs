//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_docs(dir: &TempDir, original: &str, revised: &str) -> (String, String) {
    let a = dir.path().join("original.txt");
    let b = dir.path().join("revised.txt");
    fs::write(&a, original).unwrap();
    fs::write(&b, revised).unwrap();
    (
        a.to_string_lossy().into_owned(),
        b.to_string_lossy().into_owned(),
    )
}

fn kanwu() -> Command {
    Command::cargo_bin("kanwu").unwrap()
}

#[test]
fn identical_documents_report_all_matches() {
    let dir = TempDir::new().unwrap();
    let doc = "今天天气很好。\n他去了五伯家。\n";
    let (a, b) = write_docs(&dir, doc, doc);

    kanwu()
        .args(["compare", "-a", &a, "-b", &b, "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 matched"));
}

#[test]
fn csv_format_emits_errata_table() {
    let dir = TempDir::new().unwrap();
    let (a, b) = write_docs(
        &dir,
        "今天天气很好。\n他去了五伯家。\n",
        "今天天气很好。\n他去了五百家。\n",
    );

    kanwu()
        .args([
            "compare",
            "-a",
            &a,
            "-b",
            &b,
            "--format",
            "csv",
            "--similarity-threshold",
            "0.4",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "wrong,correct,clause,wrong_len,correct_len\n",
        ))
        .stdout(predicate::str::contains("伯,百,他去了五伯家,1,1"));
}

#[test]
fn json_format_carries_kind_tags() {
    let dir = TempDir::new().unwrap();
    let doc = "今天天气很好。\n";
    let (a, b) = write_docs(&dir, doc, doc);

    kanwu()
        .args(["compare", "-a", &a, "-b", &b, "--format", "json", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"match\""));
}

#[test]
fn output_flag_writes_file() {
    let dir = TempDir::new().unwrap();
    let doc = "今天天气很好。\n";
    let (a, b) = write_docs(&dir, doc, doc);
    let out = dir.path().join("report.csv");

    kanwu()
        .args([
            "compare",
            "-a",
            &a,
            "-b",
            &b,
            "--format",
            "csv",
            "--output",
            out.to_str().unwrap(),
            "--quiet",
        ])
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("wrong,correct,clause"));
}

#[test]
fn invalid_threshold_is_rejected() {
    let dir = TempDir::new().unwrap();
    let doc = "今天天气很好。\n";
    let (a, b) = write_docs(&dir, doc, doc);

    kanwu()
        .args([
            "compare",
            "-a",
            &a,
            "-b",
            &b,
            "--similarity-threshold",
            "1.5",
            "--quiet",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn missing_file_fails_cleanly() {
    kanwu()
        .args(["compare", "-a", "/nonexistent/a.txt", "-b", "/nonexistent/b.txt", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
