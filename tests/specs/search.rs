//! Specs for `kmpbench search`.

use crate::prelude::*;

/// > Every overlapping occurrence is reported, one offset per line
#[test]
fn search_prints_overlapping_offsets() {
    let dir = empty_dir();
    let file = write_file(dir.path(), "text.txt", "aaaa");
    kmpbench_cmd()
        .args(["search", "aa"])
        .arg(&file)
        .assert()
        .success()
        .stdout("0\n1\n2\n");
}

/// > No occurrence prints nothing and still succeeds
#[test]
fn search_without_match_prints_nothing() {
    let dir = empty_dir();
    let file = write_file(dir.path(), "text.txt", "aaaa");
    kmpbench_cmd().args(["search", "b"]).arg(&file).assert().success().stdout("");
}

/// > Text is read from stdin when no path is given
#[test]
fn search_reads_stdin() {
    kmpbench_stdin_cmd()
        .args(["search", "abc"])
        .write_stdin("abcabcabc")
        .assert()
        .success()
        .stdout("0\n3\n6\n");
}

/// > --count prints the number of occurrences only
#[test]
fn search_count() {
    kmpbench_stdin_cmd()
        .args(["search", "--count", "z"])
        .write_stdin("zzzz")
        .assert()
        .success()
        .stdout("4\n");
}

/// > JSON output is a single object with offsets and lengths
#[test]
fn search_json_output() {
    let output = kmpbench_stdin_cmd()
        .args(["search", "-o", "json", "aba"])
        .write_stdin("ababa")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["offsets"], serde_json::json!([0, 2]));
    assert_eq!(value["count"], 2);
    assert_eq!(value["text_len"], 5);
    assert_eq!(value["pattern_len"], 3);
}

/// > An empty pattern is a contract violation, not an empty result
#[test]
fn search_rejects_empty_pattern() {
    kmpbench_stdin_cmd()
        .args(["search", ""])
        .write_stdin("abc")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicates::str::contains("pattern must not be empty"));
}

/// > A missing file is reported with its path
#[test]
fn search_reports_missing_file() {
    let dir = empty_dir();
    kmpbench_cmd()
        .args(["search", "a", "does-not-exist.txt"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("does-not-exist.txt"));
}
