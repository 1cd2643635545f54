//! Specs for `kmpbench run`.

use crate::prelude::*;

const SMALL: &[&str] = &["run", "--size", "200:4", "-n", "2", "--seed", "1"];

fn small_json<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut args: Vec<&'a str> = SMALL.to_vec();
    args.extend_from_slice(&["-o", "json"]);
    args.extend_from_slice(extra);
    args
}

/// > One record per case shape, in best, worst, average order
#[test]
fn run_reports_all_cases() {
    let dir = empty_dir();
    let value = run_json(dir.path(), &small_json(&[]));
    let records = value["records"].as_array().unwrap();
    let cases: Vec<&str> = records.iter().map(|r| r["case"].as_str().unwrap()).collect();
    assert_eq!(cases, ["best", "worst", "average"]);
    for record in records {
        assert_eq!(record["text_len"], 200);
        assert_eq!(record["pattern_len"], 4);
        assert_eq!(record["repetitions"], 2);
        assert_eq!(record["complexity"], 204);
        assert!(record["mean_secs"].as_f64().unwrap() >= 0.0);
    }
    assert_eq!(records[0]["occurrences"], 0);
    assert_eq!(records[1]["occurrences"], 1);
}

/// > --case restricts the shapes that run
#[test]
fn run_single_case() {
    let dir = empty_dir();
    let value = run_json(dir.path(), &small_json(&["--case", "worst"]));
    let records = value["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["case"], "worst");
}

/// > Text output is the default
#[test]
fn run_text_output() {
    let dir = empty_dir();
    kmpbench_cmd()
        .args(SMALL)
        .args(["--case", "best"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains("KMP Benchmark")
                .and(predicates::str::contains("best case: n=200 m=4"))
                .and(predicates::str::contains("occurrences: 0")),
        );
}

/// > --ascii keeps text output ASCII
#[test]
fn run_ascii_output() {
    let dir = empty_dir();
    let output = kmpbench_cmd()
        .args(SMALL)
        .args(["--case", "average", "--ascii"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_ascii());
    assert!(String::from_utf8_lossy(&output.stdout).contains("+/-"));
}

/// > kmpbench.toml in the working directory sets the plan
#[test]
fn run_uses_discovered_config() {
    let dir = dir_with_config(
        r#"
version = 1

[bench]
repetitions = 3
seed = 8
cases = ["average"]
sizes = [[50, 2], [100, 3]]

[output]
format = "json"
"#,
    );
    let value = run_json(dir.path(), &["run"]);
    let records = value["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["text_len"], 50);
    assert_eq!(records[1]["text_len"], 100);
    assert_eq!(records[1]["repetitions"], 3);
}

/// > Command-line flags override config values
#[test]
fn run_flags_override_config() {
    let dir = dir_with_config("[bench]\nrepetitions = 3\nsizes = [[50, 2]]\n");
    let value = run_json(dir.path(), &["run", "-o", "json", "-n", "1", "--case", "best"]);
    assert_eq!(value["records"][0]["repetitions"], 1);
    assert_eq!(value["records"][0]["text_len"], 50);
}

/// > --config points at an explicit file
#[test]
fn run_explicit_config() {
    let dir = empty_dir();
    let path = write_file(
        dir.path(),
        "custom.toml",
        "[bench]\nsizes = [[30, 2]]\ncases = [\"worst\"]\n",
    );
    let value =
        run_json(dir.path(), &["run", "-o", "json", "-n", "1", "-C", path.to_str().unwrap()]);
    assert_eq!(value["records"][0]["text_len"], 30);
}

/// > An invalid config file fails before any experiment runs
#[test]
fn run_rejects_invalid_config() {
    let dir = dir_with_config("[bench]\nalphabet = \"a\"\n");
    kmpbench_cmd()
        .arg("run")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicates::str::contains("failed to load config"));
}

/// > Zero repetitions is rejected
#[test]
fn run_rejects_zero_repetitions() {
    let dir = empty_dir();
    kmpbench_cmd()
        .args(["run", "--size", "10:2", "-n", "0"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("repetitions must be at least 1"));
}

/// > A zero pattern length is rejected by argument parsing
#[test]
fn run_rejects_zero_pattern_size() {
    let dir = empty_dir();
    kmpbench_cmd()
        .args(["run", "--size", "10:0"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("pattern length must be at least 1"));
}

/// > --compact with text output warns and is ignored
#[test]
fn run_compact_text_warns() {
    let dir = empty_dir();
    kmpbench_cmd()
        .args(SMALL)
        .args(["--case", "best", "--compact"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("--compact only applies to JSON"));
}
