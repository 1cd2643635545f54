//! Test helpers for behavioral specifications.
//!
//! Provides high-level helpers for testing kmpbench CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the kmpbench binary
pub fn kmpbench_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("kmpbench"))
}

/// Returns an assert_cmd Command, for tests that feed stdin
pub fn kmpbench_stdin_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("kmpbench"))
}

/// Temp directory with no config file, used as working directory
pub fn empty_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Temp directory containing the given kmpbench.toml
pub fn dir_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("kmpbench.toml"), config).unwrap();
    dir
}

/// Write a file under `dir` and return its path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Run kmpbench in `dir` with `args` and parse stdout as JSON
pub fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = kmpbench_cmd().args(args).current_dir(dir).output().unwrap();
    assert!(
        output.status.success(),
        "kmpbench {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
