// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes diagnostic output to stderr. Enabled with `--verbose`.

use crate::config::Config;
use crate::harness::ExperimentRecord;

/// Verbose output logger. Writes to stderr when enabled.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr (indented as content under a section).
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("  {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }

    /// Describe the configuration a run will use.
    pub fn config(&self, config: &Config, source: Option<&std::path::Path>) {
        if !self.enabled {
            return;
        }
        self.section("Configuration");
        match source {
            Some(path) => self.log(&format!("Config: {}", path.display())),
            None => self.log("Config: (defaults)"),
        }
        let bench = &config.bench;
        self.log(&format!("Repetitions: {}", bench.repetitions));
        match bench.seed {
            Some(seed) => self.log(&format!("Seed: {}", seed)),
            None => self.log("Seed: (entropy)"),
        }
        self.log(&format!("Alphabet: {} symbols", bench.alphabet.len()));
        let cases: Vec<&str> = bench.cases.iter().map(|c| c.as_str()).collect();
        self.log(&format!("Cases: {}", cases.join(", ")));
        let sizes: Vec<String> = bench.sizes.iter().map(|(n, m)| format!("{}:{}", n, m)).collect();
        self.log(&format!("Sizes: {}", sizes.join(", ")));
    }

    /// One line per finished experiment.
    pub fn record(&self, record: &ExperimentRecord) {
        self.log(&format!(
            "{} n={} m={}: {:.6}s",
            record.case, record.text_len, record.pattern_len, record.mean_secs
        ));
    }
}
