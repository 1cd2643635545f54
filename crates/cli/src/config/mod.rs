// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loaded from `kmpbench.toml`.
//!
//! Every field has a default, so an empty file (or no file) yields the
//! reference benchmark plan.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::generate::{Alphabet, CaseShape, GenerateError};
use crate::harness::Plan;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config version {0} (expected {expected})", expected = defaults::CONFIG_VERSION)]
    UnsupportedVersion(u32),

    #[error("bench.repetitions must be at least 1")]
    ZeroRepetitions,

    #[error("bench.sizes[{0}] has a pattern length of 0")]
    EmptyPatternSize(usize),

    #[error("bench.alphabet: {0}")]
    Alphabet(#[from] GenerateError),
}

/// Top-level config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub version: u32,
    pub bench: BenchConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::CONFIG_VERSION,
            bench: BenchConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// `[bench]` section: what to measure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Timed searches per experiment.
    pub repetitions: usize,

    /// RNG seed. Absent means a fresh entropy seed per run.
    pub seed: Option<u64>,

    /// Symbols inputs are drawn from (ASCII, at least 2, distinct).
    pub alphabet: String,

    /// Case shapes to run, in order.
    pub cases: Vec<CaseShape>,

    /// (text length, pattern length) pairs.
    pub sizes: Vec<(usize, usize)>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repetitions: defaults::bench::REPETITIONS,
            seed: None,
            alphabet: defaults::bench::ALPHABET.to_string(),
            cases: CaseShape::ALL.to_vec(),
            sizes: defaults::bench::SIZES.to_vec(),
        }
    }
}

impl BenchConfig {
    pub fn alphabet(&self) -> Result<Alphabet, ConfigError> {
        Ok(self.alphabet.parse()?)
    }

    pub fn plan(&self) -> Plan {
        Plan {
            sizes: self.sizes.clone(),
            cases: self.cases.clone(),
            repetitions: self.repetitions,
        }
    }
}

/// `[output]` section: how to print results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Restrict text output to ASCII characters.
    pub ascii: bool,
}

impl Config {
    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != defaults::CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }
        if self.bench.repetitions == 0 {
            return Err(ConfigError::ZeroRepetitions);
        }
        if let Some(index) = self.bench.sizes.iter().position(|&(_, m)| m == 0) {
            return Err(ConfigError::EmptyPatternSize(index));
        }
        self.bench.alphabet()?;
        Ok(())
    }
}

/// Parse config from a TOML string.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    config.validate()?;
    Ok(config)
}

/// Load and validate config from a file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
