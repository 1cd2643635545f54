// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Individual config structs delegate to these constants via their `default_*` methods.

/// Config file name searched for by discovery.
pub const CONFIG_FILE: &str = "kmpbench.toml";

/// Only supported config schema version.
pub const CONFIG_VERSION: u32 = 1;

/// Benchmark plan defaults.
pub mod bench {
    /// Timed searches per experiment (20).
    pub const REPETITIONS: usize = 20;

    /// Symbols inputs are drawn from.
    pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

    /// (text length, pattern length) grid, small to very large.
    pub const SIZES: [(usize, usize); 6] = [
        (1_000, 10),
        (10_000, 20),
        (50_000, 30),
        (100_000, 50),
        (500_000, 75),
        (1_000_000, 100),
    ];
}
