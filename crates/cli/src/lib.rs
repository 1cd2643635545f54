// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Knuth-Morris-Pratt string matching and a benchmark harness that checks
//! its O(n + m) running time over best, worst and average case inputs.
//!
//! ```
//! use kmpbench::kmp::{FailureTable, search};
//!
//! let table = FailureTable::build(b"aa").unwrap();
//! assert_eq!(search(b"aaaa", b"aa", table.as_slice()).unwrap(), vec![0, 1, 2]);
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod generate;
pub mod harness;
pub mod kmp;
pub mod report;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;
