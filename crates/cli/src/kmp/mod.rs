// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Knuth-Morris-Pratt pattern matching.
//!
//! Two pieces, strictly ordered:
//! - [`FailureTable`]: the longest-proper-prefix-suffix table of a pattern
//! - [`search`] / [`Matcher`]: a single forward scan over the text that
//!   uses the table to recover from mismatches without rescanning
//!
//! Both run in linear time: O(m) for the table, O(n) for the scan.

pub mod matcher;
pub mod probe;
pub mod table;

pub use matcher::{FindIter, Matcher, find_all, search};
pub use probe::{NoProbe, Probe, SearchStats};
pub use table::{FailureTable, verify_table};

/// Contract violations reported by the matcher.
///
/// None of these are transient: retrying with the same input fails the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KmpError {
    #[error("pattern must not be empty")]
    EmptyPattern,

    #[error("failure table has {table} entries but pattern has {pattern} symbols")]
    TableLengthMismatch { pattern: usize, table: usize },

    #[error("failure table entry {index} is {found}, expected {expected} for this pattern")]
    TableMismatch { index: usize, expected: usize, found: usize },
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
