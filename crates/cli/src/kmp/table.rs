// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure function (LPS table) construction.

use super::KmpError;
use super::probe::{NoProbe, Probe};

/// Longest proper prefix of `pattern[..=k]` that is also its suffix, for
/// every position `k` of a pattern.
///
/// Always satisfies `table[0] == 0` and `table[k] <= k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureTable {
    lps: Vec<usize>,
}

impl FailureTable {
    /// Build the table for a non-empty pattern.
    pub fn build<T: PartialEq>(pattern: &[T]) -> Result<Self, KmpError> {
        Self::build_with_probe(pattern, &mut NoProbe)
    }

    /// Build the table, reporting every comparison and retreat to `probe`.
    pub fn build_with_probe<T, P>(pattern: &[T], probe: &mut P) -> Result<Self, KmpError>
    where
        T: PartialEq,
        P: Probe,
    {
        if pattern.is_empty() {
            return Err(KmpError::EmptyPattern);
        }

        let m = pattern.len();
        let mut lps = vec![0; m];
        let mut length = 0;
        let mut i = 1;

        while i < m {
            probe.compare();
            if pattern[i] == pattern[length] {
                length += 1;
                lps[i] = length;
                i += 1;
            } else if length != 0 {
                // Retry position i against the next shorter border.
                probe.fallback();
                length = lps[length - 1];
            } else {
                lps[i] = 0;
                i += 1;
            }
        }

        Ok(Self { lps })
    }

    /// Wrap a precomputed table after checking it belongs to `pattern`.
    pub fn from_raw<T: PartialEq>(pattern: &[T], lps: Vec<usize>) -> Result<Self, KmpError> {
        let table = Self { lps };
        table.verify(pattern)?;
        Ok(table)
    }

    /// Check that this is exactly the failure table of `pattern`.
    pub fn verify<T: PartialEq>(&self, pattern: &[T]) -> Result<(), KmpError> {
        verify_table(pattern, &self.lps)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.lps
    }

    pub fn len(&self) -> usize {
        self.lps.len()
    }

    /// Always false: tables are only built for non-empty patterns.
    pub fn is_empty(&self) -> bool {
        self.lps.is_empty()
    }

    pub fn get(&self, k: usize) -> Option<usize> {
        self.lps.get(k).copied()
    }

    /// Smallest period of the whole pattern (`m - lps[m-1]`).
    pub fn period(&self) -> usize {
        match self.lps.last() {
            Some(&border) => self.lps.len() - border,
            None => 0,
        }
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.lps
    }
}

impl AsRef<[usize]> for FailureTable {
    fn as_ref(&self) -> &[usize] {
        &self.lps
    }
}

/// Check that `lps` is exactly the failure table of `pattern`.
///
/// Costs one table build, O(m).
pub fn verify_table<T: PartialEq>(pattern: &[T], lps: &[usize]) -> Result<(), KmpError> {
    if pattern.is_empty() {
        return Err(KmpError::EmptyPattern);
    }
    if pattern.len() != lps.len() {
        return Err(KmpError::TableLengthMismatch { pattern: pattern.len(), table: lps.len() });
    }
    let expected = FailureTable::build(pattern)?;
    match expected.lps.iter().zip(lps).position(|(e, f)| e != f) {
        Some(index) => Err(KmpError::TableMismatch {
            index,
            expected: expected.lps[index],
            found: lps[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
