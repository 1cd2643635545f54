// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The KMP scan.
//!
//! The text cursor never moves backwards. On a mismatch the pattern
//! cursor retreats through the failure table, and after a full match it
//! resumes from the longest border, so overlapping occurrences are found.

use super::KmpError;
use super::probe::{NoProbe, Probe, SearchStats};
use super::table::{FailureTable, verify_table};

/// All starting offsets of `pattern` in `text`, in increasing order.
///
/// `table` must be the failure table of `pattern`; a table built for a
/// different pattern is rejected rather than producing wrong offsets.
pub fn search<T: PartialEq>(
    text: &[T],
    pattern: &[T],
    table: &[usize],
) -> Result<Vec<usize>, KmpError> {
    verify_table(pattern, table)?;
    Ok(FindIter::new(text, pattern, table, NoProbe).collect())
}

/// Build the failure table for `pattern` and search `text` with it.
pub fn find_all<T: PartialEq>(text: &[T], pattern: &[T]) -> Result<Vec<usize>, KmpError> {
    Matcher::new(pattern).map(|m| m.find_all(text))
}

/// A pattern compiled together with its failure table.
///
/// Build once, then search any number of texts.
#[derive(Debug, Clone)]
pub struct Matcher<'p, T> {
    pattern: &'p [T],
    table: FailureTable,
}

impl<'p, T: PartialEq> Matcher<'p, T> {
    pub fn new(pattern: &'p [T]) -> Result<Self, KmpError> {
        let table = FailureTable::build(pattern)?;
        Ok(Self { pattern, table })
    }

    /// Pair a pattern with a table built elsewhere.
    pub fn with_table(pattern: &'p [T], table: FailureTable) -> Result<Self, KmpError> {
        table.verify(pattern)?;
        Ok(Self { pattern, table })
    }

    pub fn pattern(&self) -> &'p [T] {
        self.pattern
    }

    pub fn table(&self) -> &FailureTable {
        &self.table
    }

    /// Lazily yield match offsets in `text`.
    pub fn find_iter<'t>(&self, text: &'t [T]) -> FindIter<'t, '_, T, NoProbe> {
        FindIter::new(text, self.pattern, self.table.as_slice(), NoProbe)
    }

    pub fn find_all(&self, text: &[T]) -> Vec<usize> {
        self.find_iter(text).collect()
    }

    /// Number of occurrences, without collecting offsets.
    pub fn count(&self, text: &[T]) -> usize {
        self.find_iter(text).count()
    }

    /// Search `text`, counting every comparison and table retreat.
    pub fn find_all_with_stats(&self, text: &[T]) -> (Vec<usize>, SearchStats) {
        let mut iter =
            FindIter::new(text, self.pattern, self.table.as_slice(), SearchStats::default());
        let offsets: Vec<usize> = iter.by_ref().collect();
        (offsets, iter.into_probe())
    }
}

/// Iterator over match offsets, produced by [`Matcher::find_iter`].
#[derive(Debug)]
pub struct FindIter<'t, 'm, T, P> {
    text: &'t [T],
    pattern: &'m [T],
    lps: &'m [usize],
    /// Text cursor.
    i: usize,
    /// Pattern cursor: length of the prefix currently matched.
    j: usize,
    probe: P,
}

impl<'t, 'm, T: PartialEq, P: Probe> FindIter<'t, 'm, T, P> {
    /// `lps` must already be known to belong to `pattern`.
    fn new(text: &'t [T], pattern: &'m [T], lps: &'m [usize], probe: P) -> Self {
        Self { text, pattern, lps, i: 0, j: 0, probe }
    }

    pub fn into_probe(self) -> P {
        self.probe
    }
}

impl<T: PartialEq, P: Probe> Iterator for FindIter<'_, '_, T, P> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let n = self.text.len();
        let m = self.pattern.len();

        while self.i < n {
            self.probe.compare();
            if self.pattern[self.j] == self.text[self.i] {
                self.i += 1;
                self.j += 1;
                if self.j == m {
                    // Resume from the longest border of the match.
                    self.j = self.lps[m - 1];
                    self.probe.matched();
                    return Some(self.i - m);
                }
            } else if self.j != 0 {
                self.probe.fallback();
                self.j = self.lps[self.j - 1];
            } else {
                self.i += 1;
            }
        }

        None
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
