// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Operation counting hooks for the table builder and the matcher.

/// Observer of the elementary steps of a KMP run.
///
/// The timed path uses [`NoProbe`], whose empty methods inline away.
pub trait Probe {
    /// One symbol comparison.
    fn compare(&mut self);

    /// One retreat through the failure table.
    fn fallback(&mut self);

    /// One reported occurrence.
    fn matched(&mut self) {}
}

/// Probe that records nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProbe;

impl Probe for NoProbe {
    #[inline(always)]
    fn compare(&mut self) {}

    #[inline(always)]
    fn fallback(&mut self) {}
}

/// Step counts collected from an instrumented run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Symbol comparisons performed, one per loop iteration.
    pub comparisons: usize,
    /// Failure-table retreats (cursor moved back without consuming input).
    pub fallbacks: usize,
    /// Occurrences reported.
    pub matches: usize,
}

impl Probe for SearchStats {
    #[inline]
    fn compare(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    fn fallback(&mut self) {
        self.fallbacks += 1;
    }

    #[inline]
    fn matched(&mut self) {
        self.matches += 1;
    }
}
