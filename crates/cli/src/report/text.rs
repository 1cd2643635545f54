// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::fmt::Write;

use super::ReportFormatter;
use crate::harness::ExperimentRecord;

/// Size estimation constants for pre-allocation.
const TEXT_HEADER_SIZE: usize = 40;
const TEXT_RECORD_SIZE: usize = 160;

/// Text format report formatter.
pub struct TextFormatter {
    ascii: bool,
}

impl TextFormatter {
    pub fn new(ascii: bool) -> Self {
        Self { ascii }
    }

    fn plus_minus(&self) -> &'static str {
        if self.ascii { "+/-" } else { "±" }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, records: &[ExperimentRecord]) -> anyhow::Result<String> {
        let mut out = String::with_capacity(TEXT_HEADER_SIZE + records.len() * TEXT_RECORD_SIZE);
        writeln!(out, "KMP Benchmark")?;
        writeln!(out, "=============")?;
        for r in records {
            writeln!(out)?;
            writeln!(out, "{} case: n={} m={}", r.case, r.text_len, r.pattern_len)?;
            writeln!(out, "  repetitions: {}", r.repetitions)?;
            writeln!(
                out,
                "  mean: {:.6}s {} {:.6}s",
                r.mean_secs,
                self.plus_minus(),
                r.stddev_secs
            )?;
            writeln!(out, "  occurrences: {}", r.occurrences)?;
            writeln!(out, "  n+m: {}", r.complexity)?;
        }
        Ok(out)
    }

    fn format_empty(&self) -> String {
        "No experiments run.\n".to_string()
    }
}
