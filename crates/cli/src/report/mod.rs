// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Experiment record output.
//!
//! Formats harness records as text or JSON.

mod json;
mod text;

use crate::cli::OutputFormat;
use crate::harness::ExperimentRecord;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Options shared by all formatters.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Single-line JSON.
    pub compact: bool,
    /// Avoid non-ASCII characters in text output.
    pub ascii: bool,
}

/// Trait for formatting experiment records into various output formats.
pub trait ReportFormatter {
    /// Format records into the target format.
    fn format(&self, records: &[ExperimentRecord]) -> anyhow::Result<String>;

    /// Return output for when no experiment ran.
    fn format_empty(&self) -> String;
}

/// Format records based on output format, returning the output string.
pub fn format_report(
    format: OutputFormat,
    records: &[ExperimentRecord],
    options: FormatOptions,
) -> anyhow::Result<String> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter::new(options.ascii)),
        OutputFormat::Json => Box::new(JsonFormatter::new(options.compact)),
    };

    if records.is_empty() {
        Ok(formatter.format_empty())
    } else {
        formatter.format(records)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
