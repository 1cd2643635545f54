// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search command implementation.

use std::io::{Read, Write};

use anyhow::Context;
use serde_json::json;

use kmpbench::cli::{Cli, OutputFormat, SearchArgs};
use kmpbench::kmp::Matcher;
use kmpbench::verbose::VerboseLogger;

/// Print the byte offset of every occurrence of the pattern.
pub fn run(cli: &Cli, args: &SearchArgs) -> anyhow::Result<()> {
    let verbose = VerboseLogger::new(cli.verbose);

    let text = match &args.path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).context("failed to read stdin")?;
            buf
        }
    };

    let matcher = Matcher::new(args.pattern.as_bytes()).context("invalid pattern")?;
    let (offsets, stats) = matcher.find_all_with_stats(&text);

    verbose.section("Search");
    verbose.log(&format!("Text: {} bytes", text.len()));
    verbose.log(&format!(
        "Pattern: {} bytes, period {}",
        args.pattern.len(),
        matcher.table().period()
    ));
    verbose.log(&format!("Comparisons: {} ({} fallbacks)", stats.comparisons, stats.fallbacks));

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match args.output {
        OutputFormat::Text if args.count => writeln!(handle, "{}", offsets.len())?,
        OutputFormat::Text => {
            for offset in &offsets {
                writeln!(handle, "{}", offset)?;
            }
        }
        OutputFormat::Json => {
            let value = json!({
                "pattern_len": args.pattern.len(),
                "text_len": text.len(),
                "count": offsets.len(),
                "offsets": if args.count { None } else { Some(&offsets) },
            });
            writeln!(handle, "{}", serde_json::to_string(&value)?)?;
        }
    }
    Ok(())
}
