// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run command implementation.

use std::io::Write;

use anyhow::Context;

use kmpbench::cli::{Cli, OutputFormat, RunArgs};
use kmpbench::config::{self, Config};
use kmpbench::discovery;
use kmpbench::generate::Generator;
use kmpbench::harness;
use kmpbench::report::{self, FormatOptions};
use kmpbench::verbose::VerboseLogger;

/// Run the benchmark plan and print its records.
pub fn run(cli: &Cli, args: &RunArgs) -> anyhow::Result<()> {
    let verbose = VerboseLogger::new(cli.verbose);
    let cwd = std::env::current_dir()?;

    // Explicit --config wins over discovery
    let config_path = cli.config.clone().or_else(|| discovery::find_config(&cwd));
    let mut config = match &config_path {
        Some(path) => config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    apply_overrides(&mut config, args);
    config.validate()?;
    verbose.config(&config, config_path.as_deref());

    let format = args.output.unwrap_or(config.output.format);
    if args.compact && !matches!(format, OutputFormat::Json) {
        eprintln!("warning: --compact only applies to JSON output, ignoring");
    }

    let mut generator = Generator::new(config.bench.alphabet()?, config.bench.seed);
    let plan = config.bench.plan();

    verbose.section("Experiments");
    let records = harness::run_plan(&plan, &mut generator, |record| verbose.record(record))?;

    let options = FormatOptions { compact: args.compact, ascii: config.output.ascii };
    let output = report::format_report(format, &records, options)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{}", output)?;
    // Add trailing newline for JSON output
    if matches!(format, OutputFormat::Json) {
        writeln!(handle)?;
    }
    Ok(())
}

/// Layer command-line flags over file config.
fn apply_overrides(config: &mut Config, args: &RunArgs) {
    let bench = &mut config.bench;
    if let Some(repetitions) = args.repetitions {
        bench.repetitions = repetitions;
    }
    if args.seed.is_some() {
        bench.seed = args.seed;
    }
    if !args.cases.is_empty() {
        bench.cases = args.cases.clone();
    }
    if !args.sizes.is_empty() {
        bench.sizes = args.sizes.clone();
    }
    if args.ascii {
        config.output.ascii = true;
    }
}
