// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kmpbench::cli::{Cli, Command};

mod cmd_run;
mod cmd_search;

/// Log filter env var, e.g. `KMPBENCH_LOG=debug`.
const LOG_ENV: &str = "KMPBENCH_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Command::Run(args) => cmd_run::run(&cli, args),
        Command::Search(args) => cmd_search::run(&cli, args),
    }
}
