//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::generate::CaseShape;

/// Knuth-Morris-Pratt string matching and its linear-time benchmark
#[derive(Parser)]
#[command(name = "kmpbench")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "KMPBENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Time KMP over best, worst and average case inputs
    Run(RunArgs),
    /// Print every byte offset where a pattern occurs in a file
    Search(SearchArgs),
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Output format (overrides output.format)
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Compact JSON output (one line)
    #[arg(long)]
    pub compact: bool,

    /// Timed searches per experiment (overrides bench.repetitions)
    #[arg(short = 'n', long, value_name = "N")]
    pub repetitions: Option<usize>,

    /// RNG seed for reproducible inputs (overrides bench.seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Case shape to run; repeat for several (overrides bench.cases)
    #[arg(long = "case", value_name = "SHAPE")]
    pub cases: Vec<CaseShape>,

    /// Text and pattern length as N:M; repeat for several (overrides bench.sizes)
    #[arg(long = "size", value_name = "N:M", value_parser = parse_size)]
    pub sizes: Vec<(usize, usize)>,

    /// Restrict text output to ASCII (overrides output.ascii)
    #[arg(long)]
    pub ascii: bool,
}

#[derive(clap::Args)]
pub struct SearchArgs {
    /// Pattern to search for
    pub pattern: String,

    /// File to search (reads stdin when omitted)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print only the number of occurrences
    #[arg(long)]
    pub count: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse an `N:M` size pair. The pattern length must be at least 1.
pub fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (n, m) = s.split_once(':').ok_or_else(|| format!("expected N:M, got {:?}", s))?;
    let n: usize = n.trim().parse().map_err(|e| format!("invalid text length {:?}: {}", n, e))?;
    let m: usize =
        m.trim().parse().map_err(|e| format!("invalid pattern length {:?}: {}", m, e))?;
    if m == 0 {
        return Err("pattern length must be at least 1".to_string());
    }
    Ok((n, m))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
