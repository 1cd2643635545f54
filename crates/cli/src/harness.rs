// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timing harness.
//!
//! Each experiment generates its inputs once, compiles the pattern once,
//! then times repeated searches. Results are typed records; formatting
//! them is left to [`crate::report`].

use std::hint::black_box;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::generate::{CaseShape, GenerateError, Generator};
use crate::kmp::{KmpError, Matcher};

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("repetitions must be at least 1")]
    NoRepetitions,

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Kmp(#[from] KmpError),
}

/// Mean and sample standard deviation of a set of timings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub stddev: f64,
}

impl Summary {
    /// Summarize `samples`. Returns None for an empty slice.
    ///
    /// The standard deviation uses the n-1 denominator and is 0 for a
    /// single sample.
    pub fn of(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let stddev = if samples.len() > 1 {
            let sq: f64 = samples.iter().map(|t| (t - mean) * (t - mean)).sum();
            (sq / (n - 1.0)).sqrt()
        } else {
            0.0
        };
        Some(Self { mean, stddev })
    }
}

/// One (shape, n, m) measurement to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experiment {
    pub shape: CaseShape,
    pub text_len: usize,
    pub pattern_len: usize,
    pub repetitions: usize,
}

/// Result of one experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    pub case: CaseShape,
    pub text_len: usize,
    pub pattern_len: usize,
    pub repetitions: usize,
    /// Mean search time in seconds.
    pub mean_secs: f64,
    /// Sample standard deviation of search time in seconds.
    pub stddev_secs: f64,
    /// Occurrences found by the first repetition.
    pub occurrences: usize,
    /// n + m.
    pub complexity: usize,
}

/// Run one experiment.
pub fn run_experiment(
    experiment: &Experiment,
    generator: &mut Generator,
) -> Result<ExperimentRecord, HarnessError> {
    if experiment.repetitions == 0 {
        return Err(HarnessError::NoRepetitions);
    }

    let input = generator.case(experiment.shape, experiment.text_len, experiment.pattern_len)?;
    let matcher = Matcher::new(&input.pattern)?;

    let mut times = Vec::with_capacity(experiment.repetitions);
    let mut occurrences = None;
    for _ in 0..experiment.repetitions {
        let start = Instant::now();
        let found = black_box(matcher.find_all(black_box(&input.text)));
        times.push(start.elapsed().as_secs_f64());
        occurrences.get_or_insert(found.len());
    }

    let summary = Summary::of(&times).ok_or(HarnessError::NoRepetitions)?;
    tracing::debug!(
        "{} n={} m={}: mean {:.6}s over {} runs",
        experiment.shape,
        experiment.text_len,
        experiment.pattern_len,
        summary.mean,
        experiment.repetitions
    );

    Ok(ExperimentRecord {
        case: experiment.shape,
        text_len: experiment.text_len,
        pattern_len: experiment.pattern_len,
        repetitions: experiment.repetitions,
        mean_secs: summary.mean,
        stddev_secs: summary.stddev,
        occurrences: occurrences.unwrap_or(0),
        complexity: experiment.text_len + experiment.pattern_len,
    })
}

/// A grid of experiments: every size crossed with every case shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// (text length, pattern length) pairs.
    pub sizes: Vec<(usize, usize)>,
    pub cases: Vec<CaseShape>,
    pub repetitions: usize,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            sizes: defaults::bench::SIZES.to_vec(),
            cases: CaseShape::ALL.to_vec(),
            repetitions: defaults::bench::REPETITIONS,
        }
    }
}

impl Plan {
    /// Experiments in run order: sizes outer, cases inner.
    pub fn experiments(&self) -> impl Iterator<Item = Experiment> + '_ {
        self.sizes.iter().flat_map(move |&(text_len, pattern_len)| {
            self.cases.iter().map(move |&shape| Experiment {
                shape,
                text_len,
                pattern_len,
                repetitions: self.repetitions,
            })
        })
    }

    pub fn len(&self) -> usize {
        self.sizes.len() * self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run every experiment of `plan`, calling `on_record` as each finishes.
///
/// Stops at the first error.
pub fn run_plan<F>(
    plan: &Plan,
    generator: &mut Generator,
    mut on_record: F,
) -> Result<Vec<ExperimentRecord>, HarnessError>
where
    F: FnMut(&ExperimentRecord),
{
    tracing::info!("running {} experiments", plan.len());
    let mut records = Vec::with_capacity(plan.len());
    for experiment in plan.experiments() {
        let record = run_experiment(&experiment, generator)?;
        on_record(&record);
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
