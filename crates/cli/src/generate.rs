// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case-shaped random inputs for the benchmark.
//!
//! Three shapes, matching the classic analysis of string matchers:
//! - best: the pattern's first symbol never appears in the text
//! - worst: `a…ab` text against `a…ab` pattern
//! - average: uniform symbols for both

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Input distribution for one experiment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CaseShape {
    Best,
    Worst,
    Average,
}

impl CaseShape {
    /// All shapes, in reporting order.
    pub const ALL: [CaseShape; 3] = [CaseShape::Best, CaseShape::Worst, CaseShape::Average];

    pub fn as_str(self) -> &'static str {
        match self {
            CaseShape::Best => "best",
            CaseShape::Worst => "worst",
            CaseShape::Average => "average",
        }
    }
}

impl fmt::Display for CaseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from building an alphabet or generating a case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("alphabet needs at least 2 symbols, got {0}")]
    AlphabetTooSmall(usize),

    #[error("alphabet symbol {0:?} appears more than once")]
    DuplicateSymbol(char),

    #[error("alphabet symbol {0:?} is not ASCII")]
    NonAscii(char),

    #[error("pattern length must be at least 1")]
    EmptyPattern,
}

/// Ordered set of distinct ASCII symbols inputs are drawn from.
///
/// At least two symbols are required: the best-case shape reserves one
/// symbol that the text never contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    pub fn new(symbols: &[u8]) -> Result<Self, GenerateError> {
        if symbols.len() < 2 {
            return Err(GenerateError::AlphabetTooSmall(symbols.len()));
        }
        for (i, &s) in symbols.iter().enumerate() {
            if !s.is_ascii() {
                return Err(GenerateError::NonAscii(char::from(s)));
            }
            if symbols[..i].contains(&s) {
                return Err(GenerateError::DuplicateSymbol(char::from(s)));
            }
        }
        Ok(Self { symbols: symbols.to_vec() })
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: construction rejects alphabets under two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol the best-case text never contains.
    fn reserved(&self) -> u8 {
        self.symbols[self.symbols.len() - 1]
    }

    /// Symbols the best-case text is drawn from.
    fn unreserved(&self) -> &[u8] {
        &self.symbols[..self.symbols.len() - 1]
    }
}

impl Default for Alphabet {
    /// Lowercase ASCII letters.
    fn default() -> Self {
        Self { symbols: (b'a'..=b'z').collect() }
    }
}

impl FromStr for Alphabet {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(c) = s.chars().find(|c| !c.is_ascii()) {
            return Err(GenerateError::NonAscii(c));
        }
        Self::new(s.as_bytes())
    }
}

/// A generated text/pattern pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInput {
    pub shape: CaseShape,
    pub text: Vec<u8>,
    pub pattern: Vec<u8>,
}

/// Seeded source of case inputs.
pub struct Generator {
    alphabet: Alphabet,
    rng: StdRng,
}

impl Generator {
    /// `None` seeds from OS entropy.
    pub fn new(alphabet: Alphabet, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { alphabet, rng }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Generate a text of `text_len` and a pattern of `pattern_len` symbols.
    pub fn case(
        &mut self,
        shape: CaseShape,
        text_len: usize,
        pattern_len: usize,
    ) -> Result<CaseInput, GenerateError> {
        if pattern_len == 0 {
            return Err(GenerateError::EmptyPattern);
        }

        let (text, pattern) = match shape {
            CaseShape::Best => {
                let text = self.uniform(text_len, true);
                let mut pattern = Vec::with_capacity(pattern_len);
                pattern.push(self.alphabet.reserved());
                pattern.extend(self.uniform(pattern_len - 1, false));
                (text, pattern)
            }
            CaseShape::Worst => (self.run_with_tail(text_len), self.run_with_tail(pattern_len)),
            CaseShape::Average => (self.uniform(text_len, false), self.uniform(pattern_len, false)),
        };

        Ok(CaseInput { shape, text, pattern })
    }

    /// `len` uniform symbols, optionally avoiding the reserved symbol.
    fn uniform(&mut self, len: usize, unreserved_only: bool) -> Vec<u8> {
        let pool = if unreserved_only {
            self.alphabet.unreserved()
        } else {
            self.alphabet.symbols()
        };
        (0..len).map(|_| pool[self.rng.gen_range(0..pool.len())]).collect()
    }

    /// First symbol repeated `len - 1` times, then the second symbol.
    fn run_with_tail(&self, len: usize) -> Vec<u8> {
        let symbols = self.alphabet.symbols();
        let mut out = vec![symbols[0]; len];
        if let Some(last) = out.last_mut() {
            *last = symbols[1];
        }
        out
    }
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
