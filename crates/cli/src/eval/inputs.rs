// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluator inputs: the four booleans and the six reveal gates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::stage::Stage;
use crate::error::{Error, Result};

/// The four named boolean inputs, A through D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct InputSet {
    pub a: bool,
    pub b: bool,
    pub c: bool,
    pub d: bool,
}

impl InputSet {
    pub const fn new(a: bool, b: bool, c: bool, d: bool) -> Self {
        Self { a, b, c, d }
    }

    /// Inputs in A, B, C, D order.
    pub const fn as_array(&self) -> [bool; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Every input combination, `0000` through `1111`, with A as the most
    /// significant bit.
    pub fn all() -> impl Iterator<Item = InputSet> {
        (0u8..16).map(|bits| {
            InputSet::new(
                bits & 0b1000 != 0,
                bits & 0b0100 != 0,
                bits & 0b0010 != 0,
                bits & 0b0001 != 0,
            )
        })
    }
}

impl FromStr for InputSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bits = parse_bits(s)?;
        match bits.as_slice() {
            &[a, b, c, d] => Ok(InputSet::new(a, b, c, d)),
            _ => Err(Error::Argument(format!(
                "inputs must be 4 bits (A, B, C, D), got {} in {:?}",
                bits.len(),
                s
            ))),
        }
    }
}

impl fmt::Display for InputSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_bits(&self.as_array()))
    }
}

/// Reveal gates, one per stage.
///
/// A gate set to `false` stops evaluation at that stage and returns its
/// values. Unspecified gates default to revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub singles: bool,
    pub inverted_singles: bool,
    pub pairs: bool,
    pub inverted_pairs: bool,
    pub triples: bool,
    pub inverted_triples: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::ALL
    }
}

impl RevealConfig {
    /// Every stage revealed; evaluation falls through and returns nothing.
    pub const ALL: Self = Self {
        singles: true,
        inverted_singles: true,
        pairs: true,
        inverted_pairs: true,
        triples: true,
        inverted_triples: true,
    };

    /// Nothing revealed; evaluation returns the singles.
    pub const NONE: Self = Self {
        singles: false,
        inverted_singles: false,
        pairs: false,
        inverted_pairs: false,
        triples: false,
        inverted_triples: false,
    };

    /// Keys accepted in the `[reveal]` config table.
    pub const KEYS: [&'static str; 6] = [
        "singles",
        "inverted_singles",
        "pairs",
        "inverted_pairs",
        "triples",
        "inverted_triples",
    ];

    /// Build from six flags in stage order.
    pub const fn from_flags(flags: [bool; 6]) -> Self {
        Self {
            singles: flags[0],
            inverted_singles: flags[1],
            pairs: flags[2],
            inverted_pairs: flags[3],
            triples: flags[4],
            inverted_triples: flags[5],
        }
    }

    /// Flags in stage order.
    pub const fn as_flags(&self) -> [bool; 6] {
        [
            self.singles,
            self.inverted_singles,
            self.pairs,
            self.inverted_pairs,
            self.triples,
            self.inverted_triples,
        ]
    }

    /// Reveal every stage before `stage` and stop at `stage`.
    pub fn stopping_at(stage: Stage) -> Self {
        let mut flags = [false; 6];
        for (flag, s) in flags.iter_mut().zip(Stage::ALL) {
            *flag = s < stage;
        }
        Self::from_flags(flags)
    }

    pub fn is_revealed(&self, stage: Stage) -> bool {
        match stage {
            Stage::Singles => self.singles,
            Stage::InvertedSingles => self.inverted_singles,
            Stage::Pairs => self.pairs,
            Stage::InvertedPairs => self.inverted_pairs,
            Stage::Triples => self.triples,
            Stage::InvertedTriples => self.inverted_triples,
        }
    }

    /// The stage evaluation will stop at, if any.
    pub fn terminating_stage(&self) -> Option<Stage> {
        Stage::ALL.into_iter().find(|s| !self.is_revealed(*s))
    }
}

impl FromStr for RevealConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bits = parse_bits(s)?;
        let flags: [bool; 6] = bits.as_slice().try_into().map_err(|_| {
            Error::Argument(format!(
                "reveal flags must be 6 bits (one per stage), got {} in {:?}",
                bits.len(),
                s
            ))
        })?;
        Ok(Self::from_flags(flags))
    }
}

impl fmt::Display for RevealConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_bits(&self.as_flags()))
    }
}

/// Parse a bitstring. Accepts `1`/`0`, `t`/`f`, and `T`/`F`.
pub fn parse_bits(s: &str) -> Result<Vec<bool>> {
    s.chars()
        .map(|c| match c {
            '1' | 't' | 'T' => Ok(true),
            '0' | 'f' | 'F' => Ok(false),
            other => Err(Error::Argument(format!(
                "invalid bit {:?} in {:?} (expected 1/0 or t/f)",
                other, s
            ))),
        })
        .collect()
}

/// Format booleans as a `1`/`0` bitstring.
pub fn format_bits(values: &[bool]) -> String {
    values.iter().map(|&v| if v { '1' } else { '0' }).collect()
}

#[cfg(test)]
#[path = "inputs_tests.rs"]
mod tests;
