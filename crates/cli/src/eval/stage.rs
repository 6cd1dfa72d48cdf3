// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stage descriptors and their combinations.

use std::fmt;

use serde::Serialize;

use super::inputs::InputSet;
use super::mode::{CombinationMode, PAIR_INDICES};

/// Input index triples: ABC, ABD, ACD. BCD is not part of the set.
const TRIPLE_INDICES: [(usize, usize, usize); 3] = [(0, 1, 2), (0, 1, 3), (0, 2, 3)];

/// One of the six boolean-combination groups, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Singles,
    InvertedSingles,
    Pairs,
    InvertedPairs,
    Triples,
    InvertedTriples,
}

impl Stage {
    /// Stages in the order they are evaluated.
    pub const ALL: [Stage; 6] = [
        Stage::Singles,
        Stage::InvertedSingles,
        Stage::Pairs,
        Stage::InvertedPairs,
        Stage::Triples,
        Stage::InvertedTriples,
    ];

    /// Stable identifier used in JSON and table output.
    pub fn id(self) -> &'static str {
        match self {
            Stage::Singles => "singles",
            Stage::InvertedSingles => "inverted-singles",
            Stage::Pairs => "pairs",
            Stage::InvertedPairs => "inverted-pairs",
            Stage::Triples => "triples",
            Stage::InvertedTriples => "inverted-triples",
        }
    }

    /// Header line emitted before a revealed stage's values.
    pub fn header(self) -> &'static str {
        match self {
            Stage::Singles => "Vars:",
            Stage::InvertedSingles => "Inverted vars:",
            Stage::Pairs => "Pairs:",
            Stage::InvertedPairs => "Inverted pairs:",
            Stage::Triples => "Triplets:",
            Stage::InvertedTriples => "Inverted triplets:",
        }
    }

    pub fn cardinality(self) -> usize {
        match self {
            Stage::Singles | Stage::InvertedSingles => 4,
            Stage::Pairs | Stage::InvertedPairs => 6,
            Stage::Triples | Stage::InvertedTriples => 3,
        }
    }

    /// Compute this stage's values.
    pub fn compute(self, inputs: &InputSet, mode: CombinationMode) -> StageResult {
        let v = inputs.as_array();
        let values = match self {
            Stage::Singles => v.to_vec(),
            Stage::InvertedSingles => v.iter().map(|x| !x).collect(),
            Stage::Pairs => PAIR_INDICES.iter().map(|&(i, j)| v[i] && v[j]).collect(),
            Stage::InvertedPairs => mode
                .inverted_pair_indices()
                .iter()
                .map(|&(i, j)| !(v[i] && v[j]))
                .collect(),
            Stage::Triples => TRIPLE_INDICES
                .iter()
                .map(|&(i, j, k)| v[i] && v[j] && v[k])
                .collect(),
            Stage::InvertedTriples => TRIPLE_INDICES
                .iter()
                .map(|&(i, j, k)| !(v[i] && v[j] && v[k]))
                .collect(),
        };
        debug_assert_eq!(values.len(), self.cardinality());
        StageResult {
            stage: self,
            values,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Values produced by one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageResult {
    pub stage: Stage,
    pub values: Vec<bool>,
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
