// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Combination modes for the inverted pairs stage.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Input index pairs in pairs-stage order: AB, AC, AD, BC, BD, CD.
pub(super) const PAIR_INDICES: [(usize, usize); 6] =
    [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Fixture ordering: the fifth slot repeats B∧C instead of B∧D.
const FIXTURE_INVERTED_PAIR_INDICES: [(usize, usize); 6] =
    [(0, 1), (0, 2), (0, 3), (1, 2), (1, 2), (2, 3)];

/// How the inverted pairs stage is built.
///
/// The reference fixture negates B∧C twice and never produces ¬(B∧D).
/// `Fixture` matches the fixture's printed layout, with ¬(B∧C) in the fourth
/// and fifth slots. `Corrected` negates every pair in order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CombinationMode {
    /// Reproduce the fixture: `¬(B∧C)` in both the fourth and fifth slot.
    #[default]
    Fixture,
    /// Negate each pair in order: the fifth slot is `¬(B∧D)`.
    Corrected,
}

impl CombinationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CombinationMode::Fixture => "fixture",
            CombinationMode::Corrected => "corrected",
        }
    }

    pub(super) fn inverted_pair_indices(self) -> &'static [(usize, usize); 6] {
        match self {
            CombinationMode::Fixture => &FIXTURE_INVERTED_PAIR_INDICES,
            CombinationMode::Corrected => &PAIR_INDICES,
        }
    }
}

impl fmt::Display for CombinationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
