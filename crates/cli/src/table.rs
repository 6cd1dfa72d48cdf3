// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Truth table sweep over every input combination.

use crate::eval::{CombinationMode, Evaluator, InputSet, RevealConfig, Stage};

/// One input combination and what evaluation returned for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub inputs: InputSet,
    pub terminated_at: Option<Stage>,
    pub result: Vec<bool>,
}

/// Results for all 16 input combinations under one reveal config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub mode: CombinationMode,
    pub reveal: RevealConfig,
    pub rows: Vec<TableRow>,
}

/// Evaluate every input combination, `0000` first.
pub fn sweep(evaluator: &Evaluator, reveal: &RevealConfig) -> Table {
    let terminated_at = reveal.terminating_stage();
    let rows = InputSet::all()
        .map(|inputs| TableRow {
            inputs,
            terminated_at,
            result: evaluator.result(&inputs, reveal),
        })
        .collect();

    tracing::debug!(
        mode = evaluator.mode().as_str(),
        reveal = %reveal,
        "swept all input combinations"
    );

    Table {
        mode: evaluator.mode(),
        reveal: *reveal,
        rows,
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
