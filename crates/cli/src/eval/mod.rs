// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Staged boolean combination evaluator.
//!
//! Evaluation walks [`Stage::ALL`] in order. Each stage is computed only
//! after every earlier stage was revealed; the first stage whose reveal gate
//! is closed is returned. Revealed stages emit their header and values to a
//! [`LineSink`] before the next stage is computed.

mod inputs;
mod mode;
mod stage;

pub use inputs::{InputSet, RevealConfig, format_bits, parse_bits};
pub use mode::CombinationMode;
pub use stage::{Stage, StageResult};

use std::io;

use serde::Serialize;

use crate::sink::LineSink;

/// Word fragments of the introductory line, emitted in this order.
pub const INTRO_FRAGMENTS: [&str; 7] = [
    "This ",
    "is ",
    "an ",
    "example ",
    "of ",
    "non-maintainable ",
    "function.",
];

/// The introductory line emitted before any stage.
pub fn intro_line() -> String {
    INTRO_FRAGMENTS.concat()
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Stages that were revealed, in order.
    pub revealed: Vec<StageResult>,
    /// The stage evaluation stopped at, or `None` if every stage was revealed.
    pub returned: Option<StageResult>,
}

impl Evaluation {
    /// The returned sequence; empty when every stage was revealed.
    pub fn values(&self) -> &[bool] {
        self.returned
            .as_ref()
            .map(|r| r.values.as_slice())
            .unwrap_or(&[])
    }

    pub fn terminated_at(&self) -> Option<Stage> {
        self.returned.as_ref().map(|r| r.stage)
    }
}

/// Evaluates staged boolean combinations under a fixed [`CombinationMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    mode: CombinationMode,
}

impl Evaluator {
    pub fn new(mode: CombinationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CombinationMode {
        self.mode
    }

    /// Run the evaluation, emitting the intro line and every revealed stage
    /// to `sink`.
    ///
    /// Sink write failures are returned as-is; the evaluation itself cannot
    /// fail.
    pub fn evaluate<S: LineSink + ?Sized>(
        &self,
        inputs: &InputSet,
        reveal: &RevealConfig,
        sink: &mut S,
    ) -> io::Result<Evaluation> {
        sink.emit_line(&intro_line())?;

        let mut revealed = Vec::with_capacity(Stage::ALL.len());
        for stage in Stage::ALL {
            let result = stage.compute(inputs, self.mode);
            tracing::trace!(stage = stage.id(), values = %format_bits(&result.values), "computed");

            if !reveal.is_revealed(stage) {
                tracing::debug!(stage = stage.id(), "gate closed, returning stage");
                return Ok(Evaluation {
                    revealed,
                    returned: Some(result),
                });
            }

            sink.emit_line(stage.header())?;
            for value in &result.values {
                sink.emit_line(&value.to_string())?;
            }
            revealed.push(result);
        }

        tracing::debug!("all stages revealed, returning empty sequence");
        Ok(Evaluation {
            revealed,
            returned: None,
        })
    }

    /// The returned sequence alone. Only the terminating stage is computed
    /// and nothing is emitted.
    pub fn result(&self, inputs: &InputSet, reveal: &RevealConfig) -> Vec<bool> {
        reveal
            .terminating_stage()
            .map(|stage| stage.compute(inputs, self.mode).values)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
