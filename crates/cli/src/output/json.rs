// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use crate::eval::{
    CombinationMode, Evaluation, InputSet, RevealConfig, Stage, StageResult, format_bits,
};
use crate::table::{Table, TableRow};

/// A single evaluation, including the captured evaluator lines.
#[derive(Debug, Serialize)]
pub struct EvalOutput<'a> {
    pub inputs: InputSet,
    pub mode: CombinationMode,
    pub reveal: RevealConfig,
    pub lines: &'a [String],
    pub revealed: &'a [StageResult],
    pub terminated_at: Option<Stage>,
    pub result: &'a [bool],
}

impl<'a> EvalOutput<'a> {
    pub fn new(
        inputs: InputSet,
        mode: CombinationMode,
        reveal: RevealConfig,
        lines: &'a [String],
        evaluation: &'a Evaluation,
    ) -> Self {
        Self {
            inputs,
            mode,
            reveal,
            lines,
            revealed: &evaluation.revealed,
            terminated_at: evaluation.terminated_at(),
            result: evaluation.values(),
        }
    }
}

/// Truth table for JSON output.
#[derive(Debug, Serialize)]
pub struct TableOutput<'a> {
    pub mode: CombinationMode,
    pub reveal: RevealConfig,
    pub rows: Vec<TableRowOutput<'a>>,
}

/// Table row for JSON output; inputs as a bitstring.
#[derive(Debug, Serialize)]
pub struct TableRowOutput<'a> {
    pub inputs: String,
    pub terminated_at: Option<Stage>,
    pub result: &'a [bool],
}

impl<'a> From<&'a TableRow> for TableRowOutput<'a> {
    fn from(row: &'a TableRow) -> Self {
        Self {
            inputs: format_bits(&row.inputs.as_array()),
            terminated_at: row.terminated_at,
            result: &row.result,
        }
    }
}

impl<'a> From<&'a Table> for TableOutput<'a> {
    fn from(table: &'a Table) -> Self {
        Self {
            mode: table.mode,
            reveal: table.reveal,
            rows: table.rows.iter().map(Into::into).collect(),
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write one evaluation.
    pub fn write_eval(&mut self, output: &EvalOutput<'_>) -> std::io::Result<()> {
        self.write_value(output)
    }

    /// Write a truth table.
    pub fn write_table(&mut self, table: &Table) -> std::io::Result<()> {
        self.write_value(&TableOutput::from(table))
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
