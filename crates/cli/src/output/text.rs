// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Streams evaluator lines as they are emitted, then a summary:
//! ```text
//! This is an example of non-maintainable function.
//! Vars:
//! true
//! ...
//! result: <stage-id> [<v1>, <v2>, ...]
//! ```

use std::io;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::color::scheme;
use crate::eval::{Evaluation, Stage, format_bits, intro_line};
use crate::sink::LineSink;
use crate::table::Table;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor = StandardStream> {
    out: W,
    intro: String,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            intro: intro_line(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_styled(&mut self, spec: &ColorSpec, text: &str) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    /// Write the summary line for an evaluation.
    pub fn write_result(&mut self, evaluation: &Evaluation) -> io::Result<()> {
        write!(self.out, "result: ")?;
        let stage = evaluation.terminated_at().map_or("none", Stage::id);
        self.write_styled(&scheme::stage(), stage)?;
        write!(self.out, " [")?;
        for (i, value) in evaluation.values().iter().enumerate() {
            if i > 0 {
                write!(self.out, ", ")?;
            }
            self.write_value(*value)?;
        }
        writeln!(self.out, "]")?;
        self.out.flush()
    }

    /// Write a truth table, one row per input combination.
    pub fn write_table(&mut self, table: &Table) -> io::Result<()> {
        let width = Stage::ALL
            .iter()
            .map(|s| s.id().len())
            .max()
            .unwrap_or_default();

        self.out.set_color(&scheme::header())?;
        write!(self.out, "ABCD  {:<width$}  result", "stage")?;
        self.out.reset()?;
        writeln!(self.out)?;

        for row in &table.rows {
            write!(self.out, "{}  ", row.inputs)?;
            let stage = row.terminated_at.map_or("-", Stage::id);
            self.write_styled(&scheme::stage(), &format!("{:<width$}", stage))?;
            writeln!(self.out, "  {}", format_bits(&row.result))?;
        }
        self.out.flush()
    }

    fn write_value(&mut self, value: bool) -> io::Result<()> {
        let spec = if value {
            scheme::true_value()
        } else {
            scheme::false_value()
        };
        self.write_styled(&spec, if value { "true" } else { "false" })
    }
}

impl<W: WriteColor> LineSink for TextFormatter<W> {
    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        match line {
            "true" => self.write_value(true)?,
            "false" => self.write_value(false)?,
            _ if line == self.intro => self.write_styled(&scheme::intro(), line)?,
            _ if Stage::ALL.iter().any(|s| s.header() == line) => {
                self.write_styled(&scheme::header(), line)?
            }
            _ => write!(self.out, "{}", line)?,
        }
        writeln!(self.out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
