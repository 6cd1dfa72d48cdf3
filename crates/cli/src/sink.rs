// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line sinks for evaluator output.
//!
//! The evaluator never prints directly. Everything it reports goes through a
//! [`LineSink`], so callers decide whether lines land on a terminal, in a
//! buffer, or nowhere.

use std::io::{self, Write};

/// Destination for line-oriented evaluator output.
pub trait LineSink {
    /// Emit one line (without trailing newline).
    fn emit_line(&mut self, line: &str) -> io::Result<()>;
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        (**self).emit_line(line)
    }
}

/// Captures lines in memory.
impl LineSink for Vec<String> {
    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Discards every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LineSink for NullSink {
    fn emit_line(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Writes each line, newline-terminated, to an `io::Write`.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
