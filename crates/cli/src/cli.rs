// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::eval::{CombinationMode, InputSet, RevealConfig, parse_bits};

/// Staged boolean combination evaluator with reveal gates
#[derive(Parser)]
#[command(name = "boolgate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "BOOLGATE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate one input combination
    Eval(EvalArgs),
    /// Evaluate all 16 input combinations
    Table(TableArgs),
    /// Write a default boolgate.toml
    Init(InitArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

/// Reveal gate and mode overrides shared by `eval` and `table`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GateArgs {
    /// Reveal flags, one bit per stage (e.g. 110000)
    #[arg(long, value_name = "BITS", value_parser = parse_reveal)]
    pub reveal: Option<RevealConfig>,

    /// Reveal every stage
    #[arg(long, conflicts_with = "reveal")]
    pub reveal_all: bool,

    /// Inverted pairs convention
    #[arg(long, value_enum)]
    pub mode: Option<CombinationMode>,
}

impl GateArgs {
    /// Reveal flags from the command line, if any were given.
    pub fn reveal_override(&self) -> Option<RevealConfig> {
        if self.reveal_all {
            Some(RevealConfig::ALL)
        } else {
            self.reveal
        }
    }

    /// Effective mode and reveal flags: command line over config file.
    pub fn resolve(&self, config: &Config) -> (CombinationMode, RevealConfig) {
        (
            self.mode.unwrap_or(config.eval.mode),
            self.reveal_override().unwrap_or(config.reveal),
        )
    }
}

#[derive(clap::Args)]
pub struct EvalArgs {
    /// Inputs A, B, C, D as four bits (1/0 or t/f)
    #[arg(value_name = "INPUTS", default_value = "1111", value_parser = parse_inputs)]
    pub inputs: InputSet,

    #[command(flatten)]
    pub gates: GateArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Expected returned sequence; exit 1 on mismatch
    #[arg(long, value_name = "BITS", value_parser = parse_expected)]
    pub expect: Option<BitSequence>,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub gates: GateArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing boolgate.toml
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// A returned sequence given on the command line, e.g. `0110` or empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitSequence(pub Vec<bool>);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn parse_inputs(s: &str) -> Result<InputSet, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

fn parse_reveal(s: &str) -> Result<RevealConfig, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

fn parse_expected(s: &str) -> Result<BitSequence, String> {
    parse_bits(s).map(BitSequence).map_err(|e| e.to_string())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
