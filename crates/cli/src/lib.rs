pub mod cli;
pub mod cmd_init;
pub mod color;
pub mod completions;
pub mod config;
pub mod discovery;
pub mod error;
pub mod eval;
pub mod output;
pub mod sink;
pub mod table;

pub use cli::{Cli, Command, EvalArgs, InitArgs, OutputFormat, TableArgs};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use eval::{
    CombinationMode, Evaluation, Evaluator, InputSet, RevealConfig, Stage, StageResult,
};
pub use sink::{LineSink, NullSink, WriterSink};
pub use table::{Table, TableRow, sweep};

#[cfg(test)]
pub mod test_utils;
