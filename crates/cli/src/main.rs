// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Boolgate CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use boolgate::cli::{Cli, Command};
use boolgate::error::ExitCode;

mod cmd_eval;
mod cmd_table;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("BOOLGATE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("boolgate: {}", e);
            match e.downcast_ref::<boolgate::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Eval(args)) => cmd_eval::run(&cli, args),
        Some(Command::Table(args)) => cmd_table::run(&cli, args),
        Some(Command::Init(args)) => boolgate::cmd_init::run(args),
        Some(Command::Completions(args)) => {
            boolgate::completions::write_completions(args.shell, &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
    }
}
