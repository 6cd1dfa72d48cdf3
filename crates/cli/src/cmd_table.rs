// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Table command implementation.

use boolgate::cli::{Cli, OutputFormat, TableArgs};
use boolgate::color;
use boolgate::discovery;
use boolgate::error::ExitCode;
use boolgate::eval::Evaluator;
use boolgate::output::json::JsonFormatter;
use boolgate::output::text::TextFormatter;
use boolgate::table::sweep;

/// Run the table command.
pub fn run(cli: &Cli, args: &TableArgs) -> anyhow::Result<ExitCode> {
    if args.color && args.no_color {
        eprintln!("--color and --no-color cannot be used together");
        return Ok(ExitCode::ConfigError);
    }

    let cwd = std::env::current_dir()?;
    let config = discovery::load_config(cli.config.as_deref(), &cwd)?;
    let (mode, reveal) = args.gates.resolve(&config);

    let table = sweep(&Evaluator::new(mode), &reveal);

    match args.output {
        OutputFormat::Text => {
            TextFormatter::stdout(color::resolve(args.color, args.no_color))
                .write_table(&table)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write_table(&table)?;
        }
    }

    Ok(ExitCode::Success)
}
