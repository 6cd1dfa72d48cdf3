// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Eval command implementation.

use boolgate::cli::{Cli, EvalArgs, OutputFormat};
use boolgate::color;
use boolgate::discovery;
use boolgate::error::ExitCode;
use boolgate::eval::{Evaluator, format_bits};
use boolgate::output::json::{EvalOutput, JsonFormatter};
use boolgate::output::text::TextFormatter;

/// Run the eval command.
pub fn run(cli: &Cli, args: &EvalArgs) -> anyhow::Result<ExitCode> {
    if args.color && args.no_color {
        eprintln!("--color and --no-color cannot be used together");
        return Ok(ExitCode::ConfigError);
    }

    let cwd = std::env::current_dir()?;
    let config = discovery::load_config(cli.config.as_deref(), &cwd)?;
    let (mode, reveal) = args.gates.resolve(&config);
    let evaluator = Evaluator::new(mode);

    tracing::debug!(
        inputs = %args.inputs,
        reveal = %reveal,
        mode = mode.as_str(),
        "evaluating"
    );

    let evaluation = match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(color::resolve(args.color, args.no_color));
            let evaluation = evaluator.evaluate(&args.inputs, &reveal, &mut formatter)?;
            formatter.write_result(&evaluation)?;
            evaluation
        }
        OutputFormat::Json => {
            let mut lines: Vec<String> = Vec::new();
            let evaluation = evaluator.evaluate(&args.inputs, &reveal, &mut lines)?;
            let output = EvalOutput::new(args.inputs, mode, reveal, &lines, &evaluation);
            JsonFormatter::new(std::io::stdout().lock()).write_eval(&output)?;
            evaluation
        }
    };

    if let Some(expected) = &args.expect
        && expected.0 != evaluation.values()
    {
        eprintln!(
            "boolgate: result mismatch: expected [{}], got [{}]",
            format_bits(&expected.0),
            format_bits(evaluation.values())
        );
        return Ok(ExitCode::Mismatch);
    }

    Ok(ExitCode::Success)
}
