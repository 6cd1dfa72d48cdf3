// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `boolgate init` command.

use std::path::Path;

use anyhow::Result;

use crate::cli::InitArgs;
use crate::config::CONFIG_FILE_NAME;
use crate::error::ExitCode;

/// Default boolgate.toml written by `init`.
pub fn default_config() -> &'static str {
    r#"version = 1

[eval]
# "fixture" repeats not(B and C) in the fifth inverted pair.
# "corrected" uses not(B and D) there instead.
mode = "fixture"

# Evaluation stops at the first closed gate and returns that stage.
[reveal]
singles = true
inverted_singles = true
pairs = true
inverted_pairs = true
triples = true
inverted_triples = true
"#
}

/// Run the `init` command to create a boolgate.toml configuration file.
pub fn run(args: &InitArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    init_in(&cwd, args.force)
}

/// Write the default config into `dir`.
pub fn init_in(dir: &Path, force: bool) -> Result<ExitCode> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        eprintln!("{} already exists. Use --force to overwrite.", CONFIG_FILE_NAME);
        return Ok(ExitCode::ConfigError);
    }

    std::fs::write(&config_path, default_config())?;
    tracing::debug!("wrote {}", config_path.display());
    println!("Created {}", CONFIG_FILE_NAME);

    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
