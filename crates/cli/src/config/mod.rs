// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles boolgate.toml parsing with version validation and unknown key warnings.

mod parse;
mod suggest;

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::eval::{CombinationMode, RevealConfig};
use parse::{parse_eval_config, parse_reveal_config, warn_unknown_key};

pub use suggest::suggest_reveal_key;

/// Config file name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "boolgate.toml";

/// Supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "eval", "reveal"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    eval: Option<toml::Value>,

    #[serde(default)]
    reveal: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Evaluator settings.
    pub eval: EvalConfig,

    /// Reveal gates; unspecified gates are revealed.
    pub reveal: RevealConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            eval: EvalConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

/// `[eval]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalConfig {
    /// Inverted pairs convention (default: "fixture").
    pub mode: CombinationMode,
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let version = check_version(content, path)?;

    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let unknown_keys: BTreeSet<&str> = flexible
        .unknown
        .keys()
        .map(String::as_str)
        .filter(|key| !KNOWN_KEYS.contains(key))
        .collect();
    for key in unknown_keys {
        warn_unknown_key(path, key);
    }

    Ok(Config {
        version,
        eval: parse_eval_config(flexible.eval.as_ref(), path)?,
        reveal: parse_reveal_config(flexible.reveal.as_ref(), path)?,
    })
}

/// Validate the `version` field and return it.
fn check_version(content: &str, path: &Path) -> Result<i64> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade boolgate to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    Ok(version)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
