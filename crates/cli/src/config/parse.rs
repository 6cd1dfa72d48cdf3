// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;

use clap::ValueEnum;

use super::EvalConfig;
use super::suggest::warn_unknown_reveal_key;
use crate::error::{Error, Result};
use crate::eval::{CombinationMode, RevealConfig, Stage};

/// Known keys in the `[eval]` section.
const KNOWN_EVAL_KEYS: &[&str] = &["mode"];

/// Warn about an unrecognized config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "boolgate: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

fn invalid(path: &Path, message: String) -> Error {
    Error::Config {
        message,
        path: Some(path.to_path_buf()),
    }
}

/// Parse `[eval]` from a TOML value.
pub(super) fn parse_eval_config(value: Option<&toml::Value>, path: &Path) -> Result<EvalConfig> {
    let Some(value) = value else {
        return Ok(EvalConfig::default());
    };
    let toml::Value::Table(t) = value else {
        return Err(invalid(path, "`eval` must be a table".to_string()));
    };

    for key in t.keys() {
        if !KNOWN_EVAL_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("eval.{}", key));
        }
    }

    let mode = match t.get("mode") {
        None => CombinationMode::default(),
        Some(value @ toml::Value::String(s)) => {
            value.clone().try_into::<CombinationMode>().map_err(|_| {
                let expected: Vec<String> = CombinationMode::value_variants()
                    .iter()
                    .map(|m| format!("\"{}\"", m.as_str()))
                    .collect();
                invalid(
                    path,
                    format!(
                        "invalid eval.mode `{}` (expected {})",
                        s,
                        expected.join(" or ")
                    ),
                )
            })?
        }
        Some(_) => return Err(invalid(path, "eval.mode must be a string".to_string())),
    };

    Ok(EvalConfig { mode })
}

/// Parse `[reveal]` from a TOML value. Missing gates stay revealed.
pub(super) fn parse_reveal_config(
    value: Option<&toml::Value>,
    path: &Path,
) -> Result<RevealConfig> {
    let Some(value) = value else {
        return Ok(RevealConfig::default());
    };
    let toml::Value::Table(t) = value else {
        return Err(invalid(path, "`reveal` must be a table".to_string()));
    };

    let mut flags = RevealConfig::default().as_flags();
    for (key, v) in t {
        let Some(index) = RevealConfig::KEYS.iter().position(|k| k == key) else {
            warn_unknown_reveal_key(path, key);
            continue;
        };
        match v.as_bool() {
            Some(flag) => flags[index] = flag,
            None => {
                return Err(invalid(
                    path,
                    format!("reveal.{} must be a boolean", key),
                ));
            }
        }
    }

    let reveal = RevealConfig::from_flags(flags);
    if let Some(stage) = reveal.terminating_stage()
        && stage != Stage::InvertedTriples
    {
        // Gates after the first closed one are never consulted.
        let ignored: Vec<&str> = Stage::ALL
            .iter()
            .zip(RevealConfig::KEYS)
            .filter(|(s, _)| **s > stage)
            .filter(|(_, k)| t.contains_key(*k))
            .map(|(_, k)| k)
            .collect();
        if !ignored.is_empty() {
            tracing::debug!(
                "{}: reveal.{} is closed; later gates have no effect: {}",
                path.display(),
                RevealConfig::KEYS[stage as usize],
                ignored.join(", ")
            );
        }
    }

    Ok(reveal)
}
