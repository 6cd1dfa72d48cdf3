// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reveal key suggestions for config validation.

use std::path::Path;

use crate::eval::RevealConfig;

/// Suggest a reveal key for a typo.
pub fn suggest_reveal_key(unknown: &str) -> Option<&'static str> {
    if unknown.is_empty() {
        return None;
    }

    // Header names and common variations
    let normalized = unknown.to_ascii_lowercase().replace(['-', ' '], "_");
    let suggestion = match normalized.as_str() {
        "vars" | "var" | "single" | "inputs" => Some("singles"),
        "inverted_vars" | "inverted_var" | "inverted_single" | "not_singles" => {
            Some("inverted_singles")
        }
        "pair" => Some("pairs"),
        "inverted_pair" | "not_pairs" => Some("inverted_pairs"),
        "triplets" | "triplet" | "triple" => Some("triples"),
        "inverted_triplets" | "inverted_triplet" | "inverted_triple" | "not_triples" => {
            Some("inverted_triples")
        }
        _ => None,
    };

    if suggestion.is_some() {
        return suggestion;
    }

    // Prefix matching (require at least 2 chars to avoid false positives)
    if normalized.len() >= 2 {
        for name in RevealConfig::KEYS {
            if name.starts_with(&normalized) || normalized.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

/// Warn about unknown reveal key with suggestion.
pub(super) fn warn_unknown_reveal_key(path: &Path, key: &str) {
    if let Some(suggested) = suggest_reveal_key(key) {
        eprintln!(
            "boolgate: warning: {}: unrecognized field `reveal.{}` (ignored). Did you mean `{}`?",
            path.display(),
            key,
            suggested
        );
    } else {
        eprintln!(
            "boolgate: warning: {}: unrecognized field `reveal.{}` (ignored)\n  Valid gates: {}",
            path.display(),
            key,
            RevealConfig::KEYS.join(", ")
        );
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
