//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use tempfile::TempDir;

use crate::config::CONFIG_FILE_NAME;

/// Creates an empty temp directory.
pub fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Creates a temp directory with a minimal boolgate.toml.
pub fn temp_project() -> TempDir {
    temp_project_with_config("version = 1\n")
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = temp_dir();
    fs::write(dir.path().join(CONFIG_FILE_NAME), config).unwrap();
    dir
}
