//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing boolgate CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// The introductory line printed before any stage.
pub const INTRO: &str = "This is an example of non-maintainable function.";

/// Returns a Command configured to run the boolgate binary
pub fn boolgate_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("boolgate"));
    // Keep specs independent of the caller's environment.
    cmd.env_remove("BOOLGATE_CONFIG")
        .env_remove("BOOLGATE_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// Create an eval builder for the given input bits
pub fn eval(inputs: &str) -> RunBuilder {
    RunBuilder::new(["eval", inputs])
}

/// Create a table builder
pub fn table() -> RunBuilder {
    RunBuilder::new(["table"])
}

/// Fluent builder for a single boolgate invocation
pub struct RunBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    dir: Option<PathBuf>,
}

impl RunBuilder {
    fn new<const N: usize>(args: [&str; N]) -> Self {
        Self {
            args: args.iter().map(|s| s.to_string()).collect(),
            envs: Vec::new(),
            dir: None,
        }
    }

    /// Set reveal flags (`--reveal BITS`)
    pub fn reveal(self, bits: &str) -> Self {
        self.args(&["--reveal", bits])
    }

    /// Set combination mode (`--mode MODE`)
    pub fn mode(self, mode: &str) -> Self {
        self.args(&["--mode", mode])
    }

    /// Request JSON output
    pub fn json(self) -> Self {
        self.args(&["-o", "json"])
    }

    /// Add extra arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set an environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Run from this directory
    pub fn pwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Run and expect exit code 0
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and expect a specific exit code
    pub fn exits(self, code: i32) -> RunAssert {
        // Default to an isolated directory so no stray boolgate.toml is picked up.
        let scratch = isolated_dir();
        let dir = self.dir.clone().unwrap_or_else(|| scratch.path().to_path_buf());
        let output = self
            .command(&dir)
            .output()
            .expect("command should run");
        assert_eq!(
            output.status.code(),
            Some(code),
            "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
            code,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    fn command(&self, dir: &Path) -> Command {
        let mut cmd = boolgate_cmd();
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.current_dir(dir);
        cmd
    }
}

/// Result of a completed invocation
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Stdout lines, trailing newline dropped
    pub fn lines(&self) -> Vec<String> {
        self.stdout().lines().map(String::from).collect()
    }

    /// Assert stdout equals `expected` exactly
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    /// Assert stdout contains `needle`
    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(needle),
            "expected stdout to contain {:?}\nstdout: {}",
            needle,
            stdout
        );
        self
    }

    /// Assert stdout does not contain `needle`
    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(needle),
            "expected stdout not to contain {:?}\nstdout: {}",
            needle,
            stdout
        );
        self
    }

    /// Assert stderr contains `needle`
    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(needle),
            "expected stderr to contain {:?}\nstderr: {}",
            needle,
            stderr
        );
        self
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).expect("stdout should be valid JSON")
    }
}

/// A temp directory that stops config discovery at its root.
pub fn isolated_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Temporary project directory with a boolgate.toml.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Create an empty project (no config)
    pub fn empty() -> Self {
        Self {
            dir: isolated_dir(),
        }
    }

    /// Create a project whose config body follows `version = 1`
    pub fn with_config(body: &str) -> Self {
        let project = Self::empty();
        project.file("boolgate.toml", &format!("version = 1\n{}", body));
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }
}
