//! # Flood Alert CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and uses what it needs.
//!
//! Commands are run inside a temporary directory with `HOME` and
//! `XDG_CONFIG_HOME` pointed at it, so no user or project configuration from
//! the machine running the tests leaks in.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A decision stump: flood when rainfall is above 120 mm.
pub const STUMP_MODEL: &str = r#"{
    "kind": "decision_tree",
    "features": ["rainfall", "temperature", "humidity"],
    "feature": [0, -2, -2],
    "threshold": [120.0, -2.0, -2.0],
    "children_left": [1, -1, -1],
    "children_right": [2, -1, -1],
    "class": [-1, 0, 1]
}"#;

/// # Get Flood Alert Command (`floodalert_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `floodalert` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn floodalert_cmd() -> Command {
    Command::cargo_bin("floodalert").expect("Failed to find floodalert binary for testing")
}

/// Like `floodalert_cmd`, but isolated inside `dir`.
pub fn floodalert_in(dir: &Path) -> Command {
    let mut cmd = floodalert_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// A temp directory holding `flood_model.json` with the stump model.
pub fn workspace_with_model() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_file(dir.path(), "flood_model.json", STUMP_MODEL);
    dir
}
