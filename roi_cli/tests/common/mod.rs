//! Shared test helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get a roi command
pub fn roi() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("roi"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a scenario file into a fresh temp directory
pub fn write_scenario(json: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("scenario.json");
    fs::write(&path, json).unwrap();
    (tmp, path)
}
