//! Common test utilities and helpers

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use ticket_analyzer::config::{ENV_DESTINATION, ENV_ORIGIN, ENV_TICKETS};

/// Path of the shared ticket document under `tests/fixtures`
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("tickets.json")
}

/// Write `content` into a fresh temporary directory and return both
pub fn write_document(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// The analyzer binary, isolated from any `TICKET_ANALYZER_*` variables
pub fn analyzer() -> Command {
    let mut cmd = Command::cargo_bin("ticket-analyzer").unwrap();
    cmd.env_remove(ENV_TICKETS)
        .env_remove(ENV_ORIGIN)
        .env_remove(ENV_DESTINATION)
        .env_remove("RUST_LOG");
    cmd
}
