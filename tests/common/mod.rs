#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use assert_cmd::Command;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory for one test's database and config.
pub fn scratch_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// `earnings` binary pointed at a private database and config directory.
pub fn earnings_cmd(base: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("earnings").expect("earnings binary");
    cmd.env("EARNINGS_DATABASE", base.join("earnings.db"))
        .env("EARNINGS_CONFIG_DIR", base.join("config"))
        .env_remove("EARNINGS_BIND")
        .env_remove("EARNINGS_LOG")
        .env_remove("RUST_LOG");
    cmd
}
