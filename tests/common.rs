#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

/// Empty home directory shared by the CLI tests of one test binary,
/// so a real `~/.mealswipe/mealswipe.conf` never leaks into them
pub fn test_home() -> &'static Path {
    static HOME: OnceLock<TempDir> = OnceLock::new();
    HOME.get_or_init(|| tempfile::tempdir().expect("create test home"))
        .path()
}

pub fn ms() -> Command {
    let mut cmd = cargo_bin_cmd!("mealswipe");
    cmd.env("HOME", test_home()).env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mealswipe.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB in test mode (config file untouched)
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    ms().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// Run a command against `db_path` with UTC grouping and return its stdout
pub fn stdout_of(db_path: &str, args: &[&str]) -> String {
    let mut full = vec!["--db", db_path, "--tz", "utc"];
    full.extend_from_slice(args);

    let out = ms().args(&full).output().expect("failed to run mealswipe");
    assert!(
        out.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).to_string()
}

/// Read a cached scalar straight from the key-value table
pub fn kv_value(db_path: &str, key: &str) -> Option<String> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    mealswipe::db::kv::get_item(&conn, key).expect("read kv")
}
