#![allow(dead_code)]
use std::env;
use std::fs;
use std::path::PathBuf;

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_wardstore.sqlite"));
    fs::remove_file(&path).ok();
    path
}
