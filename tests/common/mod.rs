#![allow(dead_code)]

use std::{io::Write, path::PathBuf, sync::Mutex};

use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Writes `contents` to `name` inside a fresh temp directory.
pub fn write_file(name: &str, contents: &str) -> PathBuf {
    let path = temp_home().join(name);
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(contents.as_bytes()).expect("write file");
    path
}

pub fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}
