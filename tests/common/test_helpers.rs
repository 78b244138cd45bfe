//! Helper functions for integration tests

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write CSV content into a temp directory and return the file path
pub fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

/// Relative error between a computed and an expected value
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    }
}
