//! Fixture loader and builders for idproof integration tests.
//!
//! Provides journey-definition fixtures plus typed builders for sessions,
//! evidence, credentials, and risk signals used across crates.

pub mod builders;
pub mod stores;

use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find the
    // test-fixtures directory.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() && !path.join("crates/test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    if path.join("crates/test-fixtures").exists() {
        path.join("crates/test-fixtures/fixtures")
    } else {
        path.join("test-fixtures/fixtures")
    }
}

/// Load a fixture file as a string.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_fixture_str(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}
