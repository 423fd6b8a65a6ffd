//! # relpack Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`: locating the
//! compiled binary, preparing an isolated working directory, and reading
//! produced archives back.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tar::Archive;
use tempfile::TempDir;

/// Creates an `assert_cmd::Command` for the compiled `relpack` binary, with
/// `RUST_LOG` cleared so log output does not depend on the caller's shell.
///
/// ## Panics
/// Panics if the `relpack` binary cannot be found via `Command::cargo_bin`.
pub fn relpack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("relpack").expect("Failed to find relpack binary for testing");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Creates a temporary working directory populated with `files`.
///
/// A `.git` directory is added so `.relpack.toml` discovery never escapes the
/// temporary directory.
pub fn workdir_with(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write fixture file");
    }
    dir
}

/// Reads a `.tar.gz` back as `(entry name, content)` pairs, in archive order.
pub fn read_archive(path: &Path) -> Vec<(String, String)> {
    let file = File::open(path).expect("Failed to open archive");
    let mut archive = Archive::new(GzDecoder::new(file));
    archive
        .entries()
        .expect("Failed to read archive entries")
        .map(|entry_result| {
            let mut entry = entry_result.expect("Corrupt archive entry");
            let name = entry
                .path()
                .expect("Invalid entry path")
                .to_string_lossy()
                .into_owned();
            let mut content = String::new();
            entry
                .read_to_string(&mut content)
                .expect("Failed to read entry content");
            (name, content)
        })
        .collect()
}

/// Entry names of an archive, in order.
pub fn archive_names(path: &Path) -> Vec<String> {
    read_archive(path).into_iter().map(|(name, _)| name).collect()
}
