//! # relpack Top-Level Directory Scan
//!
//! File: cli/src/common/fs/scan.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! ## Overview
//!
//! This module enumerates the files that sit directly inside a directory. It is
//! used to discover auxiliary files (README, LICENSE, ...) next to the binary
//! being packaged.
//!
//! ## Architecture
//!
//! The scan is built on `walkdir`:
//! - `min_depth(1)` drops the root directory itself from the results.
//! - `max_depth(1)` keeps the walk from descending, and directory entries
//!   (including symlinks to directories) are dropped, so nothing below the top
//!   level is ever read or yielded.
//! - Entries are sorted by file name, which makes the order stable and
//!   identical between runs on an unchanged directory.
//!
//! The scan is lazy: the returned iterator reads the directory as it is
//! consumed. A traversal failure is yielded as an `Err` carrying
//! `PackError::Scan` and the caller decides whether to stop.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::scan;
//!
//! for candidate in scan::scan_top_level(Path::new(".")) {
//!     let candidate = candidate?;
//!     println!("{} ({})", candidate.name, candidate.extension);
//! }
//! ```
//!
use crate::core::error::{PackError, Result};
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// A file found directly inside the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// File name without any directory prefix.
    pub name: String,
    /// Suffix starting at the last `.` of `name`, or `""` when there is none.
    pub extension: String,
    /// Full path of the entry, rooted at the scanned directory.
    pub path: PathBuf,
}

impl CandidateFile {
    fn from_entry(entry: &DirEntry) -> Self {
        let name = entry.file_name().to_string_lossy().into_owned();
        let extension = split_extension(&name).1.to_string();
        Self {
            name,
            extension,
            path: entry.path().to_path_buf(),
        }
    }
}

/// Splits a file name into `(stem, extension)` at its last `.`.
///
/// The extension keeps its leading dot. A name without a dot has an empty
/// extension, and a dotfile such as `.md` has an empty stem.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

/// Lists the regular (non-directory) entries at the top level of `root`.
///
/// Subdirectories, including symlinks that resolve to directories, are pruned.
/// The root itself is never yielded.
pub fn scan_top_level(root: &Path) -> impl Iterator<Item = Result<CandidateFile>> {
    let root_display = root.display().to_string();
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry_result| match entry_result {
            Ok(entry) if is_directory(&entry) => {
                trace!("Pruned directory: {}", entry.path().display());
                None
            }
            Ok(entry) => {
                trace!("Scanned entry: {}", entry.path().display());
                Some(Ok(CandidateFile::from_entry(&entry)))
            }
            Err(err) => Some(Err(anyhow::Error::new(err).context(PackError::Scan(format!(
                "Failed to read directory '{}'",
                root_display
            ))))),
        })
}

fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}
