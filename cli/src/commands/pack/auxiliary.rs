//! # Auxiliary File Selection
//!
//! File: cli/src/commands/pack/auxiliary.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! Decides which files next to a packaged binary ride along in its archive.
//! A file qualifies when its extension is one of the allowed extensions
//! (exact match, `""` meaning "no extension") and its extension-stripped name,
//! lower-cased, is one of the recognized auxiliary names. With the default
//! tables that admits `README`, `readme.md`, `License.txt` and so on, but not
//! `README.rst`, `readme.MD` or `my-readme.md`.
//!
use crate::common::fs::scan::{scan_top_level, split_extension, CandidateFile};
use crate::core::config::AuxiliaryConfig;
use crate::core::error::Result;
use std::path::Path;
use tracing::debug;

/// Returns `true` if a file called `name` should be bundled automatically.
pub fn is_auxiliary(name: &str, config: &AuxiliaryConfig) -> bool {
    let (stem, extension) = split_extension(name);
    config.extensions.contains(extension) && config.names.contains(stem.to_lowercase().as_str())
}

/// # Select Auxiliary Files (`select_auxiliaries`)
///
/// Scans the top level of `root` and keeps every file accepted by
/// `is_auxiliary`, in scan order (sorted by file name). Subdirectories are
/// never searched.
///
/// Selection does not know about the archive target; the pack driver drops any
/// auxiliary file whose entry name collides with the target's.
///
/// ## Arguments
///
/// * `root` - The directory to scan, normally the working directory.
/// * `config` - The recognized auxiliary names and extensions.
///
/// ## Returns
///
/// * `Result<Vec<CandidateFile>>` - The matching files.
///
/// ## Errors
///
/// Returns the first scan error (`PackError::Scan`); no partial list is returned.
pub fn select_auxiliaries(root: &Path, config: &AuxiliaryConfig) -> Result<Vec<CandidateFile>> {
    let mut selected = Vec::new();
    for candidate in scan_top_level(root) {
        let candidate = candidate?;
        if is_auxiliary(&candidate.name, config) {
            debug!("Selected auxiliary file '{}'", candidate.name);
            selected.push(candidate);
        }
    }
    Ok(selected)
}
