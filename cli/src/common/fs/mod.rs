//! # relpack Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! ## Overview
//!
//! Filesystem helpers shared by the packaging command. Functionality is
//! delegated to submodules:
//!
//! - **`scan`**: Lists the files at the top level of a directory (no recursion),
//!   in a stable order. Used to find auxiliary files next to a packaged binary.
//!

/// Top-level directory scanning (`scan_top_level`, `CandidateFile`).
pub mod scan;
