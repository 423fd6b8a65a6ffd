//! # relpack Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! ## Overview
//!
//! This module is the root for utilities that are not specific to a single
//! command: archive encoding and filesystem traversal. Command logic lives in
//! `commands::`, infrastructure in `core::`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{archive, fs};
//!
//! let mut writer = archive::tar::TarGzWriter::create(Path::new("app.tar.gz"))?;
//! for candidate in fs::scan::scan_top_level(Path::new(".")) { /* ... */ }
//! ```
//!

/// Utilities for writing archive files (gzipped tarballs).
pub mod archive;
/// Utilities for filesystem traversal.
pub mod fs;
