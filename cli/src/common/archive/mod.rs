//! # relpack Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! ## Overview
//!
//! This module groups the archive encoders used by relpack. Only one output
//! format is produced, gzip-compressed tar, so the module currently holds a
//! single submodule:
//!
//! - **`tar`**: `TarGzWriter`, a streaming `.tar.gz` writer that stores each
//!   file under a caller-chosen entry name.
//!
//! ```rust
//! use crate::common::archive::tar::{ArchiveEntry, TarGzWriter};
//! ```
//!

pub mod tar;
