//! # relpack Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! ## Overview
//!
//! This module aggregates the command implementations of relpack. The tool has
//! a single operation, packaging, so there is one command module; its argument
//! struct is flattened directly into the top-level CLI in `main.rs`.
//!
//! - `pack`: Builds `<target>.tar.gz` archives with auxiliary files bundled in
//!

/// Packaging of build outputs into gzipped tarballs.
pub mod pack;
