//! # relpack Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by every packaging stage:
//! - `config`: Recognition tables (auxiliary names, platform tokens) and `.relpack.toml` loading
//! - `error`: Error kinds and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{PackError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
