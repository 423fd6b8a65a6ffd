//! # relpack Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! ## Overview
//!
//! This file serves as the main entry point for the relpack CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the pack command against the current working directory
//! - Turning any error into a message on stderr and a non-zero exit status
//!
//! ## Examples
//!
//! ```bash
//! # Produce myapp_linux_amd64.tar.gz with README/LICENSE bundled in
//! relpack myapp_linux_amd64
//!
//! # Same, with per-entry logging
//! relpack -vv myapp_linux_amd64 myapp_windows_amd64.exe
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Package each target in order
//! 4. Format and display any error that occurs, then exit with status 1
//!
use anyhow::Context;
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command logic (pack)
mod common; // Shared utilities (archive, fs)
mod core; // Core infrastructure (errors, config)

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "relpack",
    about = "Package build outputs into .tar.gz archives",
    long_about = "Creates <TARGET>.tar.gz for every TARGET, bundling README and LICENSE files\n\
                  from the working directory. Cross-compiled binaries named\n\
                  {project}_{os}_{arch} are stored under their project name.",
    version
)]
struct Cli {
    #[command(flatten)]
    pack: commands::pack::PackArgs,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = std::env::current_dir()
        .context("Failed to determine the current working directory")
        .and_then(|root| commands::pack::handle_pack(cli.pack, &root));

    if let Err(e) = command_result {
        tracing::error!("Packaging failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
