//! # relpack Pack Command
//!
//! File: cli/src/commands/pack/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! ## Overview
//!
//! This module packages build outputs into gzipped tarballs. For every target
//! given on the command line it produces `<target>.tar.gz` containing:
//! - the target file itself, and
//! - every auxiliary file (README, LICENSE, ...) at the top level of the
//!   working directory.
//!
//! Files following the `{project}_{os}_{arch}` naming template of
//! cross-compiling build tools are stored under their project name, so
//! `myapp_windows_amd64.exe` is extracted as `myapp`.
//!
//! ## Architecture
//!
//! The module is organized into two helper submodules:
//! - `auxiliary.rs`: Decides which scanned files are auxiliary files
//! - `normalize.rs`: Computes the archive name of a build artifact
//!
//! Each target moves through the same stages:
//! 1. Open: create `<target>.tar.gz` and the gzip/tar layers on top of it
//! 2. Write: scan for auxiliary files and append the target plus matches, in order
//! 3. Finalize: close the tar, gzip and file layers in reverse order
//!
//! Finalization runs even when the write stage fails; the first error is then
//! reported and no further targets are processed. Files in the working
//! directory are only ever read.
//!
//! ## Examples
//!
//! ```bash
//! # Package a single binary with its README and LICENSE
//! relpack myapp_linux_amd64
//!
//! # Package several cross-compiled outputs, one archive each
//! relpack myapp_linux_amd64 myapp_darwin_amd64 myapp_windows_amd64.exe
//! ```
//!
use crate::common::archive::tar::{ArchiveEntry, TarGzWriter};
use crate::core::config::{self, Config, PlatformConfig};
use crate::core::error::{PackError, Result};
use anyhow::anyhow;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Decides which scanned files are bundled as auxiliary files.
pub mod auxiliary;

/// Computes the archive entry name of cross-compiled build artifacts.
pub mod normalize;

/// Arguments for packaging.
#[derive(Args, Debug)]
pub struct PackArgs {
    /// Files to package; each one produces `<TARGET>.tar.gz`.
    #[arg(required = true, value_name = "TARGET")]
    pub targets: Vec<String>,
}

/// # Handle Pack Command (`handle_pack`)
///
/// Loads the configuration once and packages every target sequentially,
/// relative to `root` (the working directory in normal use).
///
/// ## Errors
///
/// Returns the first error encountered; later targets are not attempted.
pub fn handle_pack(args: PackArgs, root: &Path) -> Result<()> {
    info!(
        "Packaging {} target(s) in {}",
        args.targets.len(),
        root.display()
    );
    let config = config::load_config(root)?;

    for target in &args.targets {
        // Print for users.
        println!("{target}.tar.gz");
        let output = pack_target(root, target, &config)?;
        info!("Created {}", output.display());
    }
    Ok(())
}

/// Packages one target into `<root>/<target>.tar.gz` and returns the archive path.
pub fn pack_target(root: &Path, target: &str, config: &Config) -> Result<PathBuf> {
    let output = root.join(format!("{target}.tar.gz"));
    let mut writer = TarGzWriter::create(&output)?;

    let written = collect_entries(root, target, config)
        .and_then(|entries| entries.iter().try_for_each(|entry| writer.append_file(entry)));
    let entry_count = writer.entries();
    let finished = writer.finish();

    match (written, finished) {
        (Ok(()), finished) => {
            debug!("Wrote {} entries for target '{}'", entry_count, target);
            finished
        }
        (Err(err), Ok(_)) => Err(err),
        (Err(err), Err(finish_err)) => {
            warn!(
                "Could not finalize '{}' after a failed write: {:#}",
                output.display(),
                finish_err
            );
            Err(err)
        }
    }
}

/// Builds the ordered entry list for `target`: the target first, then the auxiliary files.
///
/// An auxiliary file whose entry name equals the target's entry name is left
/// out, so the target is never shadowed by a second entry of the same name.
pub fn collect_entries(root: &Path, target: &str, config: &Config) -> Result<Vec<ArchiveEntry>> {
    let target_entry = entry_for(&root.join(target), &config.platforms)?;
    let mut entries = Vec::new();

    for candidate in auxiliary::select_auxiliaries(root, &config.auxiliary)? {
        let entry = entry_for(&candidate.path, &config.platforms)?;
        if entry.name == target_entry.name {
            debug!(
                "Skipping '{}': its entry name '{}' is taken by the target",
                candidate.path.display(),
                entry.name
            );
            continue;
        }
        entries.push(entry);
    }
    entries.insert(0, target_entry);
    Ok(entries)
}

/// Pairs a source path with the (possibly normalized) base name it is stored under.
fn entry_for(source: &Path, platforms: &PlatformConfig) -> Result<ArchiveEntry> {
    let file_name = source.file_name().ok_or_else(|| {
        anyhow!(PackError::FileSystem(format!(
            "'{}' does not name a file",
            source.display()
        )))
    })?;
    let file_name = file_name.to_string_lossy();
    let name = normalize::canonical_name(&file_name, platforms);
    if name != file_name {
        info!("Storing '{}' as '{}'", file_name, name);
    }
    Ok(ArchiveEntry::new(source, name))
}
