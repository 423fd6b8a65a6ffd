//! # relpack TAR Archive Writer (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! ## Overview
//!
//! This module writes gzipped tarballs (`.tar.gz`) straight to disk, one file
//! entry at a time. Each entry is stored under a caller-chosen name, which lets
//! the packaging step publish a binary under its normalized name without
//! renaming anything in the working directory.
//!
//! ## Architecture
//!
//! The writer leverages the `tar` crate for the container structure and the
//! `flate2` crate for Gzip compression, stacked on the output file:
//!
//! ```text
//! tar::Builder -> flate2::write::GzEncoder -> std::fs::File
//! ```
//!
//! - `TarGzWriter::create` acquires the stack bottom-up (file, encoder, builder).
//! - `TarGzWriter::append_file` builds a GNU header from the source file's
//!   metadata (size, mode, mtime) and streams the content into the archive.
//! - `TarGzWriter::finish` releases the stack top-down: the tar trailer is
//!   written, then the gzip footer, then the file is flushed.
//!
//! Callers should invoke `finish` even after an `append_file` failure so the
//! entries written so far end up in a well-formed archive.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::tar::{ArchiveEntry, TarGzWriter};
//!
//! let mut writer = TarGzWriter::create(Path::new("app.tar.gz"))?;
//! writer.append_file(&ArchiveEntry::new("app_linux_amd64", "app"))?;
//! let output = writer.finish()?;
//! ```
//!
use crate::core::error::{PackError, Result};
use anyhow::{bail, Context};
use flate2::{write::GzEncoder, Compression};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tar::{Header, HeaderMode};
use tracing::debug;

/// A single file destined for the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Where the bytes are read from.
    pub source: PathBuf,
    /// Name recorded in the entry header (base name, no directory prefix).
    pub name: String,
}

impl ArchiveEntry {
    pub fn new(source: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
        }
    }
}

/// Streaming writer for a single `.tar.gz` output file.
pub struct TarGzWriter {
    builder: tar::Builder<GzEncoder<File>>,
    path: PathBuf,
    entries: usize,
}

impl TarGzWriter {
    /// # Create Archive (`TarGzWriter::create`)
    ///
    /// Creates (or truncates) the archive at `path` and opens the gzip and tar
    /// layers on top of it. Nothing is written until the first entry is appended.
    ///
    /// ## Arguments
    ///
    /// * `path` - Output path, conventionally ending in `.tar.gz`. Its parent
    ///            directory must already exist.
    ///
    /// ## Returns
    ///
    /// * `Result<TarGzWriter>` - A writer ready for `append_file`.
    ///
    /// ## Errors
    ///
    /// Returns `PackError::FileSystem` if the output file cannot be created.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).with_context(|| {
            PackError::FileSystem(format!("Failed to create archive '{}'", path.display()))
        })?;
        // Wrap the output file with a Gzip encoder using default compression level.
        let encoder = GzEncoder::new(file, Compression::default());
        let builder = tar::Builder::new(encoder);
        debug!("Opened archive for writing: {}", path.display());
        Ok(Self {
            builder,
            path: path.to_path_buf(),
            entries: 0,
        })
    }

    /// Number of entries appended so far.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Appends one regular file, stored under `entry.name`.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if:
    /// - The source cannot be opened or its metadata read (`PackError::FileSystem`).
    /// - The source is not a regular file, e.g. a directory (`PackError::FileSystem`).
    /// - Writing the header or content fails (`PackError::Encoding`).
    pub fn append_file(&mut self, entry: &ArchiveEntry) -> Result<()> {
        let source = &entry.source;
        let file = File::open(source).with_context(|| {
            PackError::FileSystem(format!("Failed to open '{}'", source.display()))
        })?;
        let metadata = file.metadata().with_context(|| {
            PackError::FileSystem(format!("Failed to stat '{}'", source.display()))
        })?;
        if !metadata.is_file() {
            bail!(PackError::FileSystem(format!(
                "'{}' is not a regular file",
                source.display()
            )));
        }

        let mut header = Header::new_gnu();
        header.set_metadata_in_mode(&metadata, HeaderMode::Complete);
        // Keep permission bits only; the file type lives in the entry type field.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            header.set_mode(metadata.permissions().mode() & 0o7777);
        }

        // `append_data` sets the path (with a GNU long-name record if needed) and the checksum.
        self.builder
            .append_data(&mut header, &entry.name, file)
            .with_context(|| {
                PackError::Encoding(format!(
                    "Failed to write entry '{}' from '{}' into '{}'",
                    entry.name,
                    source.display(),
                    self.path.display()
                ))
            })?;
        self.entries += 1;
        debug!(
            "Added '{}' as '{}' ({} bytes)",
            source.display(),
            entry.name,
            metadata.len()
        );
        Ok(())
    }

    /// Finalizes the archive in reverse acquisition order and returns its path.
    pub fn finish(self) -> Result<PathBuf> {
        let Self {
            builder,
            path,
            entries,
        } = self;
        // Writes the two zero blocks that terminate a tar stream.
        let encoder = builder.into_inner().with_context(|| {
            PackError::Encoding(format!(
                "Failed to finalize tar archive structure of '{}'",
                path.display()
            ))
        })?;
        let mut file = encoder.finish().with_context(|| {
            PackError::Encoding(format!(
                "Failed to finish gzip compression stream of '{}'",
                path.display()
            ))
        })?;
        file.flush().with_context(|| {
            PackError::FileSystem(format!("Failed to flush archive '{}'", path.display()))
        })?;
        debug!("Closed archive {} with {} entries", path.display(), entries);
        Ok(path)
    }
}
