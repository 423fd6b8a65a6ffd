//! # relpack Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! ## Overview
//!
//! This module defines the error kinds raised while packaging archives. Every
//! failure is fatal to the invocation, so the goal here is not recovery but a
//! clear message that names the stage that failed and keeps the underlying
//! operating system error text.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PackError`: A custom error enum using `thiserror`, one variant per stage
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! A `PackError` is normally attached as *context* on top of the `std::io` or
//! `walkdir` error that caused it. The kind stays recoverable with
//! `downcast_ref`, and printing the error with `{:#}` shows the full chain.
//!
//! ## Examples
//!
//! ```rust
//! let file = File::open(&path).with_context(|| {
//!     PackError::FileSystem(format!("Failed to open '{}'", path.display()))
//! })?;
//!
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<PackError>(), Some(PackError::Scan(_))) => { /* ... */ }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for relpack.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// Open, stat, create or read failures on the working directory.
    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// Header construction or write failures from the tar/gzip layers.
    #[error("Archive encoding error: {0}")]
    Encoding(String),

    /// Directory traversal failures while looking for auxiliary files.
    #[error("Directory scan error: {0}")]
    Scan(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_display() {
        let fs_err = PackError::FileSystem("Failed to open 'app'".to_string());
        assert_eq!(fs_err.to_string(), "Filesystem error: Failed to open 'app'");

        let enc_err = PackError::Encoding("Failed to write header".into());
        assert_eq!(
            enc_err.to_string(),
            "Archive encoding error: Failed to write header"
        );

        let scan_err = PackError::Scan("permission denied".into());
        assert_eq!(scan_err.to_string(), "Directory scan error: permission denied");
    }

    #[test]
    fn test_kind_survives_as_context() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let result: Result<()> = Err::<(), _>(io_err)
            .with_context(|| PackError::FileSystem("Failed to open 'missing'".into()));
        let err = result.unwrap_err();

        assert_eq!(
            err.downcast_ref::<PackError>(),
            Some(&PackError::FileSystem("Failed to open 'missing'".into()))
        );
        // Alternate formatting keeps the underlying OS error text.
        let rendered = format!("{:#}", err);
        assert!(rendered.contains("Failed to open 'missing'"));
        assert!(rendered.contains("no such file"));
    }
}
