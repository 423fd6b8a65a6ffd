//! # relpack Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! ## Overview
//!
//! This module holds the recognition tables that drive packaging: which files
//! count as auxiliary files (README/LICENSE style documents bundled with every
//! archive), and which `{project}_{os}_{arch}` build outputs get their names
//! normalized. The built-in defaults match the naming templates of common
//! multi-platform build tools, and a project can override them with a
//! `.relpack.toml` file.
//!
//! ## Architecture
//!
//! - Configuration is loaded exactly once at startup and then shared read-only
//!   (`&Config`) across every archive target of the invocation.
//! - Fields missing from the project file fall back to the built-in defaults.
//! - After loading, auxiliary names are case-folded and every table is validated.
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.relpack.toml` in the working directory or its ancestors
//!    (the search stops at the first directory containing `.git`)
//! 2. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! # .relpack.toml
//! [auxiliary]
//! names = ["readme", "license", "changelog"]
//!
//! [platforms]
//! arch = ["386", "386.exe", "amd64", "amd64.exe", "arm", "arm64"]
//! ```
//!
//! ```rust
//! let cfg = config::load_config(&std::env::current_dir()?)?;
//! let is_doc = cfg.auxiliary.names.contains("readme");
//! ```
//!
use crate::core::error::{PackError, Result};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Base names (case-insensitive, extension stripped) bundled into every archive.
pub const DEFAULT_AUXILIARY_NAMES: &[&str] = &["readme", "license"];
/// Extensions an auxiliary file may carry. The empty string admits `LICENSE`.
pub const DEFAULT_AUXILIARY_EXTENSIONS: &[&str] = &["", ".txt", ".md"];
/// Operating system tokens of the `{project}_{os}_{arch}` naming template.
pub const DEFAULT_OS_TOKENS: &[&str] = &["darwin", "freebsd", "linux", "netbsd", "openbsd", "windows"];
/// Architecture tokens, including the `.exe` variants of Windows builds.
pub const DEFAULT_ARCH_TOKENS: &[&str] = &["386", "386.exe", "amd64", "amd64.exe", "arm"];

const PROJECT_CONFIG_FILENAME: &str = ".relpack.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub auxiliary: AuxiliaryConfig,
    #[serde(default)]
    pub platforms: PlatformConfig,
}

/// Recognized auxiliary base names crossed with allowed extensions.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AuxiliaryConfig {
    /// Lower-case base names, e.g. `readme`.
    #[serde(default = "default_auxiliary_names")]
    pub names: BTreeSet<String>,
    /// Allowed extensions including the leading dot, or `""` for none.
    #[serde(default = "default_auxiliary_extensions")]
    pub extensions: BTreeSet<String>,
}

/// Token sets of the `{project}_{os}_{arch}` build artifact naming convention.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PlatformConfig {
    #[serde(default = "default_os_tokens")]
    pub os: BTreeSet<String>,
    #[serde(default = "default_arch_tokens")]
    pub arch: BTreeSet<String>,
}

impl Default for AuxiliaryConfig {
    fn default() -> Self {
        Self {
            names: default_auxiliary_names(),
            extensions: default_auxiliary_extensions(),
        }
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            os: default_os_tokens(),
            arch: default_arch_tokens(),
        }
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
fn default_auxiliary_names() -> BTreeSet<String> {
    to_set(DEFAULT_AUXILIARY_NAMES)
}
fn default_auxiliary_extensions() -> BTreeSet<String> {
    to_set(DEFAULT_AUXILIARY_EXTENSIONS)
}
fn default_os_tokens() -> BTreeSet<String> {
    to_set(DEFAULT_OS_TOKENS)
}
fn default_arch_tokens() -> BTreeSet<String> {
    to_set(DEFAULT_ARCH_TOKENS)
}

/// Loads the effective configuration for packaging inside `start_dir`.
///
/// Looks for `.relpack.toml` in `start_dir` and its ancestors, falls back to the
/// built-in tables when none is found, then normalizes and validates the result.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    let mut config = match find_project_config_path(start_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            debug!("No project configuration file ({PROJECT_CONFIG_FILENAME}) found, using defaults.");
            Config::default()
        }
    };
    normalize_config(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).with_context(|| {
        PackError::Config(format!(
            "Failed to read configuration file: {}",
            path.display()
        ))
    })?;
    toml::from_str(&content).with_context(|| {
        PackError::Config(format!(
            "Failed to parse TOML from file: {}",
            path.display()
        ))
    })
}

/// Case-folds auxiliary names so matching can compare against a lower-cased stem.
fn normalize_config(config: &mut Config) {
    config.auxiliary.names = config
        .auxiliary
        .names
        .iter()
        .map(|name| name.to_lowercase())
        .collect();
}

fn validate_config(config: &Config) -> Result<()> {
    for name in &config.auxiliary.names {
        if name.is_empty() || name.contains('.') {
            return Err(anyhow!(PackError::Config(format!(
                "Invalid auxiliary name '{}'. Expected a non-empty base name without '.'.",
                name
            ))));
        }
    }
    for ext in &config.auxiliary.extensions {
        // Only the text after the last '.' is ever compared, so ".tar.gz" could never match.
        let valid = ext.is_empty() || (ext.starts_with('.') && ext.matches('.').count() == 1);
        if !valid {
            return Err(anyhow!(PackError::Config(format!(
                "Invalid auxiliary extension '{}'. Expected \"\" or a single '.'-prefixed suffix.",
                ext
            ))));
        }
    }
    for (kind, tokens) in [("os", &config.platforms.os), ("arch", &config.platforms.arch)] {
        for token in tokens {
            if token.is_empty() || token.contains('_') {
                return Err(anyhow!(PackError::Config(format!(
                    "Invalid {} token '{}'. Tokens must be non-empty and cannot contain '_'.",
                    kind, token
                ))));
            }
        }
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_build_tool_conventions() {
        let config = Config::default();
        assert!(config.auxiliary.names.contains("readme"));
        assert!(config.auxiliary.names.contains("license"));
        assert!(config.auxiliary.extensions.contains(""));
        assert!(config.auxiliary.extensions.contains(".md"));
        assert!(config.platforms.os.contains("windows"));
        assert!(config.platforms.arch.contains("amd64.exe"));
        assert!(!config.platforms.arch.contains("arm64"));
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let toml_content = r#"
            [auxiliary]
            names = ["README", "changelog"]

            [platforms]
            arch = ["arm64"]
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.auxiliary.names, to_set(&["README", "changelog"]));
        assert_eq!(config.auxiliary.extensions, default_auxiliary_extensions()); // Default
        assert_eq!(config.platforms.os, default_os_tokens()); // Default
        assert_eq!(config.platforms.arch, to_set(&["arm64"]));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[archive]\nformat = \"zip\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_without_file_uses_defaults() -> Result<()> {
        let temp_dir = tempdir()?;
        fs::create_dir(temp_dir.path().join(".git"))?; // Stop the ancestor search here.
        let config = load_config(temp_dir.path())?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_load_config_from_ancestor_normalizes_names() -> Result<()> {
        let temp_dir = tempdir()?;
        fs::create_dir(temp_dir.path().join(".git"))?;
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILENAME),
            "[auxiliary]\nnames = [\"ReadMe\", \"NOTICE\"]\n",
        )?;
        let nested = temp_dir.path().join("dist");
        fs::create_dir(&nested)?;

        let config = load_config(&nested)?;
        assert_eq!(config.auxiliary.names, to_set(&["notice", "readme"]));
        Ok(())
    }

    #[test]
    fn test_load_config_invalid_toml() -> Result<()> {
        let temp_dir = tempdir()?;
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "[auxiliary\n")?;
        let err = load_config(temp_dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PackError>(),
            Some(PackError::Config(_))
        ));
        Ok(())
    }

    #[test]
    fn test_validate_config_invalid_extension() {
        let mut config = Config::default();
        config.auxiliary.extensions.insert("md".to_string());
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid auxiliary extension 'md'"));
    }

    #[test]
    fn test_validate_config_token_with_underscore() {
        let mut config = Config::default();
        config.platforms.os.insert("linux_musl".to_string());
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid os token 'linux_musl'"));
    }
}
