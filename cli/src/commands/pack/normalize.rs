//! # Build Artifact Name Normalization
//!
//! File: cli/src/commands/pack/normalize.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/relpack
//!
//! Cross-compiling build tools name their outputs `{project}_{os}_{arch}`,
//! e.g. `myapp_windows_amd64.exe`. Inside an archive that is already named
//! after the platform, the binary should simply be called `myapp`.
//!
//! Normalization only computes the name recorded in the archive header. The
//! file on disk is never renamed or removed.
//!
use crate::core::config::PlatformConfig;

/// # Canonical Archive Name (`canonical_name`)
///
/// Returns the name a file should carry inside the archive.
///
/// The name is normalized to its project segment only when it splits on `_`
/// into exactly three segments, the second is a known OS token, the third is a
/// known architecture token, and the project segment is non-empty. Every other
/// name is returned unchanged.
///
/// ## Arguments
///
/// * `name` - The file's base name, e.g. `myapp_windows_amd64.exe`.
/// * `platforms` - The recognized OS and architecture tokens.
///
/// ## Returns
///
/// * `&str` - A slice of `name`: either the project segment or `name` itself.
pub fn canonical_name<'a>(name: &'a str, platforms: &PlatformConfig) -> &'a str {
    let segments: Vec<&'a str> = name.split('_').collect();
    let [project, os, arch] = segments.as_slice() else {
        return name;
    };
    if project.is_empty() || !platforms.os.contains(*os) || !platforms.arch.contains(*arch) {
        return name;
    }
    *project
}
