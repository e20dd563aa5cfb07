use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{DocsError, Result};

/// Conventional manifest file name, relative to the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Project manifest record.
///
/// Only the fields the docs build consumes are modeled; everything else in
/// the file is ignored. The manifest is read once per build and never
/// written back.
#[derive(Debug, Deserialize, Clone)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

impl PackageManifest {
    /// Loads the manifest from the given path.
    ///
    /// # Returns
    /// * `Ok(PackageManifest)` - Parsed manifest
    /// * `Err(ManifestNotFound)` - If the file does not exist
    /// * `Err(ManifestParse)` - If the file is not valid JSON
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DocsError::manifest_not_found(path));
        }

        let raw = fs::read_to_string(path)?;
        let manifest: PackageManifest = serde_json::from_str(&raw)?;
        Ok(manifest)
    }
}

/// Resolves the current package version from a manifest file.
///
/// Reads the manifest once, extracts the `version` field, and normalizes it
/// (surrounding whitespace and stray quote characters stripped). The result
/// is an opaque string: no semantic-version parsing or validation happens
/// here or anywhere downstream.
///
/// # Arguments
/// * `path` - Path to the manifest file (conventionally [`MANIFEST_FILE`])
///
/// # Returns
/// * `Ok(String)` - The normalized version string
/// * `Err(ManifestNotFound)` - If the manifest file is absent
/// * `Err(VersionFieldMissing)` - If the manifest has no `version` field
pub fn resolve_version(path: &Path) -> Result<String> {
    let manifest = PackageManifest::load(path)?;

    match manifest.version {
        Some(raw) => Ok(normalize_version(&raw)),
        None => Err(DocsError::version_field_missing(path)),
    }
}

/// Strips surrounding whitespace and quote characters from a raw version
/// field value. Applied exactly once, at resolution time, so every consumer
/// (page injection, nav labels) sees the same value.
fn normalize_version(raw: &str) -> String {
    raw.trim().trim_matches('"').trim_matches('\'').to_string()
}
