use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{DocsError, Result};

/// Represents the complete configuration for the docs build.
///
/// Contains site metadata, directory layout, and injection settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteMeta,

    #[serde(default)]
    pub build: BuildConfig,
}

/// Site-level metadata shown by the rendering host.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SiteMeta {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default = "default_hostname")]
    pub hostname: String,

    #[serde(default = "default_appearance")]
    pub appearance: String,

    #[serde(default = "default_edit_link_pattern")]
    pub edit_link_pattern: String,
}

fn default_title() -> String {
    "sley".to_string()
}

fn default_description() -> String {
    "Version orchestrator for semantic versioning".to_string()
}

fn default_hostname() -> String {
    "https://sley.indaco.dev".to_string()
}

fn default_appearance() -> String {
    "force-dark".to_string()
}

fn default_edit_link_pattern() -> String {
    "https://github.com/indaco/sley-docs/edit/main/pages/:path".to_string()
}

impl Default for SiteMeta {
    fn default() -> Self {
        SiteMeta {
            title: default_title(),
            description: default_description(),
            hostname: default_hostname(),
            appearance: default_appearance(),
            edit_link_pattern: default_edit_link_pattern(),
        }
    }
}

/// Directory layout and injection settings for a build pass.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BuildConfig {
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default = "default_clean_urls")]
    pub clean_urls: bool,

    /// File extensions eligible for version injection
    #[serde(default = "default_page_extensions")]
    pub page_extensions: Vec<String>,
}

fn default_src_dir() -> String {
    "pages".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_clean_urls() -> bool {
    false
}

fn default_page_extensions() -> Vec<String> {
    vec!["html".to_string()]
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            clean_urls: default_clean_urls(),
            page_extensions: default_page_extensions(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site: SiteMeta::default(),
            build: BuildConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `docsite.toml` in current directory
/// 3. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(SiteConfig)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<SiteConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./docsite.toml").exists() {
        fs::read_to_string("./docsite.toml")?
    } else {
        return Ok(SiteConfig::default());
    };

    let config: SiteConfig =
        toml::from_str(&config_str).map_err(|e| DocsError::config(e.to_string()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_meta() {
        let config = SiteConfig::default();
        assert_eq!(config.site.title, "sley");
        assert_eq!(
            config.site.description,
            "Version orchestrator for semantic versioning"
        );
        assert_eq!(config.site.appearance, "force-dark");
    }

    #[test]
    fn test_default_build_config() {
        let config = SiteConfig::default();
        assert_eq!(config.build.src_dir, "pages");
        assert_eq!(config.build.out_dir, "dist");
        assert!(!config.build.clean_urls);
        assert_eq!(config.build.page_extensions, vec!["html".to_string()]);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
[build]
out_dir = "public"
"#,
        )
        .unwrap();

        assert_eq!(config.build.out_dir, "public");
        assert_eq!(config.build.src_dir, "pages");
        assert_eq!(config.site.title, "sley");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docsite.toml");
        fs::write(&path, "not = [valid").unwrap();

        let err = load_config(Some(path.to_str().unwrap())).unwrap_err();
        assert!(matches!(err, DocsError::Config(_)));
    }
}
