use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for docs build operations
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("Manifest {} has no version field", path.display())]
    VersionFieldMissing { path: PathBuf },

    #[error("Manifest parse error: {0}")]
    ManifestParse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Plugin '{plugin}' failed: {message}")]
    Plugin { plugin: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in sley-docs
pub type Result<T> = std::result::Result<T, DocsError>;

impl DocsError {
    /// Create a manifest-not-found error for the given path
    pub fn manifest_not_found(path: impl Into<PathBuf>) -> Self {
        DocsError::ManifestNotFound { path: path.into() }
    }

    /// Create a version-field-missing error for the given path
    pub fn version_field_missing(path: impl Into<PathBuf>) -> Self {
        DocsError::VersionFieldMissing { path: path.into() }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DocsError::Config(msg.into())
    }

    /// Create a plugin error with context
    pub fn plugin(plugin: impl Into<String>, msg: impl Into<String>) -> Self {
        DocsError::Plugin {
            plugin: plugin.into(),
            message: msg.into(),
        }
    }
}
