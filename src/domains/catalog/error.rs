//! Catalog-specific error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading catalog content.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The content file, or its section for the requested locale, does not exist.
    #[error("Content not found: {0}")]
    NotFound(String),

    /// A locale code outside the registry was requested.
    #[error("Unknown locale: '{0}'")]
    UnknownLocale(String),

    /// The content identifier resolves outside the content root.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// The content file is not valid JSON/JSONC of the expected shape.
    #[error("Failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The content parsed but breaks a catalog rule.
    #[error("Invalid content in {path:?}: {message}")]
    InvalidContent { path: PathBuf, message: String },

    /// An I/O error occurred while reading content.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Create a new "not found" error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create a new "access denied" error.
    pub fn access_denied(msg: impl Into<String>) -> Self {
        Self::AccessDenied(msg.into())
    }

    /// Create a new parse error for `path`.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new "invalid content" error for `path`.
    pub fn invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error means the content simply is not there.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
