//! Site-specific error types.

use thiserror::Error;

use super::pages::PageStatus;
use crate::domains::catalog::CatalogError;

/// Why a page could not be rendered as requested.
#[derive(Debug, Error)]
pub enum SiteError {
    /// No page at this path, or its content is missing and the
    /// missing-content policy is `error`.
    #[error("{0}")]
    NotFound(String),

    /// The path exists but does not accept this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Content could not be loaded.
    #[error(transparent)]
    Content(#[from] CatalogError),
}

impl SiteError {
    /// Create a new "not found" error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Status of the error page.
    pub fn status(&self) -> PageStatus {
        match self {
            Self::NotFound(_) => PageStatus::NotFound,
            Self::MethodNotAllowed => PageStatus::MethodNotAllowed,
            Self::Content(e) if e.is_not_found() => PageStatus::NotFound,
            Self::Content(_) => PageStatus::Error,
        }
    }

    /// Message shown to visitors. Content errors stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Content(e) if !e.is_not_found() => "Something went wrong.".to_string(),
            other => other.to_string(),
        }
    }
}
