//! Error types for page arithmetic and page selection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while computing or changing page state.
#[derive(Debug, Error)]
pub enum WindowError {
    /// Invalid configuration (page size of zero, window too small).
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A page selection was refused.
    #[error("Page request rejected: {0}")]
    Rejected(#[from] PageRejection),
}

impl WindowError {
    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// The rejection carried by this error, if any.
    pub fn rejection(&self) -> Option<PageRejection> {
        match self {
            Self::Rejected(rejection) => Some(*rejection),
            Self::InvalidConfig { .. } => None,
        }
    }
}

/// Reason a page selection was ignored.
///
/// Rejections never change state. Callers usually drop them silently; they
/// exist so a binding layer can tell an ignored click from an accepted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum PageRejection {
    /// Input was not an integer page number (ellipsis, text, fraction).
    #[error("not a page number")]
    NotANumber,

    /// Requested page is below the first page.
    #[error("page {requested} is before the first page")]
    BeforeFirst { requested: i64 },

    /// Requested page is past the last page.
    #[error("page {requested} is past the last page ({total_pages})")]
    PastLast { requested: i64, total_pages: usize },

    /// Requested page is already the current page.
    #[error("page {page} is already the current page")]
    Unchanged { page: usize },
}
