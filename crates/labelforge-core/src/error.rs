//! Error handling for LabelForge.
//!
//! Provides the typed error surface for the document engine: import
//! validation failures, template problems, and page/element lookups.
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Unified error type for the LabelForge document engine.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// A document being imported failed structural validation. The whole
    /// import is rejected; nothing is committed.
    #[error("Invalid document: {reason}")]
    InvalidDocument {
        /// Why validation failed.
        reason: String,
    },

    /// A template failed its import guard.
    #[error("Invalid template: {reason}")]
    InvalidTemplate {
        /// Why validation failed.
        reason: String,
    },

    /// A template id was registered twice.
    #[error("Template with id '{id}' already exists")]
    DuplicateTemplate {
        /// The conflicting template id.
        id: String,
    },

    /// A template lookup failed.
    #[error("Template '{id}' not found")]
    TemplateNotFound {
        /// The requested template id.
        id: String,
    },

    /// A page index was outside the document.
    #[error("Page index {index} out of range ({count} pages)")]
    PageOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of pages in the document.
        count: usize,
    },
}

/// Result alias using the LabelForge [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
