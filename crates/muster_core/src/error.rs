//! Error types for catalog loading.
//!
//! The cost and validation engines never fail. Everything here concerns
//! getting a catalog or roster into memory in the first place.

use thiserror::Error;

/// Result type alias using [`MusterError`].
pub type Result<T> = std::result::Result<T, MusterError>;

/// Top-level error type for the force builder.
#[derive(Debug, Error)]
pub enum MusterError {
    /// Failed to read a data file.
    #[error("Failed to read file '{path}': {source}")]
    Io {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Data file parsing error.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// Path (or label) of the document that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },

    /// The same id appears twice in one catalog table.
    #[error("Duplicate {table} id: '{id}'")]
    DuplicateId {
        /// Catalog table name (e.g. "unit").
        table: &'static str,
        /// The repeated id.
        id: String,
    },

    /// Catalog referential-integrity check failed.
    #[error("Catalog validation failed with {} problem(s): {errors:?}", errors.len())]
    CatalogValidation {
        /// Problems reported by [`crate::catalog::Catalog::validate`].
        errors: Vec<String>,
    },
}
