//! Error types for mapping operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading the SKU mapping table.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Mapping file does not exist.
    #[error("mapping file not found: {path}")]
    NotFound { path: PathBuf },

    /// Mapping file exists but could not be read.
    #[error("failed to read mapping file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mapping file is not a valid `sku,msku` table.
    #[error("malformed mapping file {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;
