//! Error types for sales export ingestion.

use std::path::PathBuf;
use thiserror::Error;

use wms_model::MarketplaceVariant;

/// Errors that can occur while reading, classifying or standardizing an export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the input.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Input has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Schema Errors ===
    /// Header set matches no known marketplace.
    #[error("unsupported format: columns [{}] match no known marketplace", columns.join(", "))]
    UnsupportedFormat { columns: Vec<String> },

    /// Variant was detected but one of its source columns is absent.
    #[error("{variant} export is missing expected column '{column}'")]
    MissingColumn {
        variant: MarketplaceVariant,
        column: String,
    },
}

impl IngestError {
    pub(crate) fn csv(path: impl Into<PathBuf>, err: &csv::Error) -> Self {
        Self::CsvParse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/sales.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/sales.csv");
    }

    #[test]
    fn test_unsupported_format_lists_columns() {
        let err = IngestError::UnsupportedFormat {
            columns: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unsupported format: columns [a, b] match no known marketplace"
        );
    }

    #[test]
    fn test_missing_column_names_variant() {
        let err = IngestError::MissingColumn {
            variant: MarketplaceVariant::Flipkart,
            column: "Ordered On".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Flipkart export is missing expected column 'Ordered On'"
        );
    }
}
