//! Pipeline error types and their user-facing classification.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use wms_ingest::IngestError;

/// Classification of a failed pipeline call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// Input file or mapping resource missing.
    ResourceNotFound,
    /// Header set matches no known marketplace.
    UnsupportedFormat,
    /// Marketplace detected but an expected source column is absent.
    InconsistentSchema,
    /// Input exists but could not be read as CSV.
    ReadFailure,
    /// Mapping resource failed to load.
    ResolverUnavailable,
    /// Call made out of load, enrich, export order.
    SequenceError,
    /// Destination not writable.
    WriteFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ResourceNotFound => "ResourceNotFound",
            ErrorKind::UnsupportedFormat => "UnsupportedFormat",
            ErrorKind::InconsistentSchema => "InconsistentSchema",
            ErrorKind::ReadFailure => "ReadFailure",
            ErrorKind::ResolverUnavailable => "ResolverUnavailable",
            ErrorKind::SequenceError => "SequenceError",
            ErrorKind::WriteFailure => "WriteFailure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors returned by the `try_*` pipeline calls.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading, detecting or standardizing the input failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The mapping table could not be loaded when the pipeline was built.
    #[error("SKU mapping data is not available: {reason}")]
    ResolverUnavailable { reason: String },

    /// `enrich` called before a sales file was loaded.
    #[error("no sales data loaded to process")]
    NothingLoaded,

    /// `export` called before `enrich`.
    #[error("no processed data to save; map SKUs first")]
    NothingEnriched,

    /// Writing the export failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Ingest(err) => match err {
                IngestError::FileNotFound { .. } => ErrorKind::ResourceNotFound,
                IngestError::UnsupportedFormat { .. } | IngestError::EmptyCsv { .. } => {
                    ErrorKind::UnsupportedFormat
                }
                IngestError::MissingColumn { .. } => ErrorKind::InconsistentSchema,
                IngestError::FileRead { .. } | IngestError::CsvParse { .. } => {
                    ErrorKind::ReadFailure
                }
            },
            PipelineError::ResolverUnavailable { .. } => ErrorKind::ResolverUnavailable,
            PipelineError::NothingLoaded | PipelineError::NothingEnriched => {
                ErrorKind::SequenceError
            }
            PipelineError::Write { .. } => ErrorKind::WriteFailure,
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use wms_model::MarketplaceVariant;

    #[test]
    fn test_ingest_errors_are_classified() {
        let not_found: PipelineError = IngestError::FileNotFound {
            path: PathBuf::from("sales.csv"),
        }
        .into();
        assert_eq!(not_found.kind(), ErrorKind::ResourceNotFound);

        let missing: PipelineError = IngestError::MissingColumn {
            variant: MarketplaceVariant::Amazon,
            column: "Date".to_string(),
        }
        .into();
        assert_eq!(missing.kind(), ErrorKind::InconsistentSchema);

        let empty: PipelineError = IngestError::EmptyCsv {
            path: PathBuf::from("sales.csv"),
        }
        .into();
        assert_eq!(empty.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn test_sequence_errors() {
        assert_eq!(PipelineError::NothingLoaded.kind(), ErrorKind::SequenceError);
        assert_eq!(PipelineError::NothingEnriched.kind(), ErrorKind::SequenceError);
        assert_eq!(ErrorKind::SequenceError.to_string(), "SequenceError");
    }
}
