//! Step summaries and the `(ok, message)` results handed to callers.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use wms_map::Resolution;
use wms_model::MarketplaceVariant;

use crate::error::{ErrorKind, Result};

/// Result of a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub source: PathBuf,
    pub variant: MarketplaceVariant,
    pub records: usize,
}

/// Result of a successful enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichSummary {
    pub total: usize,
    pub mapped: usize,
    /// Distinct unmapped SKUs, in order of first appearance.
    pub unmapped: Vec<String>,
}

impl EnrichSummary {
    pub fn from_resolution(resolution: &Resolution) -> Self {
        Self {
            total: resolution.total(),
            mapped: resolution.mapped_count,
            unmapped: resolution.unmapped.clone(),
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully processed {} ({}, {} records).",
            file_name(&self.source),
            self.variant,
            self.records
        )
    }
}

impl fmt::Display for EnrichSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processing complete. Mapped {} of {} records.",
            self.mapped, self.total
        )?;
        if !self.unmapped.is_empty() {
            write!(
                f,
                "\nFound {} unmapped SKUs: {}",
                self.unmapped.len(),
                self.unmapped.join(", ")
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully saved processed data to: {}",
            self.path.display()
        )
    }
}

/// The boundary result of a pipeline call.
///
/// Failures never escape a call as errors; they are folded into
/// `ok == false` with a message and a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub ok: bool,
    pub message: String,
    pub kind: Option<ErrorKind>,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            kind: None,
        }
    }

    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            kind: Some(kind),
        }
    }

    /// `(ok, message)` pair for shells that only need those two.
    pub fn into_pair(self) -> (bool, String) {
        (self.ok, self.message)
    }
}

impl<S: fmt::Display> From<Result<S>> for Outcome {
    fn from(result: Result<S>) -> Self {
        match result {
            Ok(summary) => Outcome::success(summary.to_string()),
            Err(err) => Outcome::failure(err.kind(), format!("Error: {err}")),
        }
    }
}
