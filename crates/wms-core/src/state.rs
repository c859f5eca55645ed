//! Session state of a [`Pipeline`](crate::Pipeline).
//!
//! The three-call protocol moves `Empty -> Standardized -> Enriched`. Loading
//! is allowed from any state and always lands in `Standardized`, discarding a
//! previous enrichment. Export only reads the `Enriched` state.

use std::path::PathBuf;

use wms_map::Resolution;
use wms_model::{MarketplaceVariant, StandardizedRecord};

/// A standardized sales table together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTable {
    pub source: PathBuf,
    pub variant: MarketplaceVariant,
    pub records: Vec<StandardizedRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PipelineState {
    /// Nothing loaded yet.
    #[default]
    Empty,
    /// A sales file has been standardized.
    Standardized(LoadedTable),
    /// The standardized table has been resolved against the mapping.
    Enriched {
        table: LoadedTable,
        resolution: Resolution,
    },
}

impl PipelineState {
    pub fn name(&self) -> &'static str {
        match self {
            PipelineState::Empty => "empty",
            PipelineState::Standardized(_) => "standardized",
            PipelineState::Enriched { .. } => "enriched",
        }
    }

    /// The standardized table, present in both non-empty states.
    pub fn table(&self) -> Option<&LoadedTable> {
        match self {
            PipelineState::Empty => None,
            PipelineState::Standardized(table) | PipelineState::Enriched { table, .. } => {
                Some(table)
            }
        }
    }

    pub fn resolution(&self) -> Option<&Resolution> {
        match self {
            PipelineState::Enriched { resolution, .. } => Some(resolution),
            _ => None,
        }
    }

    pub(crate) fn into_table(self) -> Option<LoadedTable> {
        match self {
            PipelineState::Empty => None,
            PipelineState::Standardized(table) | PipelineState::Enriched { table, .. } => {
                Some(table)
            }
        }
    }
}
