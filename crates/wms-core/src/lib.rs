//! Sales normalization pipeline.
//!
//! A [`Pipeline`] runs one sales export through three calls:
//!
//! 1. [`Pipeline::load_and_standardize`] reads the file, detects the
//!    marketplace and projects it onto `order_date, sku, quantity`.
//! 2. [`Pipeline::enrich`] resolves every SKU to its master SKU.
//! 3. [`Pipeline::export`] writes `order_date, sku, quantity, msku`.
//!
//! Each call returns an [`Outcome`]; the `try_*` variants return typed
//! summaries and [`PipelineError`]s instead.

mod error;
mod export;
mod outcome;
mod pipeline;
mod state;

pub use error::{ErrorKind, PipelineError, Result};
pub use export::{export_to_path, write_enriched};
pub use outcome::{EnrichSummary, ExportSummary, LoadSummary, Outcome};
pub use pipeline::{DEFAULT_MAPPING_FILE, OUTPUT_PREFIX, Pipeline};
pub use state::{LoadedTable, PipelineState};
