//! The load, enrich, export orchestrator.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::{info, info_span};

use wms_ingest::{RawTable, detect, read_raw_table, read_raw_table_from_reader, standardize};
use wms_map::{MappingError, Resolution, SkuResolver};

use crate::error::{PipelineError, Result};
use crate::export::{export_to_path, write_enriched};
use crate::outcome::{EnrichSummary, ExportSummary, LoadSummary, Outcome};
use crate::state::{LoadedTable, PipelineState};

/// Mapping file used when the caller does not name one.
pub const DEFAULT_MAPPING_FILE: &str = "wms_mapping.csv";

/// Prefix given to exported files by [`Pipeline::default_output_path`].
pub const OUTPUT_PREFIX: &str = "processed_";

/// One sales-normalization session.
///
/// Holds the mapping resolver (or the reason it failed to load) and at most
/// one in-flight table. Not meant to be shared between concurrent callers.
#[derive(Debug)]
pub struct Pipeline {
    resolver: std::result::Result<SkuResolver, MappingError>,
    state: PipelineState,
}

impl Pipeline {
    /// Creates a session around a resolver load result.
    ///
    /// A failed load is kept so that `enrich` can report it.
    pub fn new(resolver: std::result::Result<SkuResolver, MappingError>) -> Self {
        if let Err(err) = &resolver {
            tracing::warn!(error = %err, "sku mapping unavailable");
        }
        Self {
            resolver,
            state: PipelineState::Empty,
        }
    }

    pub fn with_resolver(resolver: SkuResolver) -> Self {
        Self::new(Ok(resolver))
    }

    /// Creates a session that loads its mapping from `path`.
    pub fn with_mapping_file(path: &Path) -> Self {
        Self::new(SkuResolver::load(path))
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// The loaded resolver, or the error that prevented loading it.
    pub fn resolver(&self) -> std::result::Result<&SkuResolver, &MappingError> {
        self.resolver.as_ref()
    }

    /// Default export location for an input: `processed_<name>` beside it.
    pub fn default_output_path(input: &Path) -> PathBuf {
        let name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sales.csv".to_string());
        input.with_file_name(format!("{OUTPUT_PREFIX}{name}"))
    }

    // === Load ===

    /// Reads, classifies and standardizes a sales file.
    ///
    /// On failure the current state is left untouched.
    pub fn try_load_and_standardize(&mut self, path: &Path) -> Result<LoadSummary> {
        let span = info_span!("load", path = %path.display());
        let _guard = span.enter();
        let table = read_raw_table(path)?;
        self.install(table, path.to_path_buf())
    }

    /// Same as [`Pipeline::try_load_and_standardize`] for an in-memory stream.
    /// `name` is used in messages in place of a file name.
    pub fn try_load_from_reader<R: Read>(&mut self, reader: R, name: &str) -> Result<LoadSummary> {
        let span = info_span!("load", source = %name);
        let _guard = span.enter();
        let table = read_raw_table_from_reader(reader)?;
        self.install(table, PathBuf::from(name))
    }

    pub fn load_and_standardize(&mut self, path: &Path) -> Outcome {
        self.try_load_and_standardize(path).into()
    }

    fn install(&mut self, table: RawTable, source: PathBuf) -> Result<LoadSummary> {
        let variant = detect(&table.headers);
        let records = standardize(table, variant)?;
        let summary = LoadSummary {
            source: source.clone(),
            variant,
            records: records.len(),
        };
        info!(variant = %variant, records = records.len(), "standardized sales file");
        self.state = PipelineState::Standardized(LoadedTable {
            source,
            variant,
            records,
        });
        Ok(summary)
    }

    // === Enrich ===

    /// Resolves the loaded table's SKUs.
    ///
    /// Valid from `Standardized`, and again from `Enriched` (recomputed from
    /// the stored standardized records).
    pub fn try_enrich(&mut self) -> Result<EnrichSummary> {
        let span = info_span!("enrich", state = self.state.name());
        let _guard = span.enter();
        let table = self.state.table().ok_or(PipelineError::NothingLoaded)?;
        let resolver = self
            .resolver
            .as_ref()
            .map_err(|err| PipelineError::ResolverUnavailable {
                reason: err.to_string(),
            })?;
        let resolution = resolver.resolve_all(&table.records);
        let summary = EnrichSummary::from_resolution(&resolution);
        info!(
            total = summary.total,
            mapped = summary.mapped,
            unmapped = summary.unmapped.len(),
            "enriched sales table"
        );
        if let Some(table) = std::mem::take(&mut self.state).into_table() {
            self.state = PipelineState::Enriched { table, resolution };
        }
        Ok(summary)
    }

    pub fn enrich(&mut self) -> Outcome {
        self.try_enrich().into()
    }

    // === Export ===

    fn enriched(&self) -> Result<&Resolution> {
        self.state.resolution().ok_or(PipelineError::NothingEnriched)
    }

    /// Writes the enriched table to `destination`.
    ///
    /// Nothing is written unless the session is `Enriched`.
    pub fn try_export(&self, destination: &Path) -> Result<ExportSummary> {
        let span = info_span!("export", path = %destination.display());
        let _guard = span.enter();
        let resolution = self.enriched()?;
        let rows = export_to_path(destination, &resolution.records)?;
        info!(rows, "exported enriched table");
        Ok(ExportSummary {
            path: destination.to_path_buf(),
            rows,
        })
    }

    /// Writes the enriched table to any writer, returning the row count.
    pub fn try_export_to_writer<W: Write>(&self, writer: W) -> Result<usize> {
        let resolution = self.enriched()?;
        write_enriched(writer, &resolution.records).map_err(|source| PipelineError::Write {
            path: PathBuf::from("<stream>"),
            source,
        })
    }

    pub fn export(&self, destination: &Path) -> Outcome {
        self.try_export(destination).into()
    }
}

impl Default for Pipeline {
    /// Loads [`DEFAULT_MAPPING_FILE`] from the working directory.
    fn default() -> Self {
        Self::with_mapping_file(Path::new(DEFAULT_MAPPING_FILE))
    }
}
