//! Driving a pipeline session and collecting what each step reported.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use wms_core::{Outcome, Pipeline};
use wms_model::MarketplaceVariant;

use crate::logging::redact_value;

/// The three pipeline calls, in protocol order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Load,
    Enrich,
    Export,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Load => "Load",
            Step::Enrich => "Map SKUs",
            Step::Export => "Save",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: Step,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Everything a `process` run produced, for rendering or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub variant: Option<MarketplaceVariant>,
    pub records: usize,
    pub mapped: usize,
    pub unmapped_skus: Vec<String>,
    pub steps: Vec<StepReport>,
}

impl ProcessReport {
    fn new(input: &Path, output: &Path) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            variant: None,
            records: 0,
            mapped: 0,
            unmapped_skus: Vec::new(),
            steps: Vec::new(),
        }
    }

    fn record(&mut self, step: Step, outcome: Outcome) -> bool {
        let ok = outcome.ok;
        self.steps.push(StepReport { step, outcome });
        ok
    }

    /// True if any step failed.
    pub fn has_errors(&self) -> bool {
        self.steps.iter().any(|step| !step.outcome.ok)
    }

    /// True once the export step has succeeded.
    pub fn is_complete(&self) -> bool {
        self.steps
            .iter()
            .any(|step| step.step == Step::Export && step.outcome.ok)
    }
}

/// Runs load, enrich and export in order, stopping at the first failure.
pub fn run_pipeline(pipeline: &mut Pipeline, input: &Path, output: &Path) -> ProcessReport {
    let mut report = ProcessReport::new(input, output);

    if !report.record(Step::Load, pipeline.load_and_standardize(input)) {
        return report;
    }
    if let Some(table) = pipeline.state().table() {
        report.variant = Some(table.variant);
        report.records = table.records.len();
    }

    if !report.record(Step::Enrich, pipeline.enrich()) {
        return report;
    }
    if let Some(resolution) = pipeline.state().resolution() {
        report.mapped = resolution.mapped_count;
        report.unmapped_skus = resolution.unmapped.clone();
        for sku in &report.unmapped_skus {
            debug!(sku = redact_value(sku), "unmapped sku");
        }
    }

    report.record(Step::Export, pipeline.export(output));
    report
}
