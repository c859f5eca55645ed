use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use wms_core::Pipeline;
use wms_ingest::{detect, read_raw_table};
use wms_model::MarketplaceVariant;

use wms_cli::input::{ensure_csv_input, output_path_for};
use wms_cli::report::{ProcessReport, run_pipeline};

use crate::cli::{DetectArgs, ProcessArgs};
use crate::summary::apply_table_style;

pub fn run_variants() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Marketplace", "Required columns", "order_date", "sku", "quantity"]);
    apply_table_style(&mut table);
    for variant in MarketplaceVariant::ALL {
        let Some(renames) = variant.renames() else {
            continue;
        };
        table.add_row(vec![
            variant.label().to_string(),
            variant.required_columns().join(", "),
            renames.order_date.to_string(),
            renames.sku.to_string(),
            renames.quantity.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_detect(args: &DetectArgs) -> Result<MarketplaceVariant> {
    ensure_csv_input(&args.input)?;
    let table = read_raw_table(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let variant = detect(&table.headers);
    if !variant.is_recognized() {
        bail!(
            "no known marketplace matches the header of {}",
            args.input.display()
        );
    }
    Ok(variant)
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessReport> {
    ensure_csv_input(&args.input)?;
    let output = output_path_for(&args.input, args.output.as_deref());
    let span = info_span!("process", input = %args.input.display());
    let _guard = span.enter();

    info!(mapping = %args.mapping.display(), "loading sku mapping");
    let mut pipeline = Pipeline::with_mapping_file(&args.mapping);
    let report = run_pipeline(&mut pipeline, &args.input, &output);
    info!(
        records = report.records,
        mapped = report.mapped,
        complete = report.is_complete(),
        "process finished"
    );
    Ok(report)
}
