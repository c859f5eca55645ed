use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use wms_cli::report::ProcessReport;

pub fn print_summary(report: &ProcessReport) {
    println!("Input: {}", report.input.display());
    if let Some(variant) = report.variant {
        println!("Format: {variant}");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Status"),
        header_cell("Message"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for step in &report.steps {
        table.add_row(vec![
            Cell::new(step.step.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            status_cell(step.outcome.ok),
            Cell::new(&step.outcome.message),
        ]);
    }
    println!("{table}");
    print_unmapped_table(report);
    if report.is_complete() {
        println!("Output: {}", report.output.display());
    }
}

fn print_unmapped_table(report: &ProcessReport) {
    if report.unmapped_skus.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Unmapped SKU")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, sku) in report.unmapped_skus.iter().enumerate() {
        table.add_row(vec![dim_cell(idx + 1), Cell::new(sku).fg(Color::Yellow)]);
    }
    println!();
    println!("Unmapped SKUs (add them to the mapping table):");
    println!("{table}");
}

fn status_cell(ok: bool) -> Cell {
    if ok {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(80)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
