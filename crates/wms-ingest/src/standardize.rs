//! Projection of detected raw tables onto the canonical record shape.

use wms_model::{ColumnRenames, MarketplaceRow, MarketplaceVariant, StandardizedRecord};

use crate::csv::RawTable;
use crate::error::{IngestError, Result};

/// Column positions of the three projected source columns.
#[derive(Debug, Clone, Copy)]
struct SourceIndices {
    order_date: usize,
    sku: usize,
    quantity: usize,
}

fn resolve_indices(
    table: &RawTable,
    variant: MarketplaceVariant,
    renames: &ColumnRenames,
) -> Result<SourceIndices> {
    let index = |column: &str| {
        table
            .column_index(column)
            .ok_or_else(|| IngestError::MissingColumn {
                variant,
                column: column.to_string(),
            })
    };
    Ok(SourceIndices {
        order_date: index(renames.order_date)?,
        sku: index(renames.sku)?,
        quantity: index(renames.quantity)?,
    })
}

/// Converts raw rows into typed marketplace rows for a detected variant.
///
/// Fails without producing output when the variant is `Unrecognized` or when
/// any of the variant's source columns is absent.
pub fn project_rows(table: RawTable, variant: MarketplaceVariant) -> Result<Vec<MarketplaceRow>> {
    let Some(renames) = variant.renames() else {
        return Err(IngestError::UnsupportedFormat {
            columns: table.headers,
        });
    };
    let idx = resolve_indices(&table, variant, renames)?;

    let rows = table
        .rows
        .into_iter()
        .map(|mut row| {
            let mut take = |i: usize| row.get_mut(i).map(std::mem::take).unwrap_or_default();
            let order_date = take(idx.order_date);
            let sku = take(idx.sku);
            let quantity = take(idx.quantity);
            (renames.into_row)(order_date, sku, quantity)
        })
        .collect();
    Ok(rows)
}

/// Renames and projects a raw table into standardized records.
///
/// Row order and row count are preserved exactly.
pub fn standardize(table: RawTable, variant: MarketplaceVariant) -> Result<Vec<StandardizedRecord>> {
    let rows = project_rows(table, variant)?;
    tracing::debug!(variant = %variant, rows = rows.len(), "standardized table");
    Ok(rows.into_iter().map(StandardizedRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wms_model::FlipkartRow;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_standardize_amazon() {
        let raw = table(
            &["FNSKU", "Date", "Event Type", "Reference ID", "MSKU", "Quantity"],
            &[&["X001", "2025-08-01", "Shipments", "R1", "pen-blue", "10"]],
        );
        let records = standardize(raw, MarketplaceVariant::Amazon).unwrap();
        assert_eq!(
            records,
            vec![StandardizedRecord::new("2025-08-01", "pen-blue", "10")]
        );
    }

    #[test]
    fn test_project_rows_tags_variant() {
        let raw = table(
            &["Order State", "FSN", "Shipment ID", "Ordered On", "SKU", "Quantity"],
            &[&["Delivered", "F1", "S1", "2025-08-02", "pencil", "2"]],
        );
        let rows = project_rows(raw, MarketplaceVariant::Flipkart).unwrap();
        assert_eq!(
            rows,
            vec![MarketplaceRow::Flipkart(FlipkartRow {
                ordered_on: "2025-08-02".to_string(),
                sku: "pencil".to_string(),
                quantity: "2".to_string(),
            })]
        );
    }

    #[test]
    fn test_missing_source_column_is_inconsistent() {
        let raw = table(
            &["Sub Order No", "Packet Id", "SKU", "Quantity"],
            &[&["1", "P", "pen", "1"]],
        );
        let err = standardize(raw, MarketplaceVariant::Meesho).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn { variant: MarketplaceVariant::Meesho, ref column }
                if column == "Order Date"
        ));
    }

    #[test]
    fn test_unrecognized_fails() {
        let raw = table(&["a", "b"], &[&["1", "2"]]);
        let err = standardize(raw, MarketplaceVariant::Unrecognized).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_empty_values_are_kept() {
        let raw = table(
            &["Order Date", "SKU", "Quantity"],
            &[&["", "pen", ""], &["2025-08-03", "", "4"]],
        );
        let records = standardize(raw, MarketplaceVariant::Meesho).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], StandardizedRecord::new("", "pen", ""));
        assert_eq!(records[1].sku, "");
    }
}
