//! CSV serialization of enriched tables.

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use wms_model::{ENRICHED_COLUMNS, EnrichedRecord};

use crate::error::{PipelineError, Result};

/// Writes `order_date,sku,quantity,msku` rows to any writer.
///
/// Returns the number of data rows written.
pub fn write_enriched<W: Write>(writer: W, records: &[EnrichedRecord]) -> csv::Result<usize> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(ENRICHED_COLUMNS)?;
    for record in records {
        csv_writer.write_record(record.to_row())?;
    }
    csv_writer.flush()?;
    Ok(records.len())
}

/// Writes an enriched table to `path`, creating or truncating it.
///
/// The file is flushed and closed before returning.
pub fn export_to_path(path: &Path, records: &[EnrichedRecord]) -> Result<usize> {
    let write_error = |source: csv::Error| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::create(path).map_err(|e| write_error(e.into()))?;
    write_enriched(file, records).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wms_model::StandardizedRecord;

    #[test]
    fn test_write_enriched() {
        let records = vec![
            EnrichedRecord::new(
                StandardizedRecord::new("2025-08-01", "pen-blue", "10"),
                Some("cste-pen".to_string()),
            ),
            EnrichedRecord::new(StandardizedRecord::new("2025-08-02", "ink, black", "1"), None),
        ];
        let mut buffer = Vec::new();
        let rows = write_enriched(&mut buffer, &records).unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "order_date,sku,quantity,msku\n\
             2025-08-01,pen-blue,10,cste-pen\n\
             2025-08-02,\"ink, black\",1,\n"
        );
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let mut buffer = Vec::new();
        write_enriched(&mut buffer, &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "order_date,sku,quantity,msku\n");
    }

    #[test]
    fn test_unwritable_destination() {
        let err = export_to_path(Path::new("/no/such/dir/out.csv"), &[]).unwrap_err();
        assert!(matches!(err, PipelineError::Write { .. }));
    }
}
