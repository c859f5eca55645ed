//! CSV file reading into a schema-less raw table.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

use super::header::{normalize_cell, normalize_header};

/// Label used in errors for input that did not come from a file.
const STREAM_LABEL: &str = "<stream>";

/// A sales export as read from disk: header names plus string cells.
///
/// Every row has exactly `headers.len()` cells; short records are padded with
/// empty cells and extra trailing cells are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct header names.
    pub fn column_set(&self) -> BTreeSet<&str> {
        self.headers.iter().map(String::as_str).collect()
    }

    /// Position of the first header with this exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads a comma-separated export from a file.
///
/// The file handle is closed before this function returns.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let file = open_input(path)?;
    let table = read_table(BufReader::new(file), path)?;
    tracing::debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.len(),
        "read raw table"
    );
    Ok(table)
}

/// Reads a comma-separated export from any reader (e.g. an upload stream).
pub fn read_raw_table_from_reader<R: Read>(reader: R) -> Result<RawTable> {
    read_table(reader, Path::new(STREAM_LABEL))
}

fn read_table<R: Read>(input: R, path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    // Byte records with lossy decoding: marketplace exports are not reliably UTF-8.
    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .iter()
        .map(|raw| normalize_header(&String::from_utf8_lossy(raw)))
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|e| IngestError::csv(path, &e))?;
        let row: Vec<String> = record
            .iter()
            .map(|raw| normalize_cell(&String::from_utf8_lossy(raw)))
            .collect();
        rows.push(row);
    }

    Ok(RawTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_raw_table() {
        let file = create_temp_csv("A, B ,C\n1,2,3\n4,5,6\n");
        let table = read_raw_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["A", "B", "C"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1], vec!["4", "5", "6"]);
    }

    #[test]
    fn test_read_raw_table_with_bom() {
        let file = create_temp_csv("\u{feff}A,B\n1,2\n");
        let table = read_raw_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["A", "B"]);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let file = create_temp_csv("A,B,C\n1\n4,5,6,7\n");
        let table = read_raw_table(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0], vec!["1", "", ""]);
        assert_eq!(table.rows[1], vec!["4", "5", "6"]);
    }

    #[test]
    fn test_all_empty_row_is_kept() {
        let file = create_temp_csv("A,B,C\n1,2,3\n,,\n\n4,5,6\n");
        let table = read_raw_table(file.path()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[1], vec!["", "", ""]);
        assert_eq!(table.rows[2], vec!["4", "5", "6"]);
    }

    #[test]
    fn test_quoted_fields() {
        let input = "Name,Note\n\"Pen, blue\",\"said \"\"hi\"\"\"\n";
        let table = read_raw_table_from_reader(input.as_bytes()).unwrap();

        assert_eq!(table.rows[0], vec!["Pen, blue", "said \"hi\""]);
    }

    #[test]
    fn test_missing_file() {
        let result = read_raw_table(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_csv("");
        let result = read_raw_table(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let bytes: &[u8] = b"SKU,Quantity\npen\xff,1\n";
        let table = read_raw_table_from_reader(bytes).unwrap();
        assert_eq!(table.rows[0][0], "pen\u{fffd}");
    }

    #[test]
    fn test_column_lookup() {
        let table = RawTable::new(
            vec!["SKU".to_string(), "Quantity".to_string(), "SKU".to_string()],
            vec![],
        );
        assert_eq!(table.column_index("SKU"), Some(0));
        assert_eq!(table.column_index("sku"), None);
        assert_eq!(table.column_set().len(), 2);
    }
}
