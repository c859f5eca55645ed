//! CSV reading utilities.

mod header;
mod reader;

pub use header::{normalize_cell, normalize_header};
pub use reader::{RawTable, read_raw_table, read_raw_table_from_reader};
