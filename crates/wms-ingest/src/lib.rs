//! Sales export ingestion.
//!
//! This crate reads marketplace sales exports (CSV), classifies them into a
//! known [`MarketplaceVariant`](wms_model::MarketplaceVariant) by header set,
//! and projects them onto the canonical `order_date, sku, quantity` records.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use wms_ingest::{detect, read_raw_table, standardize};
//!
//! let table = read_raw_table(Path::new("dummy_fk_sales.csv"))?;
//! let variant = detect(&table.headers);
//! let records = standardize(table, variant)?;
//! ```

mod csv;
mod detect;
mod error;
mod standardize;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{RawTable, normalize_cell, normalize_header, read_raw_table, read_raw_table_from_reader};

// === Detection and Standardization ===
pub use detect::detect;
pub use standardize::{project_rows, standardize};
