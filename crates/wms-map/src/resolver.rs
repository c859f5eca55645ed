//! In-memory SKU to MSKU index.
//!
//! The index is built once from the mapping rows and never re-reads its
//! source. When the same SKU appears on several rows, the first row in file
//! order is authoritative and later rows are ignored for lookups (they are
//! still reported through [`SkuResolver::duplicate_skus`]).

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};

use wms_model::{EnrichedRecord, MappingEntry, StandardizedRecord};

use crate::error::{MappingError, Result};

/// Label used in errors for mappings that did not come from a file.
const STREAM_LABEL: &str = "<stream>";

/// Resolves marketplace SKUs to master SKUs.
#[derive(Debug, Clone, Default)]
pub struct SkuResolver {
    index: HashMap<String, String>,
    duplicates: BTreeSet<String>,
    entry_count: usize,
    source: Option<PathBuf>,
}

/// Output of resolving a whole standardized table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// One enriched record per input record, in input order.
    pub records: Vec<EnrichedRecord>,
    /// Distinct SKUs that resolved to nothing, in order of first appearance.
    pub unmapped: Vec<String>,
    /// Number of records (not distinct SKUs) that resolved.
    pub mapped_count: usize,
}

impl Resolution {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn unmapped_count(&self) -> usize {
        self.unmapped.len()
    }

    pub fn is_fully_mapped(&self) -> bool {
        self.unmapped.is_empty()
    }
}

impl SkuResolver {
    /// Builds the index from mapping rows in order.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = MappingEntry>,
    {
        let mut index = HashMap::new();
        let mut duplicates = BTreeSet::new();
        let mut entry_count = 0usize;
        for entry in entries {
            entry_count += 1;
            if index.contains_key(&entry.sku) {
                duplicates.insert(entry.sku);
                continue;
            }
            index.insert(entry.sku, entry.msku);
        }
        Self {
            index,
            duplicates,
            entry_count,
            source: None,
        }
    }

    /// Loads a `sku,msku` CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MappingError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                MappingError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        let mut resolver = read_mapping(BufReader::new(file), path)?;
        resolver.source = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            entries = resolver.entry_count,
            distinct = resolver.len(),
            duplicates = resolver.duplicates.len(),
            "loaded sku mapping"
        );
        if !resolver.duplicates.is_empty() {
            tracing::warn!(
                path = %path.display(),
                duplicates = resolver.duplicates.len(),
                "mapping file repeats skus; first occurrence wins"
            );
        }
        Ok(resolver)
    }

    /// Loads a `sku,msku` table from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        read_mapping(reader, Path::new(STREAM_LABEL))
    }

    /// Looks up the master SKU for `sku`.
    ///
    /// A mapping row with a blank `msku` resolves to `None`.
    pub fn resolve(&self, sku: &str) -> Option<&str> {
        self.index
            .get(sku)
            .map(String::as_str)
            .filter(|msku| !msku.is_empty())
    }

    /// Resolves every record in order, collecting the distinct misses.
    pub fn resolve_all(&self, records: &[StandardizedRecord]) -> Resolution {
        let mut resolution = Resolution {
            records: Vec::with_capacity(records.len()),
            ..Resolution::default()
        };
        let mut missed = HashSet::new();
        for record in records {
            let msku = self.resolve(&record.sku).map(str::to_string);
            if msku.is_some() {
                resolution.mapped_count += 1;
            } else if missed.insert(record.sku.as_str()) {
                resolution.unmapped.push(record.sku.clone());
            }
            resolution
                .records
                .push(EnrichedRecord::new(record.clone(), msku));
        }
        tracing::debug!(
            total = resolution.total(),
            mapped = resolution.mapped_count,
            unmapped = resolution.unmapped_count(),
            "resolved skus"
        );
        resolution
    }

    /// Number of distinct SKUs in the index.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of mapping rows read, duplicates included.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// SKUs that appeared on more than one mapping row.
    pub fn duplicate_skus(&self) -> &BTreeSet<String> {
        &self.duplicates
    }

    /// File the index was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn read_mapping<R: Read>(input: R, path: &Path) -> Result<SkuResolver> {
    let malformed = |message: String| MappingError::Malformed {
        path: path.to_path_buf(),
        message,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let headers = reader.headers().map_err(|e| malformed(e.to_string()))?;
    for required in ["sku", "msku"] {
        if !headers.iter().any(|h| h == required) {
            return Err(malformed(format!("missing '{required}' column")));
        }
    }

    let mut entries = Vec::new();
    for (idx, row) in reader.deserialize::<MappingEntry>().enumerate() {
        // Header is line 1.
        let entry = row.map_err(|e| malformed(format!("row {}: {e}", idx + 2)))?;
        entries.push(entry);
    }
    Ok(SkuResolver::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(rows: &[(&str, &str)]) -> SkuResolver {
        SkuResolver::from_entries(rows.iter().map(|(s, m)| MappingEntry::new(*s, *m)))
    }

    #[test]
    fn first_occurrence_wins() {
        let r = resolver(&[("s", "A"), ("s", "B")]);
        assert_eq!(r.resolve("s"), Some("A"));
        assert_eq!(r.len(), 1);
        assert_eq!(r.entry_count(), 2);
        assert!(r.duplicate_skus().contains("s"));
    }

    #[test]
    fn blank_msku_claims_the_slot() {
        let r = resolver(&[("pen", ""), ("pen", "cste-pen")]);
        assert_eq!(r.resolve("pen"), None);
    }

    #[test]
    fn lookup_is_exact() {
        let r = resolver(&[("pen-blue", "cste-pen")]);
        assert_eq!(r.resolve("pen-blue"), Some("cste-pen"));
        assert_eq!(r.resolve("PEN-BLUE"), None);
        assert_eq!(r.resolve("pen"), None);
    }

    #[test]
    fn resolve_all_counts_records_not_skus() {
        let r = resolver(&[("pen", "cste-pen")]);
        let records = vec![
            StandardizedRecord::new("2025-08-01", "pen", "1"),
            StandardizedRecord::new("2025-08-02", "pen", "2"),
            StandardizedRecord::new("2025-08-03", "ink", "3"),
            StandardizedRecord::new("2025-08-04", "ink", "4"),
        ];
        let resolution = r.resolve_all(&records);

        assert_eq!(resolution.total(), 4);
        assert_eq!(resolution.mapped_count, 2);
        assert_eq!(resolution.unmapped_count(), 1);
        assert_eq!(resolution.unmapped, vec!["ink".to_string()]);
        assert_eq!(resolution.records[1].msku.as_deref(), Some("cste-pen"));
        assert_eq!(resolution.records[2].msku, None);
    }

    #[test]
    fn unmapped_skus_keep_first_appearance_order() {
        let r = resolver(&[]);
        let records = vec![
            StandardizedRecord::new("2025-08-01", "zeta", "1"),
            StandardizedRecord::new("2025-08-02", "alpha", "1"),
            StandardizedRecord::new("2025-08-03", "zeta", "1"),
            StandardizedRecord::new("2025-08-04", "mid", "1"),
        ];
        let resolution = r.resolve_all(&records);

        assert_eq!(resolution.unmapped, vec!["zeta", "alpha", "mid"]);
        assert_eq!(resolution.unmapped_count(), 3);
    }

    #[test]
    fn reads_mapping_with_extra_columns_and_whitespace() {
        let input = "sku, msku ,note\n pen ,cste-pen,x\npencil,cste-pencil\n";
        let r = SkuResolver::from_reader(input.as_bytes()).unwrap();
        assert_eq!(r.resolve("pen"), Some("cste-pen"));
        assert_eq!(r.resolve("pencil"), Some("cste-pencil"));
        assert!(r.source().is_none());
    }

    #[test]
    fn missing_header_is_malformed() {
        let err = SkuResolver::from_reader("sku,master\npen,x\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MappingError::Malformed { .. }));
        assert!(err.to_string().contains("missing 'msku' column"));
    }
}
