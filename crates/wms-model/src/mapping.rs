//! SKU to master SKU mapping rows.

use serde::{Deserialize, Serialize};

/// One row of the `sku,msku` mapping resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Marketplace-specific SKU (lookup key).
    pub sku: String,
    /// Canonical master SKU. Blank cells deserialize to an empty string.
    #[serde(default)]
    pub msku: String,
}

impl MappingEntry {
    pub fn new(sku: impl Into<String>, msku: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            msku: msku.into(),
        }
    }
}
