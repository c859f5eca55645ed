//! Sales records at each stage of the pipeline.

use serde::{Deserialize, Serialize};

use crate::numeric::parse_i64;
use crate::variant::MarketplaceVariant;

/// Canonical column order of a standardized table.
pub const STANDARDIZED_COLUMNS: [&str; 3] = ["order_date", "sku", "quantity"];

/// Canonical column order of an enriched (exported) table.
pub const ENRICHED_COLUMNS: [&str; 4] = ["order_date", "sku", "quantity", "msku"];

/// One Amazon export row, restricted to the columns the pipeline uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmazonRow {
    pub date: String,
    pub msku: String,
    pub quantity: String,
}

/// One Flipkart export row, restricted to the columns the pipeline uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipkartRow {
    pub ordered_on: String,
    pub sku: String,
    pub quantity: String,
}

/// One Meesho export row, restricted to the columns the pipeline uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeeshoRow {
    pub order_date: String,
    pub sku: String,
    pub quantity: String,
}

/// A raw sales row after format detection, tagged by marketplace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketplaceRow {
    Amazon(AmazonRow),
    Flipkart(FlipkartRow),
    Meesho(MeeshoRow),
}

impl MarketplaceRow {
    pub fn amazon(date: String, msku: String, quantity: String) -> Self {
        MarketplaceRow::Amazon(AmazonRow {
            date,
            msku,
            quantity,
        })
    }

    pub fn flipkart(ordered_on: String, sku: String, quantity: String) -> Self {
        MarketplaceRow::Flipkart(FlipkartRow {
            ordered_on,
            sku,
            quantity,
        })
    }

    pub fn meesho(order_date: String, sku: String, quantity: String) -> Self {
        MarketplaceRow::Meesho(MeeshoRow {
            order_date,
            sku,
            quantity,
        })
    }

    pub fn variant(&self) -> MarketplaceVariant {
        match self {
            MarketplaceRow::Amazon(_) => MarketplaceVariant::Amazon,
            MarketplaceRow::Flipkart(_) => MarketplaceVariant::Flipkart,
            MarketplaceRow::Meesho(_) => MarketplaceVariant::Meesho,
        }
    }
}

/// A sales record in the canonical three-column shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedRecord {
    /// Order date as it appeared in the source export.
    pub order_date: String,
    /// Marketplace-specific SKU.
    pub sku: String,
    /// Quantity as source text.
    pub quantity: String,
}

impl StandardizedRecord {
    pub fn new(
        order_date: impl Into<String>,
        sku: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            order_date: order_date.into(),
            sku: sku.into(),
            quantity: quantity.into(),
        }
    }

    /// Parses the quantity as an integer, `None` when blank or not integer-like.
    pub fn quantity_value(&self) -> Option<i64> {
        parse_i64(&self.quantity)
    }
}

impl From<MarketplaceRow> for StandardizedRecord {
    fn from(row: MarketplaceRow) -> Self {
        match row {
            MarketplaceRow::Amazon(AmazonRow {
                date,
                msku,
                quantity,
            }) => Self::new(date, msku, quantity),
            MarketplaceRow::Flipkart(FlipkartRow {
                ordered_on,
                sku,
                quantity,
            }) => Self::new(ordered_on, sku, quantity),
            MarketplaceRow::Meesho(MeeshoRow {
                order_date,
                sku,
                quantity,
            }) => Self::new(order_date, sku, quantity),
        }
    }
}

/// A standardized record with its resolved master SKU, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: StandardizedRecord,
    pub msku: Option<String>,
}

impl EnrichedRecord {
    pub fn new(record: StandardizedRecord, msku: Option<String>) -> Self {
        Self { record, msku }
    }

    pub fn is_mapped(&self) -> bool {
        self.msku.is_some()
    }

    /// Cells in [`ENRICHED_COLUMNS`] order; an unresolved `msku` is empty.
    pub fn to_row(&self) -> [&str; 4] {
        [
            self.record.order_date.as_str(),
            self.record.sku.as_str(),
            self.record.quantity.as_str(),
            self.msku.as_deref().unwrap_or(""),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amazon_row_uses_msku_column_as_sku() {
        let row = MarketplaceRow::Amazon(AmazonRow {
            date: "2025-08-01".to_string(),
            msku: "pen-blue".to_string(),
            quantity: "10".to_string(),
        });
        assert_eq!(row.variant(), MarketplaceVariant::Amazon);

        let record = StandardizedRecord::from(row);
        assert_eq!(record, StandardizedRecord::new("2025-08-01", "pen-blue", "10"));
        assert_eq!(record.quantity_value(), Some(10));
    }

    #[test]
    fn rename_tables_build_their_own_variant() {
        for variant in MarketplaceVariant::ALL {
            let renames = variant.renames().unwrap();
            let row = (renames.into_row)("d".to_string(), "s".to_string(), "1".to_string());
            assert_eq!(row.variant(), variant);
            assert_eq!(StandardizedRecord::from(row), StandardizedRecord::new("d", "s", "1"));
        }
    }

    #[test]
    fn unmapped_record_exports_empty_msku() {
        let record = EnrichedRecord::new(StandardizedRecord::new("2025-08-02", "pencil", "2"), None);
        assert!(!record.is_mapped());
        assert_eq!(record.to_row(), ["2025-08-02", "pencil", "2", ""]);
    }

    #[test]
    fn quantity_value_rejects_non_integers() {
        assert_eq!(StandardizedRecord::new("", "a", "").quantity_value(), None);
        assert_eq!(StandardizedRecord::new("", "a", "two").quantity_value(), None);
        assert_eq!(StandardizedRecord::new("", "a", " 7 ").quantity_value(), Some(7));
    }
}
