//! Marketplace variants and their fixed export schemas.
//!
//! Every supported marketplace publishes sales exports with its own header
//! names. A variant is identified by a set of required columns and carries a
//! static rename table that projects its source columns onto the canonical
//! `order_date, sku, quantity` shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::record::MarketplaceRow;

/// A supported marketplace export schema.
///
/// `Unrecognized` is the result of detection when no known schema matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketplaceVariant {
    /// Amazon inventory-event export.
    Amazon,
    /// Flipkart order export.
    Flipkart,
    /// Meesho supplier order export.
    Meesho,
    /// Header set matches none of the known schemas.
    Unrecognized,
}

/// Source column names projected onto the canonical record fields, plus the
/// constructor for the variant's typed row.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRenames {
    /// Source column that becomes `order_date`.
    pub order_date: &'static str,
    /// Source column that becomes `sku`.
    pub sku: &'static str,
    /// Source column that becomes `quantity`.
    pub quantity: &'static str,
    /// Builds the typed row from `(order_date, sku, quantity)` cells.
    pub into_row: fn(String, String, String) -> MarketplaceRow,
}

impl ColumnRenames {
    /// Returns `(source, canonical)` pairs in canonical column order.
    pub fn pairs(&self) -> [(&'static str, &'static str); 3] {
        [
            (self.order_date, "order_date"),
            (self.sku, "sku"),
            (self.quantity, "quantity"),
        ]
    }
}

const AMAZON_REQUIRED: &[&str] = &["FNSKU", "Event Type", "Reference ID"];
const FLIPKART_REQUIRED: &[&str] = &["Order State", "FSN", "Shipment ID"];
const MEESHO_REQUIRED: &[&str] = &[
    "Sub Order No",
    "Packet Id",
    "Supplier Listed Price (Incl. GST + Commission)",
];

// Amazon's `MSKU` column holds the seller SKU that needs mapping.
const AMAZON_RENAMES: ColumnRenames = ColumnRenames {
    into_row: MarketplaceRow::amazon,
    order_date: "Date",
    sku: "MSKU",
    quantity: "Quantity",
};
const FLIPKART_RENAMES: ColumnRenames = ColumnRenames {
    into_row: MarketplaceRow::flipkart,
    order_date: "Ordered On",
    sku: "SKU",
    quantity: "Quantity",
};
const MEESHO_RENAMES: ColumnRenames = ColumnRenames {
    into_row: MarketplaceRow::meesho,
    order_date: "Order Date",
    sku: "SKU",
    quantity: "Quantity",
};

impl MarketplaceVariant {
    /// Recognized variants in detection priority order.
    pub const ALL: [MarketplaceVariant; 3] = [
        MarketplaceVariant::Amazon,
        MarketplaceVariant::Flipkart,
        MarketplaceVariant::Meesho,
    ];

    /// Returns the lowercase variant name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketplaceVariant::Amazon => "amazon",
            MarketplaceVariant::Flipkart => "flipkart",
            MarketplaceVariant::Meesho => "meesho",
            MarketplaceVariant::Unrecognized => "unrecognized",
        }
    }

    /// Returns the display label used in messages and tables.
    pub fn label(&self) -> &'static str {
        match self {
            MarketplaceVariant::Amazon => "Amazon",
            MarketplaceVariant::Flipkart => "Flipkart",
            MarketplaceVariant::Meesho => "Meesho",
            MarketplaceVariant::Unrecognized => "Unrecognized",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, MarketplaceVariant::Unrecognized)
    }

    /// Header names that must all be present for a file to be this variant.
    ///
    /// Empty for `Unrecognized`.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            MarketplaceVariant::Amazon => AMAZON_REQUIRED,
            MarketplaceVariant::Flipkart => FLIPKART_REQUIRED,
            MarketplaceVariant::Meesho => MEESHO_REQUIRED,
            MarketplaceVariant::Unrecognized => &[],
        }
    }

    /// Rename table for this variant, `None` for `Unrecognized`.
    pub fn renames(&self) -> Option<&'static ColumnRenames> {
        match self {
            MarketplaceVariant::Amazon => Some(&AMAZON_RENAMES),
            MarketplaceVariant::Flipkart => Some(&FLIPKART_RENAMES),
            MarketplaceVariant::Meesho => Some(&MEESHO_RENAMES),
            MarketplaceVariant::Unrecognized => None,
        }
    }
}

impl fmt::Display for MarketplaceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MarketplaceVariant {
    type Err = String;

    /// Parse a variant name (case-insensitive). `fk` is accepted for Flipkart.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "amazon" => Ok(MarketplaceVariant::Amazon),
            "flipkart" | "fk" => Ok(MarketplaceVariant::Flipkart),
            "meesho" => Ok(MarketplaceVariant::Meesho),
            _ => Err(format!("Unknown marketplace variant: {s}")),
        }
    }
}
