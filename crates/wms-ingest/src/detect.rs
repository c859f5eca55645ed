//! Marketplace format detection by header-set containment.

use std::collections::HashSet;

use wms_model::MarketplaceVariant;

/// Classifies an export by its column headers.
///
/// Variants are tried in [`MarketplaceVariant::ALL`] order and the first one
/// whose required columns are all present wins. Header names are compared
/// exactly; callers normalize them first.
pub fn detect<I, S>(columns: I) -> MarketplaceVariant
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let present: HashSet<String> = columns
        .into_iter()
        .map(|column| column.as_ref().to_string())
        .collect();
    let variant = MarketplaceVariant::ALL
        .into_iter()
        .find(|variant| {
            variant
                .required_columns()
                .iter()
                .all(|required| present.contains(*required))
        })
        .unwrap_or(MarketplaceVariant::Unrecognized);
    tracing::debug!(variant = %variant, columns = present.len(), "detected format");
    variant
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_each_variant() {
        assert_eq!(
            detect(["FNSKU", "Event Type", "Reference ID", "Date", "MSKU", "Quantity"]),
            MarketplaceVariant::Amazon
        );
        assert_eq!(
            detect(["Order State", "FSN", "Shipment ID", "Ordered On"]),
            MarketplaceVariant::Flipkart
        );
        assert_eq!(
            detect([
                "Sub Order No",
                "Packet Id",
                "Supplier Listed Price (Incl. GST + Commission)"
            ]),
            MarketplaceVariant::Meesho
        );
    }

    #[test]
    fn test_partial_match_is_unrecognized() {
        assert_eq!(
            detect(["FNSKU", "Event Type", "Quantity"]),
            MarketplaceVariant::Unrecognized
        );
        assert_eq!(detect(Vec::<String>::new()), MarketplaceVariant::Unrecognized);
    }

    #[test]
    fn test_detection_is_case_sensitive() {
        assert_eq!(
            detect(["fnsku", "event type", "reference id"]),
            MarketplaceVariant::Unrecognized
        );
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        let mut columns: Vec<&str> = Vec::new();
        columns.extend(MarketplaceVariant::Meesho.required_columns());
        columns.extend(MarketplaceVariant::Flipkart.required_columns());
        assert_eq!(detect(&columns), MarketplaceVariant::Flipkart);

        columns.extend(MarketplaceVariant::Amazon.required_columns());
        assert_eq!(detect(&columns), MarketplaceVariant::Amazon);
    }
}
