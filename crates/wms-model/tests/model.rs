//! Tests for wms-model types.

use wms_model::{
    ENRICHED_COLUMNS, EnrichedRecord, MarketplaceVariant, STANDARDIZED_COLUMNS, StandardizedRecord,
};

#[test]
fn enriched_columns_extend_standardized_columns() {
    assert_eq!(&ENRICHED_COLUMNS[..3], &STANDARDIZED_COLUMNS[..]);
    assert_eq!(ENRICHED_COLUMNS[3], "msku");
}

#[test]
fn rename_targets_follow_canonical_order() {
    for variant in MarketplaceVariant::ALL {
        let renames = variant.renames().expect("recognized variant has renames");
        let targets: Vec<&str> = renames.pairs().iter().map(|(_, target)| *target).collect();
        assert_eq!(targets, STANDARDIZED_COLUMNS);
    }
}

#[test]
fn enriched_record_serializes_flat() {
    let record = EnrichedRecord::new(
        StandardizedRecord::new("2025-08-01", "pen-blue", "10"),
        Some("cste-pen".to_string()),
    );
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["sku"], "pen-blue");
    assert_eq!(json["msku"], "cste-pen");

    let round: EnrichedRecord = serde_json::from_value(json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn unmapped_record_round_trips_with_null_msku() {
    let record = EnrichedRecord::new(StandardizedRecord::new("2025-08-02", "pencil", "2"), None);
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["sku"], "pencil");
    assert!(json["msku"].is_null());

    let round: EnrichedRecord = serde_json::from_value(json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn variant_serializes_lowercase() {
    let json = serde_json::to_string(&MarketplaceVariant::Flipkart).expect("serialize variant");
    assert_eq!(json, "\"flipkart\"");
}
