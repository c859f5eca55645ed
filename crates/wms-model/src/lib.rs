pub mod mapping;
pub mod numeric;
pub mod record;
pub mod variant;

pub use mapping::MappingEntry;
pub use numeric::parse_i64;
pub use record::{
    AmazonRow, ENRICHED_COLUMNS, EnrichedRecord, FlipkartRow, MarketplaceRow, MeeshoRow,
    STANDARDIZED_COLUMNS, StandardizedRecord,
};
pub use variant::{ColumnRenames, MarketplaceVariant};
