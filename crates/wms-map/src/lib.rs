//! SKU to master SKU (MSKU) resolution.
//!
//! [`SkuResolver`] loads a `sku,msku` mapping table once and answers point
//! lookups against it. [`SkuResolver::resolve_all`] enriches a standardized
//! table and reports which SKUs had no mapping.

mod error;
mod resolver;

pub use error::{MappingError, Result};
pub use resolver::{Resolution, SkuResolver};
