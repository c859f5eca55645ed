//! CLI library components for the marketplace sales normalizer.

pub mod input;
pub mod logging;
pub mod report;
