pub mod aggregator;
pub mod ports;

pub use aggregator::{CatalogAggregator, SourceEndpoints};
