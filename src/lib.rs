pub mod common;
pub mod config;
pub mod graphql;
pub mod server;

// Layered boundaries for application and infrastructure
pub mod app;
pub mod infra;

// Domain data shapes shared across layers
pub mod domain;

pub mod observability;

pub use app::{CatalogAggregator, SourceEndpoints};
pub use common::error::{CatalogError, Result};
pub use domain::{OutputVariant, Product, ProductId, Rating};
