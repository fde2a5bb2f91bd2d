// Domain data shapes shared across layers

pub mod product;
pub mod sources;

pub use product::{Product, ProductId, Rating};
pub use sources::{DummyJsonListing, DummyJsonProduct, OutputVariant};
