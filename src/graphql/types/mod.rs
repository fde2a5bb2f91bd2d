pub mod product;
pub mod source;

pub use product::{Product, Rating};
pub use source::UpstreamSource;
