use crate::common::error::CatalogError;
use crate::domain::product::{Product, ProductId, Rating};
use serde::Deserialize;
use std::str::FromStr;

/// Which optional fields DummyJSON records carry into the common shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputVariant {
    /// id, title, category, price and rating only
    #[default]
    Compact,
    /// also description, and image taken from the thumbnail
    Extended,
}

impl FromStr for OutputVariant {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(OutputVariant::Compact),
            "extended" => Ok(OutputVariant::Extended),
            other => Err(CatalogError::Config(format!(
                "Unknown output variant '{}', expected 'compact' or 'extended'",
                other
            ))),
        }
    }
}

/// DummyJSON listing envelope. `total`, `skip` and `limit` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DummyJsonListing {
    pub products: Vec<DummyJsonProduct>,
}

/// Raw DummyJSON record. Only the fields the mapping reads are declared.
#[derive(Debug, Clone, Deserialize)]
pub struct DummyJsonProduct {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub rating: f64,
    pub stock: u32,
}

impl DummyJsonProduct {
    /// Map into the common shape. `stock` becomes `rating.count`.
    pub fn into_product(self, variant: OutputVariant) -> Product {
        let (description, image) = match variant {
            OutputVariant::Compact => (None, None),
            OutputVariant::Extended => (self.description, self.thumbnail),
        };

        Product {
            id: self.id,
            title: self.title,
            description,
            category: self.category,
            price: self.price,
            image,
            rating: Some(Rating {
                rate: self.rating,
                count: self.stock,
            }),
        }
    }
}
