use crate::domain::{Product as DomainProduct, Rating as DomainRating};
use async_graphql::{Object, ID};

/// GraphQL representation of a Product
#[derive(Clone)]
pub struct Product {
    pub inner: DomainProduct,
}

impl From<DomainProduct> for Product {
    fn from(product: DomainProduct) -> Self {
        Self { inner: product }
    }
}

#[Object]
impl Product {
    /// Upstream identifier, numeric or text
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.inner.title
    }

    async fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    async fn category(&self) -> Option<&str> {
        self.inner.category.as_deref()
    }

    async fn price(&self) -> f64 {
        self.inner.price
    }

    /// URL of a representative image
    async fn image(&self) -> Option<&str> {
        self.inner.image.as_deref()
    }

    async fn rating(&self) -> Option<Rating> {
        self.inner.rating.clone().map(Rating::from)
    }
}

/// GraphQL representation of a product Rating
#[derive(Clone)]
pub struct Rating {
    pub inner: DomainRating,
}

impl From<DomainRating> for Rating {
    fn from(rating: DomainRating) -> Self {
        Self { inner: rating }
    }
}

#[Object]
impl Rating {
    async fn rate(&self) -> f64 {
        self.inner.rate
    }

    /// Number of ratings; stock quantity for DummyJSON products
    async fn count(&self) -> u32 {
        self.inner.count
    }
}
