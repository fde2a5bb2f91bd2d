use crate::common::constants::{DUMMY_JSON_SOURCE, FAKE_STORE_SOURCE};
use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{Product, UpstreamSource};
use async_graphql::{Context, FieldResult, Object};

/// Root query object for GraphQL
pub struct Query;

#[Object]
impl Query {
    /// All products from both catalogs, Fake Store first.
    /// Empty when either upstream fails.
    async fn products(&self, ctx: &Context<'_>) -> FieldResult<Vec<Product>> {
        let context = ctx.data::<GraphQLContext>()?;
        let products = context.aggregator.fetch_products().await;
        Ok(products.into_iter().map(Product::from).collect())
    }

    /// The upstream catalogs this service merges, in merge order
    async fn sources(&self, ctx: &Context<'_>) -> FieldResult<Vec<UpstreamSource>> {
        let context = ctx.data::<GraphQLContext>()?;
        let endpoints = context.aggregator.endpoints();

        Ok(vec![
            UpstreamSource {
                name: FAKE_STORE_SOURCE.to_string(),
                url: endpoints.source_a_url.clone(),
            },
            UpstreamSource {
                name: DUMMY_JSON_SOURCE.to_string(),
                url: endpoints.source_b_url.clone(),
            },
        ])
    }
}
