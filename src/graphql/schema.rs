use crate::app::CatalogAggregator;
use crate::graphql::resolvers::Query;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use std::sync::Arc;

/// GraphQL context containing shared application state
pub struct GraphQLContext {
    pub aggregator: Arc<CatalogAggregator>,
}

/// The complete GraphQL schema
pub type GraphQLSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Create a new GraphQL schema backed by the given aggregator
pub fn create_schema(aggregator: Arc<CatalogAggregator>) -> GraphQLSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(GraphQLContext { aggregator })
        .finish()
}
