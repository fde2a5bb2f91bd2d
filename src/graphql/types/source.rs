use async_graphql::SimpleObject;

/// An upstream catalog the service reads from
#[derive(Clone, Debug, SimpleObject)]
pub struct UpstreamSource {
    pub name: String,
    pub url: String,
}
