use crate::app::ports::HttpClientPort;
use crate::common::constants::{DUMMY_JSON_SOURCE, DUMMY_JSON_URL, FAKE_STORE_SOURCE, FAKE_STORE_URL};
use crate::common::error::{CatalogError, Result};
use crate::domain::{DummyJsonListing, OutputVariant, Product};
use crate::observability::metrics;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Upstream endpoints the aggregator reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEndpoints {
    /// Flat JSON array already in the common shape
    pub source_a_url: String,
    /// `{ products, total, skip, limit }` envelope
    pub source_b_url: String,
}

impl Default for SourceEndpoints {
    fn default() -> Self {
        Self {
            source_a_url: FAKE_STORE_URL.to_string(),
            source_b_url: DUMMY_JSON_URL.to_string(),
        }
    }
}

/// Fetches both catalogs, maps DummyJSON records into the common shape and
/// returns Fake Store products followed by DummyJSON products.
pub struct CatalogAggregator {
    http: Arc<dyn HttpClientPort>,
    endpoints: SourceEndpoints,
    variant: OutputVariant,
}

impl CatalogAggregator {
    pub fn new(http: Arc<dyn HttpClientPort>, endpoints: SourceEndpoints, variant: OutputVariant) -> Self {
        Self { http, endpoints, variant }
    }

    pub fn endpoints(&self) -> &SourceEndpoints {
        &self.endpoints
    }

    /// Merged product list. Any upstream or decode failure yields an empty list;
    /// the cause is only logged.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Vec<Product> {
        match self.try_fetch_products().await {
            Ok(products) => {
                info!(count = products.len(), "Aggregated products");
                metrics::aggregation::success(products.len());
                products
            }
            Err(e) => {
                error!(error = %e, "Error fetching products");
                metrics::aggregation::failed();
                Vec::new()
            }
        }
    }

    /// Same as [`fetch_products`](Self::fetch_products) but surfaces the first failure.
    pub async fn try_fetch_products(&self) -> Result<Vec<Product>> {
        let (mut products, listing) =
            tokio::try_join!(self.fetch_fake_store(), self.fetch_dummy_json())?;

        let variant = self.variant;
        products.extend(listing.products.into_iter().map(|p| p.into_product(variant)));
        Ok(products)
    }

    async fn fetch_fake_store(&self) -> Result<Vec<Product>> {
        let bytes = self.fetch_source(FAKE_STORE_SOURCE, &self.endpoints.source_a_url).await?;
        let products: Vec<Product> = serde_json::from_slice(&bytes)?;
        debug!(source = FAKE_STORE_SOURCE, count = products.len(), "Decoded products");
        Ok(products)
    }

    async fn fetch_dummy_json(&self) -> Result<DummyJsonListing> {
        let bytes = self.fetch_source(DUMMY_JSON_SOURCE, &self.endpoints.source_b_url).await?;
        let listing: DummyJsonListing = serde_json::from_slice(&bytes)?;
        debug!(source = DUMMY_JSON_SOURCE, count = listing.products.len(), "Decoded products");
        Ok(listing)
    }

    #[instrument(skip(self))]
    async fn fetch_source(&self, source: &'static str, url: &str) -> Result<Vec<u8>> {
        let started = Instant::now();
        let result = self.http.get(url).await;
        metrics::sources::request_duration(source, started.elapsed().as_secs_f64());

        let resp = result.map_err(|message| {
            metrics::sources::request_error(source);
            CatalogError::Transport {
                source_name: source.to_string(),
                message,
            }
        })?;

        if !resp.is_success() {
            metrics::sources::request_error(source);
            return Err(CatalogError::Status {
                source_name: source.to_string(),
                status: resp.status,
            });
        }

        metrics::sources::request_success(source);
        metrics::sources::payload_bytes(source, resp.bytes.len());
        debug!(
            status = resp.status,
            content_type = %resp.content_type,
            content_length = resp.content_length,
            "Fetched upstream payload"
        );
        Ok(resp.bytes)
    }
}
