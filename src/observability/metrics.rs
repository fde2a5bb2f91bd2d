//! Metrics for the catalog aggregator
//!
//! Recording goes through the `metrics` facade. When no recorder is installed
//! every call is a no-op, so tests and the one-shot CLI need no setup.

use std::fmt;
use std::sync::OnceLock;

use ::metrics::Unit;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

use crate::common::error::{CatalogError, Result};

/// All metric names used in the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Sources metrics
    SourcesRequestsSuccess,
    SourcesRequestsError,
    SourcesRequestDuration,
    SourcesPayloadBytes,

    // Aggregation metrics
    AggregationsSuccess,
    AggregationsFailed,
    ProductsReturned,
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::SourcesRequestsSuccess => "catalog_sources_requests_success_total",
            MetricName::SourcesRequestsError => "catalog_sources_requests_error_total",
            MetricName::SourcesRequestDuration => "catalog_sources_request_duration_seconds",
            MetricName::SourcesPayloadBytes => "catalog_sources_payload_bytes",

            MetricName::AggregationsSuccess => "catalog_aggregations_success_total",
            MetricName::AggregationsFailed => "catalog_aggregations_failed_total",
            MetricName::ProductsReturned => "catalog_products_returned",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            SourcesRequestsSuccess,
            SourcesRequestsError,
            SourcesRequestDuration,
            SourcesPayloadBytes,
            AggregationsSuccess,
            AggregationsFailed,
            ProductsReturned,
        ]
        .into_iter()
    }

    pub fn is_histogram(&self) -> bool {
        matches!(
            self,
            MetricName::SourcesRequestDuration
                | MetricName::SourcesPayloadBytes
                | MetricName::ProductsReturned
        )
    }

    /// Returns (phase, description, unit)
    pub fn metadata(&self) -> (&'static str, &'static str, Option<&'static str>) {
        match self {
            MetricName::SourcesRequestsSuccess => ("sources", "Successful upstream requests", None),
            MetricName::SourcesRequestsError => ("sources", "Failed upstream requests", None),
            MetricName::SourcesRequestDuration => ("sources", "Upstream request duration", Some("s")),
            MetricName::SourcesPayloadBytes => ("sources", "Upstream payload size", Some("bytes")),

            MetricName::AggregationsSuccess => ("aggregation", "Queries answered with merged products", None),
            MetricName::AggregationsFailed => ("aggregation", "Queries answered empty after an upstream failure", None),
            MetricName::ProductsReturned => ("aggregation", "Products returned per query", None),
        }
    }
}

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Safe to call more than once.
pub fn init() -> Result<()> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| CatalogError::Config(format!("Failed to install Prometheus recorder: {}", e)))?;
    METRICS_HANDLE.set(handle).ok();

    register_descriptions();
    info!("Metrics system initialized");
    Ok(())
}

/// Describe every metric so the exposition carries HELP text and units
fn register_descriptions() {
    for metric in MetricName::all_metrics() {
        let (_, description, unit) = metric.metadata();
        let unit = match unit {
            Some("s") => Unit::Seconds,
            Some("bytes") => Unit::Bytes,
            _ => Unit::Count,
        };

        if metric.is_histogram() {
            ::metrics::describe_histogram!(metric.as_str(), unit, description);
        } else {
            ::metrics::describe_counter!(metric.as_str(), unit, description);
        }
    }
}

/// Prometheus text exposition, or `None` when metrics are disabled
pub fn render() -> Option<String> {
    METRICS_HANDLE.get().map(|handle| handle.render())
}

// ============================================================================
// Sources Metrics
// ============================================================================

pub mod sources {
    use super::MetricName;

    pub fn request_success(source: &'static str) {
        ::metrics::counter!(MetricName::SourcesRequestsSuccess.as_str(), "source" => source).increment(1);
    }

    pub fn request_error(source: &'static str) {
        ::metrics::counter!(MetricName::SourcesRequestsError.as_str(), "source" => source).increment(1);
    }

    pub fn request_duration(source: &'static str, secs: f64) {
        ::metrics::histogram!(MetricName::SourcesRequestDuration.as_str(), "source" => source).record(secs);
    }

    pub fn payload_bytes(source: &'static str, bytes: usize) {
        ::metrics::histogram!(MetricName::SourcesPayloadBytes.as_str(), "source" => source)
            .record(bytes as f64);
    }
}

// ============================================================================
// Aggregation Metrics
// ============================================================================

pub mod aggregation {
    use super::MetricName;

    pub fn success(products: usize) {
        ::metrics::counter!(MetricName::AggregationsSuccess.as_str()).increment(1);
        ::metrics::histogram!(MetricName::ProductsReturned.as_str()).record(products as f64);
    }

    pub fn failed() {
        ::metrics::counter!(MetricName::AggregationsFailed.as_str()).increment(1);
        ::metrics::histogram!(MetricName::ProductsReturned.as_str()).record(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_follow_naming_convention() {
        for metric in MetricName::all_metrics() {
            assert!(metric.as_str().starts_with("catalog_"));
            assert_eq!(metric.to_string(), metric.as_str());
        }
    }

    #[test]
    fn test_every_metric_has_metadata() {
        let phases: Vec<&str> = MetricName::all_metrics().map(|m| m.metadata().0).collect();
        assert_eq!(phases.len(), 7);
        assert!(phases.iter().all(|p| *p == "sources" || *p == "aggregation"));
    }

    #[test]
    fn test_rendered_metrics_carry_help_text() {
        init().unwrap();
        aggregation::failed();
        sources::request_success("fake_store");

        let body = render().unwrap();
        assert!(body.contains("# HELP catalog_aggregations_failed_total"));
        assert!(body.contains("# HELP catalog_sources_requests_success_total Successful upstream requests"));
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        sources::request_success("fake_store");
        sources::payload_bytes("fake_store", 1024);
        aggregation::failed();
    }
}
