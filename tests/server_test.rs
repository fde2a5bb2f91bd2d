use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use catalog_aggregator::app::ports::{HttpClientPort, HttpGetResult};
use catalog_aggregator::server::create_server;
use catalog_aggregator::{CatalogAggregator, OutputVariant, SourceEndpoints};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const FAKE_STORE: &str = "http://fakestore.test/products";
const DUMMY_JSON: &str = "http://dummyjson.test/products";

/// Upstreams answering with one product each
struct StaticCatalogs;

#[async_trait]
impl HttpClientPort for StaticCatalogs {
    async fn get(&self, url: &str) -> Result<HttpGetResult, String> {
        let body = match url {
            FAKE_STORE => json!([{ "id": 1, "title": "Shirt", "price": 20, "rating": { "rate": 4.1, "count": 120 } }]),
            DUMMY_JSON => json!({ "products": [{ "id": 5, "title": "Mug", "price": 8, "rating": 3.2, "stock": 0 }] }),
            other => return Err(format!("unexpected url {}", other)),
        };
        let bytes = body.to_string().into_bytes();
        Ok(HttpGetResult {
            status: 200,
            content_length: bytes.len() as u64,
            bytes,
            content_type: "application/json".to_string(),
        })
    }
}

fn app() -> Router {
    let endpoints = SourceEndpoints {
        source_a_url: FAKE_STORE.to_string(),
        source_b_url: DUMMY_JSON.to_string(),
    };
    let aggregator = CatalogAggregator::new(Arc::new(StaticCatalogs), endpoints, OutputVariant::Compact);
    create_server(Arc::new(aggregator))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn merged_ids() -> Value {
    json!({ "data": { "products": [{ "id": "1" }, { "id": "5" }] } })
}

#[tokio::test]
async fn test_health_reports_service_and_version() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "status": "healthy",
            "service": "catalog_aggregator",
            "version": env!("CARGO_PKG_VERSION")
        })
    );
}

#[tokio::test]
async fn test_metrics_not_found_without_recorder() {
    let response = app()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_graphql_post_returns_merged_products() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": "{ products { id } }" }).to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, merged_ids());
}

#[tokio::test]
async fn test_graphql_get_returns_merged_products() {
    let request = Request::builder()
        .uri("/graphql?query=%7B%20products%20%7B%20id%20%7D%20%7D")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, merged_ids());
}

#[tokio::test]
async fn test_graphiql_serves_html() {
    let response = app()
        .oneshot(Request::builder().uri("/graphiql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
}
