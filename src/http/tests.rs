//! Tests for the orders API client

use super::*;
use crate::config::ExportConfig;
use crate::error::Error;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> ExportConfig {
    ExportConfig::new("test-token").with_base_url(base_url)
}

#[tokio::test]
async fn test_fetch_page_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/orders"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [{"id": "o1", "status": "delivered", "total": "$12.34"}],
            "meta": {"pagination": {"page": 1, "next_page": null}}
        })))
        .mount(&mock_server)
        .await;

    let client = OrdersClient::new(&test_config(&mock_server.uri())).unwrap();
    let page = client.fetch_page(1).await.unwrap();

    assert_eq!(page.orders.len(), 1);
    assert_eq!(page.orders[0].id, "o1");
    assert_eq!(page.meta.pagination.next_page, None);
}

#[tokio::test]
async fn test_fetch_page_sends_session_cookie_and_identity_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/orders"))
        .and(query_param("page", "2"))
        .and(header("Cookie", "_instacart_session_id=test-token;"))
        .and(header("X-Client-Identifier", "web"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [],
            "meta": {"pagination": {"page": 2, "next_page": null}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OrdersClient::new(&test_config(&mock_server.uri())).unwrap();
    client.fetch_page(2).await.unwrap();
}

#[tokio::test]
async fn test_fetch_page_non_2xx_maps_to_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/orders"))
        .respond_with(ResponseTemplate::new(401).set_body_string("session expired"))
        .mount(&mock_server)
        .await;

    let client = OrdersClient::new(&test_config(&mock_server.uri())).unwrap();
    let err = client.fetch_page(1).await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "session expired");
        }
        other => panic!("expected HttpStatus, got {other}"),
    }
}

#[tokio::test]
async fn test_fetch_page_invalid_json_maps_to_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = OrdersClient::new(&test_config(&mock_server.uri())).unwrap();
    let err = client.fetch_page(3).await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "got {err}");
    assert!(err.to_string().contains("page 3"));
}

#[tokio::test]
async fn test_fetch_page_missing_pagination_metadata_maps_to_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .mount(&mock_server)
        .await;

    let client = OrdersClient::new(&test_config(&mock_server.uri())).unwrap();
    let err = client.fetch_page(1).await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "got {err}");
}

#[tokio::test]
async fn test_fetch_page_transport_failure_is_not_end_of_pages() {
    // bind a listener, take its address, then shut it down
    // (a dropped wiremock MockServer goes back to a pool and keeps listening,
    // so use a raw TcpListener to get a port that actually refuses connections)
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = OrdersClient::new(&test_config(&uri)).unwrap();
    let err = client.fetch_page(1).await.unwrap_err();

    assert!(matches!(err, Error::Http(_)), "got {err}");
}

#[test]
fn test_debug_redacts_credential() {
    let client = OrdersClient::new(&test_config("http://localhost:1")).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("base_url"));
    assert!(!debug.contains("test-token"));
}
