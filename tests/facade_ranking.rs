mod common;

use serde_json::json;
use shortener_client::prelude::*;

#[tokio::test]
async fn test_ranking_array_preserves_server_order() {
    let (client, transport) = common::create_test_client();
    transport.push_ok(json!([
        {"code": "CCCCC", "hits": 7},
        {"code": "AAAAA", "hits": 10},
        {"code": "BBBBB", "hits": 5}
    ]));

    client.ranking.fetch_ranking().await;

    let entries = client.ranking.ranking();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].code, "CCCCC");
    assert_eq!(entries[1].code, "AAAAA");
    assert_eq!(entries[2].code, "BBBBB");
    assert_eq!(transport.requests()[0].path, "/api/ranking");
}

#[tokio::test]
async fn test_ranking_single_object_normalized_to_one_element() {
    let (client, transport) = common::create_test_client();
    transport.push_ok(json!({"code": "AAAAA", "hits": 10}));

    client.ranking.fetch_ranking().await;

    let entries = client.ranking.ranking();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].code, "AAAAA");
    assert_eq!(entries[0].hits, 10);
}

#[tokio::test]
async fn test_ranking_empty_body_is_empty_list_not_error() {
    let (client, transport) = common::create_test_client();
    transport.push_empty();

    client.ranking.fetch_ranking().await;

    assert!(client.ranking.ranking().is_empty());
    assert!(client.ranking.error().is_none());
}

#[tokio::test]
async fn test_ranking_failure_maps_to_fixed_message() {
    let (client, transport) = common::create_test_client();
    transport.push_err(ApiError::connection("connection refused"));

    client.ranking.fetch_ranking().await;

    assert_eq!(
        client.ranking.error().as_deref(),
        Some("error loading ranking")
    );
    assert!(client.ranking.ranking().is_empty());
}

#[tokio::test]
async fn test_ranking_invalid_element_fails_whole_operation() {
    let (client, transport) = common::create_test_client();
    transport.push_ok(json!([
        {"code": "AAAAA", "hits": 10},
        {"code": "BBBBB", "hits": "oops"}
    ]));

    client.ranking.fetch_ranking().await;

    assert_eq!(
        client.ranking.error().as_deref(),
        Some("error loading ranking")
    );
    assert!(client.ranking.ranking().is_empty());
}

#[tokio::test]
async fn test_reload_clears_previous_error() {
    let (client, transport) = common::create_test_client();
    transport.push_err(ApiError::http_status(500, "HTTP 500"));
    transport.push_ok(json!([{"code": "AAAAA", "hits": 1}]));

    client.ranking.fetch_ranking().await;
    assert!(client.ranking.error().is_some());

    client.ranking.fetch_ranking().await;
    assert!(client.ranking.error().is_none());
    assert_eq!(client.ranking.ranking().len(), 1);
}
