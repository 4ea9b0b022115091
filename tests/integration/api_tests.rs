// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::*;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use wikigroup::presentation::routes;
use wiremock::MockServer;

async fn test_app(upstream: &MockServer) -> TestServer {
    let service = Arc::new(grouping_service(upstream));
    TestServer::new(routes::routes(service)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let upstream = MockServer::start().await;
    let server = test_app(&upstream).await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_version() {
    let upstream = MockServer::start().await;
    let server = test_app(&upstream).await;

    let response = server.get("/v1/version").await;
    response.assert_text(env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_group_endpoint_returns_mapping() {
    let upstream = MockServer::start().await;
    mount_page(&upstream, "/wiki/List_of_animals", ANIMALS_PAGE).await;
    mount_page(&upstream, "/wiki/Lion", LION_PAGE).await;
    mount_error(&upstream, "/wiki/Tiger", 503).await;
    let server = test_app(&upstream).await;

    let response = server
        .post("/v1/group")
        .json(&json!({ "page": "List_of_animals", "column": "Habitat" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["column"], "Habitat");

    let keys: Vec<&String> = body["data"].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 3);
    assert_eq!(
        body["data"]["Savanna"],
        json!([{ "name": "Lion", "image": "https://upload.wikimedia.org/lion.jpg" }])
    );
    assert_eq!(body["data"]["Forest"], json!([{ "name": "Tiger", "image": "" }]));
}

#[tokio::test]
async fn test_group_endpoint_with_query_params() {
    let upstream = MockServer::start().await;
    mount_page(&upstream, "/wiki/List_of_animals", ANIMALS_PAGE).await;
    mount_page(&upstream, "/wiki/Lion", LION_PAGE).await;
    mount_page(&upstream, "/wiki/Tiger", TIGER_PAGE).await;
    let server = test_app(&upstream).await;

    let response = server
        .get("/v1/group")
        .add_query_param("page", "List_of_animals")
        .add_query_param("column", "habitat")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["data"]["Forest"],
        json!([{ "name": "Tiger", "image": "https://upload.wikimedia.org/tiger.jpg" }])
    );
}

#[tokio::test]
async fn test_group_endpoint_upstream_failure_is_empty_result() {
    let upstream = MockServer::start().await;
    mount_error(&upstream, "/wiki/Missing_page", 404).await;
    let server = test_app(&upstream).await;

    let response = server
        .post("/v1/group")
        .json(&json!({ "page": "Missing_page", "column": "Habitat" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], json!({}));
}

#[tokio::test]
async fn test_group_endpoint_requires_both_fields() {
    let upstream = MockServer::start().await;
    let server = test_app(&upstream).await;

    let response = server
        .post("/v1/group")
        .json(&json!({ "page": "List_of_animals" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
