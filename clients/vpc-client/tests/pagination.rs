// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Walking paginated collections through `ListRequest::collect_all`.

use std::sync::Arc;

use serde_json::json;
use vpc_client::{Client, ListRequest, NoAuthAuthenticator};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn key(id: &str) -> serde_json::Value {
    json!({
        "href": format!("https://us-south.iaas.cloud.ibm.com/v1/keys/{id}"),
        "id": id,
        "name": format!("key-{id}"),
        "type": "rsa"
    })
}

fn page(items: Vec<serde_json::Value>, next: Option<&str>) -> serde_json::Value {
    let mut body = json!({
        "first": { "href": "https://us-south.iaas.cloud.ibm.com/v1/keys?limit=2" },
        "limit": 2,
        "total_count": 5,
        "keys": items
    });
    if let Some(token) = next {
        body["next"] = json!({
            "href": format!("https://us-south.iaas.cloud.ibm.com/v1/keys?limit=2&start={token}")
        });
    }
    body
}

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::new(
        &format!("{}/v1", server.uri()),
        Arc::new(NoAuthAuthenticator::new()),
    )
    .unwrap();
    (server, client)
}

#[tokio::test]
async fn collect_all_follows_next_links() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/keys"))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![key("k1"), key("k2")],
            Some("tok2"),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/keys"))
        .and(query_param("limit", "2"))
        .and(query_param("start", "tok2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![key("k3"), key("k4")],
            Some("tok3"),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/keys"))
        .and(query_param("start", "tok3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![key("k5")], None)))
        .expect(1)
        .mount(&server)
        .await;

    let keys = client.list_keys().limit(2).collect_all().await.unwrap();

    let ids: Vec<_> = keys.iter().map(|k| k.id.as_str()).collect();
    assert_eq!(ids, vec!["k1", "k2", "k3", "k4", "k5"]);
}

#[tokio::test]
async fn collect_all_stops_on_repeated_token() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/keys"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(vec![key("k1")], Some("loop"))),
        )
        .mount(&server)
        .await;

    let keys = client.list_keys().collect_all().await.unwrap();

    // First page, then the page behind the token, then the repeat is spotted
    assert_eq!(keys.len(), 2);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn collect_all_keeps_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/vpcs/r006-1/routes"))
        .and(query_param("zone.name", "us-south-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "routes": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let routes = client
        .list_vpc_routes()
        .vpc_id("r006-1")
        .zone_name("us-south-2")
        .collect_all()
        .await
        .unwrap();
    assert!(routes.is_empty());
}

#[tokio::test]
async fn collect_all_surfaces_errors() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/keys"))
        .and(query_param_is_missing("start"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(vec![key("k1")], Some("tok2"))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/keys"))
        .and(query_param("start", "tok2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errors": [{ "code": "internal_error", "message": "boom" }],
            "trace": "t-1"
        })))
        .mount(&server)
        .await;

    let err = client.list_keys().collect_all().await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn collect_all_runs_on_a_spawned_task() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/keys"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![key("k1"), key("k2")],
            Some("tok2"),
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/keys"))
        .and(query_param("start", "tok2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![key("k3")], None)))
        .mount(&server)
        .await;

    let task = tokio::spawn(async move { client.list_keys().limit(2).collect_all().await });
    let keys = task.await.unwrap().unwrap();

    assert_eq!(keys.len(), 3);
}
