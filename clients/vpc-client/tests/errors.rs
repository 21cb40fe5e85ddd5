// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Local validation and error-response decoding.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;
use test_case::test_case;
use vpc_client::{Client, Error, NoAuthAuthenticator};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::new(
        &format!("{}/v1", server.uri()),
        Arc::new(NoAuthAuthenticator::new()),
    )
    .expect("client");
    (server, client)
}

fn missing(err: Error) -> Vec<&'static str> {
    match err {
        Error::MissingParameters(names) => names,
        other => panic!("expected MissingParameters, got {other:?}"),
    }
}

async fn assert_nothing_sent(server: &MockServer) {
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "no request may be sent");
}

// ============================================================================
// Missing parameters
// ============================================================================

#[tokio::test]
async fn missing_path_parameter() {
    let (server, client) = setup().await;
    let err = client.get_vpc().send().await.unwrap_err();
    assert_eq!(missing(err), vec!["id"]);
    assert_nothing_sent(&server).await;
}

#[tokio::test]
async fn every_missing_parameter_is_named() {
    let (server, client) = setup().await;
    let err = client
        .delete_load_balancer_pool_member()
        .pool_id("pool-1")
        .send()
        .await
        .unwrap_err();
    assert_eq!(missing(err), vec!["load_balancer_id", "id"]);
    assert_nothing_sent(&server).await;
}

#[tokio::test]
async fn missing_required_body_members() {
    let (server, client) = setup().await;
    let err = client
        .create_vpc_address_prefix()
        .vpc_id("r006-1")
        .name("no-cidr")
        .send()
        .await
        .unwrap_err();
    assert_eq!(missing(err), vec!["cidr", "zone"]);

    let err = client
        .create_instance_action()
        .instance_id("inst-1")
        .force(true)
        .send()
        .await
        .unwrap_err();
    assert_eq!(missing(err), vec!["type"]);
    assert_nothing_sent(&server).await;
}

#[tokio::test]
async fn missing_whole_body() {
    let (server, client) = setup().await;
    let err = client.create_subnet().send().await.unwrap_err();
    assert_eq!(missing(err), vec!["body"]);

    let err = client.set_subnet_public_gateway().send().await.unwrap_err();
    assert_eq!(missing(err), vec!["id", "body"]);
    assert_nothing_sent(&server).await;
}

#[tokio::test]
async fn empty_path_parameter_counts_as_missing() {
    let (server, client) = setup().await;
    let err = client.delete_subnet().id("").send().await.unwrap_err();
    assert_eq!(missing(err), vec!["id"]);
    assert_nothing_sent(&server).await;
}

// ============================================================================
// Error responses
// ============================================================================

#[test_case(400, "validation_invalid_argument"; "bad request")]
#[test_case(403, "forbidden"; "forbidden")]
#[test_case(404, "not_found"; "not found")]
#[test_case(409, "conflict"; "conflict")]
#[test_case(500, "internal_error"; "server error")]
#[tokio::test]
async fn error_document_is_decoded(status: u16, code: &str) {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/vpcs/r006-1"))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("x-request-id", "req-42")
                .set_body_json(json!({
                    "errors": [{
                        "code": code,
                        "message": "something went wrong",
                        "more_info": "https://cloud.ibm.com/docs/vpc?topic=vpc-rias-error-messages",
                        "target": { "name": "id", "type": "parameter", "value": "r006-1" }
                    }],
                    "trace": "3e8a7f4c-2d21-4f6c-a2f8-21d4f5b1c9b0",
                    "status_code": status
                })),
        )
        .mount(&server)
        .await;

    let err = client.get_vpc().id("r006-1").send().await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::from_u16(status).unwrap()));
    assert_eq!(err.is_not_found(), status == 404);
    let Error::ErrorResponse(response) = &err else {
        panic!("expected ErrorResponse, got {err:?}");
    };
    assert_eq!(response.headers()["x-request-id"], "req-42");
    let api_error = err.api_error().unwrap();
    assert_eq!(api_error.errors[0].code, code);
    assert_eq!(
        api_error.trace.as_deref(),
        Some("3e8a7f4c-2d21-4f6c-a2f8-21d4f5b1c9b0")
    );
    let target = api_error.errors[0].target.as_ref().unwrap();
    assert_eq!(target.target_type, "parameter");
}

#[tokio::test]
async fn error_without_document() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/keys/k1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client.delete_key().id("k1").send().await.unwrap_err();
    match err {
        Error::UnexpectedResponse { status, body } => {
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("expected UnexpectedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_payload() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/keys/k1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "k1" })))
        .mount(&server)
        .await;

    let err = client.get_key().id("k1").send().await.unwrap_err();
    match err {
        Error::InvalidResponsePayload { status, body, .. } => {
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("k1"));
        }
        other => panic!("expected InvalidResponsePayload, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_is_communication_error() {
    let client = Client::new(
        "http://127.0.0.1:9/v1",
        Arc::new(NoAuthAuthenticator::new()),
    )
    .unwrap();
    let err = client.list_regions().send().await.unwrap_err();
    assert!(matches!(err, Error::Communication(_)), "{err:?}");
}
