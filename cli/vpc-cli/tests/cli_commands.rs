// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Command tests against a mock VPC endpoint

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated, clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn vpc_cmd(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("vpc").expect("Failed to find vpc binary");
    cmd.env_remove("VPC_REGION")
        .env_remove("VPC_API_VERSION")
        .env_remove("VPC_DISABLE_SSL")
        .args(["--url", &format!("{}/v1", server.uri()), "--token", "tok"]);
    cmd
}

fn vpc_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "href": format!("https://us-south.iaas.cloud.ibm.com/v1/vpcs/{id}"),
        "id": id,
        "name": name,
        "status": "available",
        "classic_access": false
    })
}

// The binary blocks this thread; the mock server keeps running on the
// runtime's worker threads.

#[tokio::test(flavor = "multi_thread")]
async fn test_vpc_list_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/vpcs"))
        .and(header("authorization", "Bearer tok"))
        .and(query_param("version", "2020-11-17"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 50,
            "vpcs": [vpc_json("r006-1", "alpha"), vpc_json("r006-2", "beta")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    vpc_cmd(&server)
        .args(["vpc", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME"))
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("r006-2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vpc_get_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/vpcs/r006-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vpc_json("r006-1", "alpha")))
        .mount(&server)
        .await;

    let output = vpc_cmd(&server)
        .args(["--json", "vpc", "get", "r006-1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], "r006-1");
    assert_eq!(value["name"], "alpha");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vpc_get_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/vpcs/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{ "code": "not_found", "message": "VPC not found" }],
            "trace": "t-404"
        })))
        .mount(&server)
        .await;

    vpc_cmd(&server)
        .args(["vpc", "get", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to get VPC missing"))
        .stderr(predicate::str::contains("404"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_instance_stop_force() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/instances/inst-1/actions"))
        .and(body_json(json!({ "type": "stop", "force": true })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "href": "https://us-south.iaas.cloud.ibm.com/v1/instances/inst-1/actions/a1",
            "id": "a1",
            "status": "pending",
            "type": "stop"
        })))
        .expect(1)
        .mount(&server)
        .await;

    vpc_cmd(&server)
        .args(["instance", "stop", "--force", "inst-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Requested stop of instance inst-1 (pending)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_subnet_delete_many() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/subnets/s1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/subnets/s2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    vpc_cmd(&server)
        .args(["subnet", "rm", "s1", "s2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted subnet s1"))
        .stdout(predicate::str::contains("Deleted subnet s2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_zone_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/regions/eu-de/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "zones": [{
                "href": "https://eu-de.iaas.cloud.ibm.com/v1/regions/eu-de/zones/eu-de-1",
                "name": "eu-de-1",
                "region": {
                    "href": "https://eu-de.iaas.cloud.ibm.com/v1/regions/eu-de",
                    "name": "eu-de"
                },
                "status": "available"
            }]
        })))
        .mount(&server)
        .await;

    vpc_cmd(&server)
        .args(["zone", "list", "eu-de"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eu-de-1"))
        .stdout(predicate::str::contains("available"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_version_env_applies_with_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/vpcs"))
        .and(header("authorization", "Bearer tok"))
        .and(query_param("version", "2021-01-12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 50,
            "vpcs": [vpc_json("r006-1", "alpha")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    vpc_cmd(&server)
        .env("VPC_API_VERSION", "2021-01-12")
        .env("VPC_DISABLE_SSL", "true")
        .args(["vpc", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_version_flag_beats_env() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/vpcs/r006-1"))
        .and(query_param("version", "2020-12-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vpc_json("r006-1", "alpha")))
        .expect(1)
        .mount(&server)
        .await;

    vpc_cmd(&server)
        .env("VPC_API_VERSION", "2021-01-12")
        .args(["--api-version", "2020-12-01", "vpc", "get", "r006-1"])
        .assert()
        .success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_disable_ssl_env_rejects_garbage() {
    let server = MockServer::start().await;

    vpc_cmd(&server)
        .env("VPC_DISABLE_SSL", "maybe")
        .args(["vpc", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--disable-ssl"));
    assert!(server.received_requests().await.unwrap().is_empty());
}
