// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Wire-contract tests: what each builder puts on the wire.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderName, HeaderValue};
use serde_json::json;
use vpc_client::types::{
    Identity, InstanceActionType, LoadBalancerPoolMemberPrototype, LoadBalancerPoolMemberTarget,
    NamedIdentity, NetworkAclPrototype, ZoneStatus,
};
use vpc_client::{BearerTokenAuthenticator, Client};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Infrastructure
// ============================================================================

const TOKEN: &str = "test-token";

fn client(server: &MockServer) -> Client {
    let auth = BearerTokenAuthenticator::new(TOKEN).expect("valid token");
    Client::new(&format!("{}/v1", server.uri()), Arc::new(auth)).expect("client")
}

fn vpc_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "href": format!("https://us-south.iaas.cloud.ibm.com/v1/vpcs/{id}"),
        "id": id,
        "name": name,
        "classic_access": false,
        "status": "available"
    })
}

/// The only request the server saw
async fn single_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

// ============================================================================
// Request construction
// ============================================================================

#[tokio::test]
async fn create_vpc_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/vpcs"))
        .and(query_param("version", "2020-11-17"))
        .and(query_param("generation", "2"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(header("authorization", "Bearer test-token"))
        .and(header(
            "x-ibmcloud-sdk-analytics",
            "service_name=vpc;service_version=V1;operation_id=create_vpc",
        ))
        .and(body_json(json!({ "name": "my-vpc" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(vpc_json("r006-1", "my-vpc")))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).create_vpc().name("my-vpc").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.id, "r006-1");
    assert_eq!(response.name, "my-vpc");
}

#[tokio::test]
async fn version_and_generation_come_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/vpcs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "vpcs": [] })))
        .mount(&server)
        .await;

    client(&server)
        .list_vpcs()
        .limit(10)
        .classic_access(true)
        .send()
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert_eq!(
        request.url.query(),
        Some("version=2020-11-17&generation=2&limit=10&classic_access=true")
    );
}

#[tokio::test]
async fn delete_subnet_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/subnets/7ec86020-1c6e-4889-b3f0-a15f2e50f87e"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .delete_subnet()
        .id("7ec86020-1c6e-4889-b3f0-a15f2e50f87e")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = single_request(&server).await;
    assert!(request.body.is_empty());
    assert!(request.headers.get("content-type").is_none());
    assert_eq!(
        request.url.query(),
        Some("version=2020-11-17&generation=2")
    );
}

#[tokio::test]
async fn path_parameters_are_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/vpcs/a%20b%2Fc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vpc_json("a b/c", "odd")))
        .expect(1)
        .mount(&server)
        .await;

    let vpc = client(&server).get_vpc().id("a b/c").send().await.unwrap();
    assert_eq!(vpc.id, "a b/c");
}

#[tokio::test]
async fn update_uses_merge_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/vpcs/r006-1"))
        .and(header("content-type", "application/merge-patch+json"))
        .and(body_json(json!({ "name": "renamed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(vpc_json("r006-1", "renamed")))
        .expect(1)
        .mount(&server)
        .await;

    let vpc = client(&server)
        .update_vpc()
        .id("r006-1")
        .name("renamed")
        .send()
        .await
        .unwrap()
        .into_inner();
    assert_eq!(vpc.name, "renamed");
}

#[tokio::test]
async fn list_filters_are_dotted_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/instances"))
        .and(query_param("resource_group.id", "fee82deba12e4c0fb69c3b09d1f12345"))
        .and(query_param("vpc.name", "my-vpc"))
        .and(query_param("limit", "50"))
        .and(query_param_is_missing("start"))
        .and(query_param_is_missing("vpc.id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "instances": [],
            "limit": 50,
            "total_count": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .list_instances()
        .resource_group_id("fee82deba12e4c0fb69c3b09d1f12345")
        .vpc_name("my-vpc")
        .limit(50)
        .send()
        .await
        .unwrap();
    assert_eq!(page.total_count, Some(0));
    assert!(page.instances.is_empty());
}

#[tokio::test]
async fn enum_query_parameters_use_wire_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/network_acls/acl-1/rules"))
        .and(query_param("direction", "inbound"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rules": [] })))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .list_network_acl_rules()
        .network_acl_id("acl-1")
        .direction(vpc_client::types::Direction::Inbound)
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn field_body_with_identities() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/vpcs/r006-1/address_prefixes"))
        .and(body_json(json!({
            "cidr": "10.0.0.0/24",
            "zone": { "name": "us-south-1" },
            "is_default": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "cidr": "10.0.0.0/24",
            "href": "https://us-south.iaas.cloud.ibm.com/v1/vpcs/r006-1/address_prefixes/p1",
            "id": "p1",
            "name": "my-prefix",
            "zone": {
                "href": "https://us-south.iaas.cloud.ibm.com/v1/regions/us-south/zones/us-south-1",
                "name": "us-south-1"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let prefix = client(&server)
        .create_vpc_address_prefix()
        .vpc_id("r006-1")
        .cidr("10.0.0.0/24")
        .zone(NamedIdentity::by_name("us-south-1"))
        .is_default(false)
        .send()
        .await
        .unwrap();
    assert_eq!(prefix.zone.name, "us-south-1");
}

#[tokio::test]
async fn put_with_identity_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/subnets/sub-1/network_acl"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "id": "acl-2" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "href": "https://us-south.iaas.cloud.ibm.com/v1/network_acls/acl-2",
            "id": "acl-2",
            "name": "my-acl",
            "rules": [],
            "subnets": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let acl = client(&server)
        .replace_subnet_network_acl()
        .id("sub-1")
        .body(Identity::by_id("acl-2"))
        .send()
        .await
        .unwrap();
    assert_eq!(acl.id, "acl-2");
}

#[tokio::test]
async fn create_network_acl_body_is_optional() {
    let server = MockServer::start().await;
    let acl = json!({
        "href": "https://us-south.iaas.cloud.ibm.com/v1/network_acls/acl-3",
        "id": "acl-3",
        "name": "generated-name",
        "rules": [],
        "subnets": []
    });
    Mock::given(method("POST"))
        .and(path("/v1/network_acls"))
        .respond_with(ResponseTemplate::new(201).set_body_json(acl))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    client.create_network_acl().send().await.unwrap();
    client
        .create_network_acl()
        .body(NetworkAclPrototype {
            name: Some("my-acl".to_string()),
            vpc: Some(Identity::by_id("r006-1")),
            ..Default::default()
        })
        .send()
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
    assert!(requests[0].headers.get("content-type").is_none());
    let second: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(second, json!({ "name": "my-acl", "vpc": { "id": "r006-1" } }));
}

#[tokio::test]
async fn replace_pool_members() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/load_balancers/lb-1/pools/pool-1/members"))
        .and(body_json(json!({
            "members": [
                { "port": 80, "target": { "address": "10.0.0.5" } },
                { "port": 80, "target": { "id": "inst-1" }, "weight": 20 }
            ]
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "members": [{
                "href": "https://us-south.iaas.cloud.ibm.com/v1/load_balancers/lb-1/pools/pool-1/members/m1",
                "id": "m1",
                "port": 80,
                "target": { "address": "10.0.0.5" }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let members = client(&server)
        .replace_load_balancer_pool_members()
        .load_balancer_id("lb-1")
        .pool_id("pool-1")
        .members(vec![
            LoadBalancerPoolMemberPrototype {
                port: Some(80),
                target: Some(LoadBalancerPoolMemberTarget::address("10.0.0.5")),
                weight: None,
            },
            LoadBalancerPoolMemberPrototype {
                port: Some(80),
                target: Some(LoadBalancerPoolMemberTarget::instance("inst-1")),
                weight: Some(20),
            },
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(members.status(), StatusCode::ACCEPTED);
    assert_eq!(members.members.len(), 1);
}

#[tokio::test]
async fn cidr_check_returns_unit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/v1/vpn_gateways/gw-1/connections/conn-1/local_cidrs/192.168.1.0/24",
        ))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .check_vpn_gateway_connection_local_cidr()
        .vpn_gateway_id("gw-1")
        .id("conn-1")
        .cidr_prefix("192.168.1.0")
        .prefix_length("24")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn list_region_zones() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/regions/us-south/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "zones": [{
                "href": "https://us-south.iaas.cloud.ibm.com/v1/regions/us-south/zones/us-south-1",
                "name": "us-south-1",
                "region": {
                    "href": "https://us-south.iaas.cloud.ibm.com/v1/regions/us-south",
                    "name": "us-south"
                },
                "status": "available"
            }]
        })))
        .mount(&server)
        .await;

    let zones = client(&server)
        .list_region_zones()
        .region_name("us-south")
        .send()
        .await
        .unwrap()
        .into_inner();
    assert_eq!(zones.zones.len(), 1);
    assert_eq!(zones.zones[0].status, ZoneStatus::Available);
    assert_eq!(zones.zones[0].region.name, "us-south");
}

// ============================================================================
// Client configuration
// ============================================================================

#[tokio::test]
async fn default_headers_and_version_override() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/regions"))
        .and(query_param("version", "2021-01-12"))
        .and(query_param("generation", "2"))
        .and(header("x-correlation-id", "abc-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "regions": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .service_url(format!("{}/v1/", server.uri()))
        .version("2021-01-12")
        .header(
            HeaderName::from_static("x-correlation-id"),
            HeaderValue::from_static("abc-123"),
        )
        .authenticator(Arc::new(vpc_client::NoAuthAuthenticator::new()))
        .build()
        .unwrap();

    client.list_regions().send().await.unwrap();

    let request = single_request(&server).await;
    assert!(request.headers.get("authorization").is_none());
}

#[tokio::test]
async fn client_headers_replace_builtin_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/regions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "regions": [] })))
        .mount(&server)
        .await;

    let client = Client::builder()
        .service_url(format!("{}/v1", server.uri()))
        .header(ACCEPT, HeaderValue::from_static("application/vnd.caller"))
        .header(
            HeaderName::from_static("x-ibmcloud-sdk-analytics"),
            HeaderValue::from_static("caller"),
        )
        .authenticator(Arc::new(vpc_client::NoAuthAuthenticator::new()))
        .build()
        .unwrap();

    client.list_regions().send().await.unwrap();

    let request = single_request(&server).await;
    let accept: Vec<_> = request.headers.get_all("accept").iter().collect();
    assert_eq!(accept, vec!["application/vnd.caller"]);
    assert_eq!(request.headers["x-ibmcloud-sdk-analytics"], "caller");
}

#[tokio::test]
async fn per_call_headers_win_over_client_and_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/vpcs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(vpc_json("r006-1", "my-vpc")))
        .mount(&server)
        .await;

    let client = Client::builder()
        .service_url(format!("{}/v1", server.uri()))
        .header(
            HeaderName::from_static("x-correlation-id"),
            HeaderValue::from_static("from-client"),
        )
        .authenticator(Arc::new(BearerTokenAuthenticator::new(TOKEN).unwrap()))
        .build()
        .unwrap();

    client
        .create_vpc()
        .name("my-vpc")
        .header(ACCEPT, HeaderValue::from_static("application/vnd.caller"))
        .header(
            HeaderName::from_static("x-correlation-id"),
            HeaderValue::from_static("from-call"),
        )
        .header(
            HeaderName::from_static("x-request-tag"),
            HeaderValue::from_static("nightly"),
        )
        .send()
        .await
        .unwrap();

    let request = single_request(&server).await;
    let accept: Vec<_> = request.headers.get_all("accept").iter().collect();
    assert_eq!(accept, vec!["application/vnd.caller"]);
    assert_eq!(request.headers["x-correlation-id"], "from-call");
    assert_eq!(request.headers["x-request-tag"], "nightly");
    // untouched defaults and authentication survive
    assert_eq!(request.headers["content-type"], "application/json");
    assert_eq!(
        request.headers["x-ibmcloud-sdk-analytics"],
        "service_name=vpc;service_version=V1;operation_id=create_vpc"
    );
    assert_eq!(request.headers["authorization"], "Bearer test-token");
}

#[tokio::test]
async fn per_call_headers_do_not_leak_into_other_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/regions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "regions": [] })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    client
        .list_regions()
        .header(
            HeaderName::from_static("x-request-tag"),
            HeaderValue::from_static("once"),
        )
        .send()
        .await
        .unwrap();
    client.list_regions().send().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers["x-request-tag"], "once");
    assert!(requests[1].headers.get("x-request-tag").is_none());
}

// ============================================================================
// Instance actions
// ============================================================================

fn action_json(action: &str, status: &str) -> serde_json::Value {
    json!({
        "href": "https://us-south.iaas.cloud.ibm.com/v1/instances/inst-1/actions/act-1",
        "id": "act-1",
        "status": status,
        "type": action
    })
}

#[tokio::test]
async fn stop_instance_sends_force() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/instances/inst-1/actions"))
        .and(body_json(json!({ "type": "stop", "force": true })))
        .respond_with(ResponseTemplate::new(201).set_body_json(action_json("stop", "pending")))
        .expect(1)
        .mount(&server)
        .await;

    let action = client(&server).stop_instance("inst-1", true).await.unwrap();
    assert_eq!(action.action_type, InstanceActionType::Stop);
}

#[tokio::test]
async fn start_instance_omits_force() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/instances/inst-1/actions"))
        .and(body_json(json!({ "type": "start" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(action_json("start", "running")))
        .expect(1)
        .mount(&server)
        .await;

    let action = client(&server).start_instance("inst-1").await.unwrap();
    assert_eq!(action.action_type, InstanceActionType::Start);
}

#[tokio::test]
async fn rename_instance_patches_name() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/instances/inst-1"))
        .and(header("content-type", "application/merge-patch+json"))
        .and(body_json(json!({ "name": "web-2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "href": "https://us-south.iaas.cloud.ibm.com/v1/instances/inst-1",
            "id": "inst-1",
            "name": "web-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let instance = client(&server)
        .rename_instance("inst-1", "web-2")
        .await
        .unwrap();
    assert_eq!(instance.id, "inst-1");
    assert_eq!(instance.name, "web-2");
}
