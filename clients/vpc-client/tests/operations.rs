// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Every operation against a catch-all mock: the method and substituted
//! path it sends, `version`/`generation` leading the query, and rejection
//! of missing required parameters before anything is sent.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use vpc_client::types::{
    AuthenticationAlgorithm, EncryptionAlgorithm, InstanceActionType, IpAddress,
    ListenerPolicyAction, LoadBalancerProtocol, Pfs, PolicyRuleCondition, PolicyRuleType,
    PoolAlgorithm, StorageBucket,
};
use vpc_client::{Client, Error, NoAuthAuthenticator, Result};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Infrastructure
// ============================================================================

const VERSION_AND_GENERATION: &str = "version=2020-11-17&generation=2";

/// A server that answers anything with an empty JSON object
async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    let client = Client::new(
        &format!("{}/v1", server.uri()),
        Arc::new(NoAuthAuthenticator::new()),
    )
    .unwrap();
    (server, client)
}

/// Issue `operation` with each path parameter set to `<name>-x` and every
/// required body member filled in
async fn call_with_required(client: &Client, operation: &str) -> Result<()> {
    match operation {
        "list_endpoint_gateways" => client.list_endpoint_gateways().send().await.map(drop),
        "create_endpoint_gateway" => client
            .create_endpoint_gateway()
            .target(Default::default())
            .vpc(Default::default())
            .send()
            .await
            .map(drop),
        "list_endpoint_gateway_ips" => client
            .list_endpoint_gateway_ips()
            .endpoint_gateway_id("endpoint_gateway_id-x")
            .send()
            .await
            .map(drop),
        "remove_endpoint_gateway_ip" => client
            .remove_endpoint_gateway_ip()
            .endpoint_gateway_id("endpoint_gateway_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_endpoint_gateway_ip" => client
            .get_endpoint_gateway_ip()
            .endpoint_gateway_id("endpoint_gateway_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "add_endpoint_gateway_ip" => client
            .add_endpoint_gateway_ip()
            .endpoint_gateway_id("endpoint_gateway_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "delete_endpoint_gateway" => client
            .delete_endpoint_gateway()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_endpoint_gateway" => client.get_endpoint_gateway().id("id-x").send().await.map(drop),
        "update_endpoint_gateway" => client
            .update_endpoint_gateway()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_floating_ips" => client.list_floating_ips().send().await.map(drop),
        "create_floating_ip" => client
            .create_floating_ip()
            .body(Default::default())
            .send()
            .await
            .map(drop),
        "delete_floating_ip" => client.delete_floating_ip().id("id-x").send().await.map(drop),
        "get_floating_ip" => client.get_floating_ip().id("id-x").send().await.map(drop),
        "update_floating_ip" => client.update_floating_ip().id("id-x").send().await.map(drop),
        "list_flow_log_collectors" => client.list_flow_log_collectors().send().await.map(drop),
        "create_flow_log_collector" => client
            .create_flow_log_collector()
            .storage_bucket(StorageBucket { name: "bucket".to_string() })
            .target(Default::default())
            .send()
            .await
            .map(drop),
        "delete_flow_log_collector" => client
            .delete_flow_log_collector()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_flow_log_collector" => client
            .get_flow_log_collector()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_flow_log_collector" => client
            .update_flow_log_collector()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_regions" => client.list_regions().send().await.map(drop),
        "get_region" => client.get_region().name("name-x").send().await.map(drop),
        "list_region_zones" => client
            .list_region_zones()
            .region_name("region_name-x")
            .send()
            .await
            .map(drop),
        "get_region_zone" => client
            .get_region_zone()
            .region_name("region_name-x")
            .name("name-x")
            .send()
            .await
            .map(drop),
        "list_images" => client.list_images().send().await.map(drop),
        "create_image" => client.create_image().body(Default::default()).send().await.map(drop),
        "delete_image" => client.delete_image().id("id-x").send().await.map(drop),
        "get_image" => client.get_image().id("id-x").send().await.map(drop),
        "update_image" => client.update_image().id("id-x").send().await.map(drop),
        "list_operating_systems" => client.list_operating_systems().send().await.map(drop),
        "get_operating_system" => client
            .get_operating_system()
            .name("name-x")
            .send()
            .await
            .map(drop),
        "list_instance_profiles" => client.list_instance_profiles().send().await.map(drop),
        "get_instance_profile" => client
            .get_instance_profile()
            .name("name-x")
            .send()
            .await
            .map(drop),
        "list_instance_templates" => client.list_instance_templates().send().await.map(drop),
        "create_instance_template" => client
            .create_instance_template()
            .body(Default::default())
            .send()
            .await
            .map(drop),
        "delete_instance_template" => client
            .delete_instance_template()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_instance_template" => client.get_instance_template().id("id-x").send().await.map(drop),
        "update_instance_template" => client
            .update_instance_template()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_instances" => client.list_instances().send().await.map(drop),
        "create_instance" => client
            .create_instance()
            .body(Default::default())
            .send()
            .await
            .map(drop),
        "delete_instance" => client.delete_instance().id("id-x").send().await.map(drop),
        "get_instance" => client.get_instance().id("id-x").send().await.map(drop),
        "update_instance" => client.update_instance().id("id-x").send().await.map(drop),
        "get_instance_initialization" => client
            .get_instance_initialization()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "create_instance_action" => client
            .create_instance_action()
            .instance_id("instance_id-x")
            .action_type(InstanceActionType::Start)
            .send()
            .await
            .map(drop),
        "list_instance_network_interfaces" => client
            .list_instance_network_interfaces()
            .instance_id("instance_id-x")
            .send()
            .await
            .map(drop),
        "create_instance_network_interface" => client
            .create_instance_network_interface()
            .instance_id("instance_id-x")
            .subnet(Default::default())
            .send()
            .await
            .map(drop),
        "delete_instance_network_interface" => client
            .delete_instance_network_interface()
            .instance_id("instance_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_instance_network_interface" => client
            .get_instance_network_interface()
            .instance_id("instance_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_instance_network_interface" => client
            .update_instance_network_interface()
            .instance_id("instance_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_instance_network_interface_floating_ips" => client
            .list_instance_network_interface_floating_ips()
            .instance_id("instance_id-x")
            .network_interface_id("network_interface_id-x")
            .send()
            .await
            .map(drop),
        "remove_instance_network_interface_floating_ip" => client
            .remove_instance_network_interface_floating_ip()
            .instance_id("instance_id-x")
            .network_interface_id("network_interface_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_instance_network_interface_floating_ip" => client
            .get_instance_network_interface_floating_ip()
            .instance_id("instance_id-x")
            .network_interface_id("network_interface_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "add_instance_network_interface_floating_ip" => client
            .add_instance_network_interface_floating_ip()
            .instance_id("instance_id-x")
            .network_interface_id("network_interface_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_instance_volume_attachments" => client
            .list_instance_volume_attachments()
            .instance_id("instance_id-x")
            .send()
            .await
            .map(drop),
        "create_instance_volume_attachment" => client
            .create_instance_volume_attachment()
            .instance_id("instance_id-x")
            .volume(Default::default())
            .send()
            .await
            .map(drop),
        "delete_instance_volume_attachment" => client
            .delete_instance_volume_attachment()
            .instance_id("instance_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_instance_volume_attachment" => client
            .get_instance_volume_attachment()
            .instance_id("instance_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_instance_volume_attachment" => client
            .update_instance_volume_attachment()
            .instance_id("instance_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_instance_groups" => client.list_instance_groups().send().await.map(drop),
        "create_instance_group" => client
            .create_instance_group()
            .instance_template(Default::default())
            .subnets(Vec::new())
            .send()
            .await
            .map(drop),
        "delete_instance_group" => client.delete_instance_group().id("id-x").send().await.map(drop),
        "get_instance_group" => client.get_instance_group().id("id-x").send().await.map(drop),
        "update_instance_group" => client.update_instance_group().id("id-x").send().await.map(drop),
        "delete_instance_group_load_balancer" => client
            .delete_instance_group_load_balancer()
            .instance_group_id("instance_group_id-x")
            .send()
            .await
            .map(drop),
        "list_instance_group_managers" => client
            .list_instance_group_managers()
            .instance_group_id("instance_group_id-x")
            .send()
            .await
            .map(drop),
        "create_instance_group_manager" => client
            .create_instance_group_manager()
            .instance_group_id("instance_group_id-x")
            .body(Default::default())
            .send()
            .await
            .map(drop),
        "delete_instance_group_manager" => client
            .delete_instance_group_manager()
            .instance_group_id("instance_group_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_instance_group_manager" => client
            .get_instance_group_manager()
            .instance_group_id("instance_group_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_instance_group_manager" => client
            .update_instance_group_manager()
            .instance_group_id("instance_group_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_instance_group_manager_policies" => client
            .list_instance_group_manager_policies()
            .instance_group_id("instance_group_id-x")
            .instance_group_manager_id("instance_group_manager_id-x")
            .send()
            .await
            .map(drop),
        "create_instance_group_manager_policy" => client
            .create_instance_group_manager_policy()
            .instance_group_id("instance_group_id-x")
            .instance_group_manager_id("instance_group_manager_id-x")
            .body(Default::default())
            .send()
            .await
            .map(drop),
        "delete_instance_group_manager_policy" => client
            .delete_instance_group_manager_policy()
            .instance_group_id("instance_group_id-x")
            .instance_group_manager_id("instance_group_manager_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_instance_group_manager_policy" => client
            .get_instance_group_manager_policy()
            .instance_group_id("instance_group_id-x")
            .instance_group_manager_id("instance_group_manager_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_instance_group_manager_policy" => client
            .update_instance_group_manager_policy()
            .instance_group_id("instance_group_id-x")
            .instance_group_manager_id("instance_group_manager_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "delete_instance_group_memberships" => client
            .delete_instance_group_memberships()
            .instance_group_id("instance_group_id-x")
            .send()
            .await
            .map(drop),
        "list_instance_group_memberships" => client
            .list_instance_group_memberships()
            .instance_group_id("instance_group_id-x")
            .send()
            .await
            .map(drop),
        "delete_instance_group_membership" => client
            .delete_instance_group_membership()
            .instance_group_id("instance_group_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_instance_group_membership" => client
            .get_instance_group_membership()
            .instance_group_id("instance_group_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_instance_group_membership" => client
            .update_instance_group_membership()
            .instance_group_id("instance_group_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_keys" => client.list_keys().send().await.map(drop),
        "create_key" => client.create_key().public_key("x").send().await.map(drop),
        "delete_key" => client.delete_key().id("id-x").send().await.map(drop),
        "get_key" => client.get_key().id("id-x").send().await.map(drop),
        "update_key" => client.update_key().id("id-x").send().await.map(drop),
        "list_load_balancer_profiles" => {
            client.list_load_balancer_profiles().send().await.map(drop)
        }
        "get_load_balancer_profile" => client
            .get_load_balancer_profile()
            .name("name-x")
            .send()
            .await
            .map(drop),
        "list_load_balancers" => client.list_load_balancers().send().await.map(drop),
        "create_load_balancer" => client
            .create_load_balancer()
            .is_public(true)
            .subnets(Vec::new())
            .send()
            .await
            .map(drop),
        "delete_load_balancer" => client.delete_load_balancer().id("id-x").send().await.map(drop),
        "get_load_balancer" => client.get_load_balancer().id("id-x").send().await.map(drop),
        "update_load_balancer" => client.update_load_balancer().id("id-x").send().await.map(drop),
        "get_load_balancer_statistics" => client
            .get_load_balancer_statistics()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_load_balancer_listeners" => client
            .list_load_balancer_listeners()
            .load_balancer_id("load_balancer_id-x")
            .send()
            .await
            .map(drop),
        "create_load_balancer_listener" => client
            .create_load_balancer_listener()
            .load_balancer_id("load_balancer_id-x")
            .port(80)
            .protocol(LoadBalancerProtocol::Http)
            .send()
            .await
            .map(drop),
        "delete_load_balancer_listener" => client
            .delete_load_balancer_listener()
            .load_balancer_id("load_balancer_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_load_balancer_listener" => client
            .get_load_balancer_listener()
            .load_balancer_id("load_balancer_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_load_balancer_listener" => client
            .update_load_balancer_listener()
            .load_balancer_id("load_balancer_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_load_balancer_listener_policies" => client
            .list_load_balancer_listener_policies()
            .load_balancer_id("load_balancer_id-x")
            .listener_id("listener_id-x")
            .send()
            .await
            .map(drop),
        "create_load_balancer_listener_policy" => client
            .create_load_balancer_listener_policy()
            .load_balancer_id("load_balancer_id-x")
            .listener_id("listener_id-x")
            .action(ListenerPolicyAction::Forward)
            .priority(80)
            .send()
            .await
            .map(drop),
        "delete_load_balancer_listener_policy" => client
            .delete_load_balancer_listener_policy()
            .load_balancer_id("load_balancer_id-x")
            .listener_id("listener_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_load_balancer_listener_policy" => client
            .get_load_balancer_listener_policy()
            .load_balancer_id("load_balancer_id-x")
            .listener_id("listener_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_load_balancer_listener_policy" => client
            .update_load_balancer_listener_policy()
            .load_balancer_id("load_balancer_id-x")
            .listener_id("listener_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_load_balancer_listener_policy_rules" => client
            .list_load_balancer_listener_policy_rules()
            .load_balancer_id("load_balancer_id-x")
            .listener_id("listener_id-x")
            .policy_id("policy_id-x")
            .send()
            .await
            .map(drop),
        "create_load_balancer_listener_policy_rule" => client
            .create_load_balancer_listener_policy_rule()
            .load_balancer_id("load_balancer_id-x")
            .listener_id("listener_id-x")
            .policy_id("policy_id-x")
            .condition(PolicyRuleCondition::Equals)
            .rule_type(PolicyRuleType::Path)
            .value("x")
            .send()
            .await
            .map(drop),
        "delete_load_balancer_listener_policy_rule" => client
            .delete_load_balancer_listener_policy_rule()
            .load_balancer_id("load_balancer_id-x")
            .listener_id("listener_id-x")
            .policy_id("policy_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_load_balancer_listener_policy_rule" => client
            .get_load_balancer_listener_policy_rule()
            .load_balancer_id("load_balancer_id-x")
            .listener_id("listener_id-x")
            .policy_id("policy_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_load_balancer_listener_policy_rule" => client
            .update_load_balancer_listener_policy_rule()
            .load_balancer_id("load_balancer_id-x")
            .listener_id("listener_id-x")
            .policy_id("policy_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_load_balancer_pools" => client
            .list_load_balancer_pools()
            .load_balancer_id("load_balancer_id-x")
            .send()
            .await
            .map(drop),
        "create_load_balancer_pool" => client
            .create_load_balancer_pool()
            .load_balancer_id("load_balancer_id-x")
            .algorithm(PoolAlgorithm::RoundRobin)
            .health_monitor(Default::default())
            .protocol(LoadBalancerProtocol::Http)
            .send()
            .await
            .map(drop),
        "delete_load_balancer_pool" => client
            .delete_load_balancer_pool()
            .load_balancer_id("load_balancer_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_load_balancer_pool" => client
            .get_load_balancer_pool()
            .load_balancer_id("load_balancer_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_load_balancer_pool" => client
            .update_load_balancer_pool()
            .load_balancer_id("load_balancer_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_load_balancer_pool_members" => client
            .list_load_balancer_pool_members()
            .load_balancer_id("load_balancer_id-x")
            .pool_id("pool_id-x")
            .send()
            .await
            .map(drop),
        "create_load_balancer_pool_member" => client
            .create_load_balancer_pool_member()
            .load_balancer_id("load_balancer_id-x")
            .pool_id("pool_id-x")
            .port(80)
            .target(Default::default())
            .send()
            .await
            .map(drop),
        "replace_load_balancer_pool_members" => client
            .replace_load_balancer_pool_members()
            .load_balancer_id("load_balancer_id-x")
            .pool_id("pool_id-x")
            .members(Vec::new())
            .send()
            .await
            .map(drop),
        "delete_load_balancer_pool_member" => client
            .delete_load_balancer_pool_member()
            .load_balancer_id("load_balancer_id-x")
            .pool_id("pool_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_load_balancer_pool_member" => client
            .get_load_balancer_pool_member()
            .load_balancer_id("load_balancer_id-x")
            .pool_id("pool_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_load_balancer_pool_member" => client
            .update_load_balancer_pool_member()
            .load_balancer_id("load_balancer_id-x")
            .pool_id("pool_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_network_acls" => client.list_network_acls().send().await.map(drop),
        "create_network_acl" => client.create_network_acl().send().await.map(drop),
        "delete_network_acl" => client.delete_network_acl().id("id-x").send().await.map(drop),
        "get_network_acl" => client.get_network_acl().id("id-x").send().await.map(drop),
        "update_network_acl" => client.update_network_acl().id("id-x").send().await.map(drop),
        "list_network_acl_rules" => client
            .list_network_acl_rules()
            .network_acl_id("network_acl_id-x")
            .send()
            .await
            .map(drop),
        "create_network_acl_rule" => client
            .create_network_acl_rule()
            .network_acl_id("network_acl_id-x")
            .body(Default::default())
            .send()
            .await
            .map(drop),
        "delete_network_acl_rule" => client
            .delete_network_acl_rule()
            .network_acl_id("network_acl_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_network_acl_rule" => client
            .get_network_acl_rule()
            .network_acl_id("network_acl_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_network_acl_rule" => client
            .update_network_acl_rule()
            .network_acl_id("network_acl_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_public_gateways" => client.list_public_gateways().send().await.map(drop),
        "create_public_gateway" => client
            .create_public_gateway()
            .vpc(Default::default())
            .zone(Default::default())
            .send()
            .await
            .map(drop),
        "delete_public_gateway" => client.delete_public_gateway().id("id-x").send().await.map(drop),
        "get_public_gateway" => client.get_public_gateway().id("id-x").send().await.map(drop),
        "update_public_gateway" => client.update_public_gateway().id("id-x").send().await.map(drop),
        "list_security_groups" => client.list_security_groups().send().await.map(drop),
        "create_security_group" => client
            .create_security_group()
            .vpc(Default::default())
            .send()
            .await
            .map(drop),
        "delete_security_group" => client.delete_security_group().id("id-x").send().await.map(drop),
        "get_security_group" => client.get_security_group().id("id-x").send().await.map(drop),
        "update_security_group" => client.update_security_group().id("id-x").send().await.map(drop),
        "list_security_group_network_interfaces" => client
            .list_security_group_network_interfaces()
            .security_group_id("security_group_id-x")
            .send()
            .await
            .map(drop),
        "remove_security_group_network_interface" => client
            .remove_security_group_network_interface()
            .security_group_id("security_group_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_security_group_network_interface" => client
            .get_security_group_network_interface()
            .security_group_id("security_group_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "add_security_group_network_interface" => client
            .add_security_group_network_interface()
            .security_group_id("security_group_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_security_group_rules" => client
            .list_security_group_rules()
            .security_group_id("security_group_id-x")
            .send()
            .await
            .map(drop),
        "create_security_group_rule" => client
            .create_security_group_rule()
            .security_group_id("security_group_id-x")
            .body(Default::default())
            .send()
            .await
            .map(drop),
        "delete_security_group_rule" => client
            .delete_security_group_rule()
            .security_group_id("security_group_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_security_group_rule" => client
            .get_security_group_rule()
            .security_group_id("security_group_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_security_group_rule" => client
            .update_security_group_rule()
            .security_group_id("security_group_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_subnets" => client.list_subnets().send().await.map(drop),
        "create_subnet" => client.create_subnet().body(Default::default()).send().await.map(drop),
        "delete_subnet" => client.delete_subnet().id("id-x").send().await.map(drop),
        "get_subnet" => client.get_subnet().id("id-x").send().await.map(drop),
        "update_subnet" => client.update_subnet().id("id-x").send().await.map(drop),
        "get_subnet_network_acl" => client
            .get_subnet_network_acl()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "replace_subnet_network_acl" => client
            .replace_subnet_network_acl()
            .id("id-x")
            .body(Default::default())
            .send()
            .await
            .map(drop),
        "unset_subnet_public_gateway" => client
            .unset_subnet_public_gateway()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_subnet_public_gateway" => client
            .get_subnet_public_gateway()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "set_subnet_public_gateway" => client
            .set_subnet_public_gateway()
            .id("id-x")
            .body(Default::default())
            .send()
            .await
            .map(drop),
        "list_volume_profiles" => client.list_volume_profiles().send().await.map(drop),
        "get_volume_profile" => client.get_volume_profile().name("name-x").send().await.map(drop),
        "list_volumes" => client.list_volumes().send().await.map(drop),
        "create_volume" => client.create_volume().body(Default::default()).send().await.map(drop),
        "delete_volume" => client.delete_volume().id("id-x").send().await.map(drop),
        "get_volume" => client.get_volume().id("id-x").send().await.map(drop),
        "update_volume" => client.update_volume().id("id-x").send().await.map(drop),
        "list_vpcs" => client.list_vpcs().send().await.map(drop),
        "create_vpc" => client.create_vpc().send().await.map(drop),
        "delete_vpc" => client.delete_vpc().id("id-x").send().await.map(drop),
        "get_vpc" => client.get_vpc().id("id-x").send().await.map(drop),
        "update_vpc" => client.update_vpc().id("id-x").send().await.map(drop),
        "get_vpc_default_network_acl" => client
            .get_vpc_default_network_acl()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_vpc_default_security_group" => client
            .get_vpc_default_security_group()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_vpc_address_prefixes" => client
            .list_vpc_address_prefixes()
            .vpc_id("vpc_id-x")
            .send()
            .await
            .map(drop),
        "create_vpc_address_prefix" => client
            .create_vpc_address_prefix()
            .vpc_id("vpc_id-x")
            .cidr("x")
            .zone(Default::default())
            .send()
            .await
            .map(drop),
        "delete_vpc_address_prefix" => client
            .delete_vpc_address_prefix()
            .vpc_id("vpc_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_vpc_address_prefix" => client
            .get_vpc_address_prefix()
            .vpc_id("vpc_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_vpc_address_prefix" => client
            .update_vpc_address_prefix()
            .vpc_id("vpc_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_vpc_routes" => client.list_vpc_routes().vpc_id("vpc_id-x").send().await.map(drop),
        "create_vpc_route" => client
            .create_vpc_route()
            .vpc_id("vpc_id-x")
            .destination("x")
            .next_hop(IpAddress { address: "10.0.0.1".to_string() })
            .zone(Default::default())
            .send()
            .await
            .map(drop),
        "delete_vpc_route" => client
            .delete_vpc_route()
            .vpc_id("vpc_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_vpc_route" => client
            .get_vpc_route()
            .vpc_id("vpc_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_vpc_route" => client
            .update_vpc_route()
            .vpc_id("vpc_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_vpn_gateways" => client.list_vpn_gateways().send().await.map(drop),
        "create_vpn_gateway" => client
            .create_vpn_gateway()
            .body(Default::default())
            .send()
            .await
            .map(drop),
        "delete_vpn_gateway" => client.delete_vpn_gateway().id("id-x").send().await.map(drop),
        "get_vpn_gateway" => client.get_vpn_gateway().id("id-x").send().await.map(drop),
        "update_vpn_gateway" => client.update_vpn_gateway().id("id-x").send().await.map(drop),
        "list_vpn_gateway_connections" => client
            .list_vpn_gateway_connections()
            .vpn_gateway_id("vpn_gateway_id-x")
            .send()
            .await
            .map(drop),
        "create_vpn_gateway_connection" => client
            .create_vpn_gateway_connection()
            .vpn_gateway_id("vpn_gateway_id-x")
            .peer_address("x")
            .psk("x")
            .send()
            .await
            .map(drop),
        "delete_vpn_gateway_connection" => client
            .delete_vpn_gateway_connection()
            .vpn_gateway_id("vpn_gateway_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "get_vpn_gateway_connection" => client
            .get_vpn_gateway_connection()
            .vpn_gateway_id("vpn_gateway_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "update_vpn_gateway_connection" => client
            .update_vpn_gateway_connection()
            .vpn_gateway_id("vpn_gateway_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_vpn_gateway_connection_local_cidrs" => client
            .list_vpn_gateway_connection_local_cidrs()
            .vpn_gateway_id("vpn_gateway_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "remove_vpn_gateway_connection_local_cidr" => client
            .remove_vpn_gateway_connection_local_cidr()
            .vpn_gateway_id("vpn_gateway_id-x")
            .id("id-x")
            .cidr_prefix("cidr_prefix-x")
            .prefix_length("prefix_length-x")
            .send()
            .await
            .map(drop),
        "check_vpn_gateway_connection_local_cidr" => client
            .check_vpn_gateway_connection_local_cidr()
            .vpn_gateway_id("vpn_gateway_id-x")
            .id("id-x")
            .cidr_prefix("cidr_prefix-x")
            .prefix_length("prefix_length-x")
            .send()
            .await
            .map(drop),
        "add_vpn_gateway_connection_local_cidr" => client
            .add_vpn_gateway_connection_local_cidr()
            .vpn_gateway_id("vpn_gateway_id-x")
            .id("id-x")
            .cidr_prefix("cidr_prefix-x")
            .prefix_length("prefix_length-x")
            .send()
            .await
            .map(drop),
        "list_vpn_gateway_connection_peer_cidrs" => client
            .list_vpn_gateway_connection_peer_cidrs()
            .vpn_gateway_id("vpn_gateway_id-x")
            .id("id-x")
            .send()
            .await
            .map(drop),
        "remove_vpn_gateway_connection_peer_cidr" => client
            .remove_vpn_gateway_connection_peer_cidr()
            .vpn_gateway_id("vpn_gateway_id-x")
            .id("id-x")
            .cidr_prefix("cidr_prefix-x")
            .prefix_length("prefix_length-x")
            .send()
            .await
            .map(drop),
        "check_vpn_gateway_connection_peer_cidr" => client
            .check_vpn_gateway_connection_peer_cidr()
            .vpn_gateway_id("vpn_gateway_id-x")
            .id("id-x")
            .cidr_prefix("cidr_prefix-x")
            .prefix_length("prefix_length-x")
            .send()
            .await
            .map(drop),
        "add_vpn_gateway_connection_peer_cidr" => client
            .add_vpn_gateway_connection_peer_cidr()
            .vpn_gateway_id("vpn_gateway_id-x")
            .id("id-x")
            .cidr_prefix("cidr_prefix-x")
            .prefix_length("prefix_length-x")
            .send()
            .await
            .map(drop),
        "list_ike_policies" => client.list_ike_policies().send().await.map(drop),
        "create_ike_policy" => client
            .create_ike_policy()
            .authentication_algorithm(AuthenticationAlgorithm::Sha256)
            .dh_group(2)
            .encryption_algorithm(EncryptionAlgorithm::Aes256)
            .ike_version(2)
            .send()
            .await
            .map(drop),
        "delete_ike_policy" => client.delete_ike_policy().id("id-x").send().await.map(drop),
        "get_ike_policy" => client.get_ike_policy().id("id-x").send().await.map(drop),
        "update_ike_policy" => client.update_ike_policy().id("id-x").send().await.map(drop),
        "list_ike_policy_connections" => client
            .list_ike_policy_connections()
            .id("id-x")
            .send()
            .await
            .map(drop),
        "list_ipsec_policies" => client.list_ipsec_policies().send().await.map(drop),
        "create_ipsec_policy" => client
            .create_ipsec_policy()
            .authentication_algorithm(AuthenticationAlgorithm::Sha256)
            .encryption_algorithm(EncryptionAlgorithm::Aes256)
            .pfs(Pfs::Disabled)
            .send()
            .await
            .map(drop),
        "delete_ipsec_policy" => client.delete_ipsec_policy().id("id-x").send().await.map(drop),
        "get_ipsec_policy" => client.get_ipsec_policy().id("id-x").send().await.map(drop),
        "update_ipsec_policy" => client.update_ipsec_policy().id("id-x").send().await.map(drop),
        "list_ipsec_policy_connections" => client
            .list_ipsec_policy_connections()
            .id("id-x")
            .send()
            .await
            .map(drop),
        other => panic!("no call for {other}"),
    }
}

/// Issue `operation` with no parameters at all
macro_rules! call_bare {
    ($client:expr, $operation:expr; $($op:ident),* $(,)?) => {
        match $operation {
            $(stringify!($op) => $client.$op().send().await.map(drop),)*
            other => panic!("no call for {other}"),
        }
    };
}

async fn call_without_parameters(client: &Client, operation: &str) -> Result<()> {
    call_bare!(client, operation;
        create_endpoint_gateway,
        list_endpoint_gateway_ips,
        remove_endpoint_gateway_ip,
        get_endpoint_gateway_ip,
        add_endpoint_gateway_ip,
        delete_endpoint_gateway,
        get_endpoint_gateway,
        update_endpoint_gateway,
        create_floating_ip,
        delete_floating_ip,
        get_floating_ip,
        update_floating_ip,
        create_flow_log_collector,
        delete_flow_log_collector,
        get_flow_log_collector,
        update_flow_log_collector,
        get_region,
        list_region_zones,
        get_region_zone,
        create_image,
        delete_image,
        get_image,
        update_image,
        get_operating_system,
        get_instance_profile,
        create_instance_template,
        delete_instance_template,
        get_instance_template,
        update_instance_template,
        create_instance,
        delete_instance,
        get_instance,
        update_instance,
        get_instance_initialization,
        create_instance_action,
        list_instance_network_interfaces,
        create_instance_network_interface,
        delete_instance_network_interface,
        get_instance_network_interface,
        update_instance_network_interface,
        list_instance_network_interface_floating_ips,
        remove_instance_network_interface_floating_ip,
        get_instance_network_interface_floating_ip,
        add_instance_network_interface_floating_ip,
        list_instance_volume_attachments,
        create_instance_volume_attachment,
        delete_instance_volume_attachment,
        get_instance_volume_attachment,
        update_instance_volume_attachment,
        create_instance_group,
        delete_instance_group,
        get_instance_group,
        update_instance_group,
        delete_instance_group_load_balancer,
        list_instance_group_managers,
        create_instance_group_manager,
        delete_instance_group_manager,
        get_instance_group_manager,
        update_instance_group_manager,
        list_instance_group_manager_policies,
        create_instance_group_manager_policy,
        delete_instance_group_manager_policy,
        get_instance_group_manager_policy,
        update_instance_group_manager_policy,
        delete_instance_group_memberships,
        list_instance_group_memberships,
        delete_instance_group_membership,
        get_instance_group_membership,
        update_instance_group_membership,
        create_key,
        delete_key,
        get_key,
        update_key,
        get_load_balancer_profile,
        create_load_balancer,
        delete_load_balancer,
        get_load_balancer,
        update_load_balancer,
        get_load_balancer_statistics,
        list_load_balancer_listeners,
        create_load_balancer_listener,
        delete_load_balancer_listener,
        get_load_balancer_listener,
        update_load_balancer_listener,
        list_load_balancer_listener_policies,
        create_load_balancer_listener_policy,
        delete_load_balancer_listener_policy,
        get_load_balancer_listener_policy,
        update_load_balancer_listener_policy,
        list_load_balancer_listener_policy_rules,
        create_load_balancer_listener_policy_rule,
        delete_load_balancer_listener_policy_rule,
        get_load_balancer_listener_policy_rule,
        update_load_balancer_listener_policy_rule,
        list_load_balancer_pools,
        create_load_balancer_pool,
        delete_load_balancer_pool,
        get_load_balancer_pool,
        update_load_balancer_pool,
        list_load_balancer_pool_members,
        create_load_balancer_pool_member,
        replace_load_balancer_pool_members,
        delete_load_balancer_pool_member,
        get_load_balancer_pool_member,
        update_load_balancer_pool_member,
        delete_network_acl,
        get_network_acl,
        update_network_acl,
        list_network_acl_rules,
        create_network_acl_rule,
        delete_network_acl_rule,
        get_network_acl_rule,
        update_network_acl_rule,
        create_public_gateway,
        delete_public_gateway,
        get_public_gateway,
        update_public_gateway,
        create_security_group,
        delete_security_group,
        get_security_group,
        update_security_group,
        list_security_group_network_interfaces,
        remove_security_group_network_interface,
        get_security_group_network_interface,
        add_security_group_network_interface,
        list_security_group_rules,
        create_security_group_rule,
        delete_security_group_rule,
        get_security_group_rule,
        update_security_group_rule,
        create_subnet,
        delete_subnet,
        get_subnet,
        update_subnet,
        get_subnet_network_acl,
        replace_subnet_network_acl,
        unset_subnet_public_gateway,
        get_subnet_public_gateway,
        set_subnet_public_gateway,
        get_volume_profile,
        create_volume,
        delete_volume,
        get_volume,
        update_volume,
        delete_vpc,
        get_vpc,
        update_vpc,
        get_vpc_default_network_acl,
        get_vpc_default_security_group,
        list_vpc_address_prefixes,
        create_vpc_address_prefix,
        delete_vpc_address_prefix,
        get_vpc_address_prefix,
        update_vpc_address_prefix,
        list_vpc_routes,
        create_vpc_route,
        delete_vpc_route,
        get_vpc_route,
        update_vpc_route,
        create_vpn_gateway,
        delete_vpn_gateway,
        get_vpn_gateway,
        update_vpn_gateway,
        list_vpn_gateway_connections,
        create_vpn_gateway_connection,
        delete_vpn_gateway_connection,
        get_vpn_gateway_connection,
        update_vpn_gateway_connection,
        list_vpn_gateway_connection_local_cidrs,
        remove_vpn_gateway_connection_local_cidr,
        check_vpn_gateway_connection_local_cidr,
        add_vpn_gateway_connection_local_cidr,
        list_vpn_gateway_connection_peer_cidrs,
        remove_vpn_gateway_connection_peer_cidr,
        check_vpn_gateway_connection_peer_cidr,
        add_vpn_gateway_connection_peer_cidr,
        create_ike_policy,
        delete_ike_policy,
        get_ike_policy,
        update_ike_policy,
        list_ike_policy_connections,
        create_ipsec_policy,
        delete_ipsec_policy,
        get_ipsec_policy,
        update_ipsec_policy,
        list_ipsec_policy_connections,
    )
}

// ============================================================================
// Method and path
// ============================================================================

#[test_case("list_endpoint_gateways", "GET", "/v1/endpoint_gateways" ; "list_endpoint_gateways")]
#[test_case("create_endpoint_gateway", "POST", "/v1/endpoint_gateways" ; "create_endpoint_gateway")]
#[test_case("list_endpoint_gateway_ips", "GET", "/v1/endpoint_gateways/endpoint_gateway_id-x/ips" ; "list_endpoint_gateway_ips")]
#[test_case("remove_endpoint_gateway_ip", "DELETE", "/v1/endpoint_gateways/endpoint_gateway_id-x/ips/id-x" ; "remove_endpoint_gateway_ip")]
#[test_case("get_endpoint_gateway_ip", "GET", "/v1/endpoint_gateways/endpoint_gateway_id-x/ips/id-x" ; "get_endpoint_gateway_ip")]
#[test_case("add_endpoint_gateway_ip", "PUT", "/v1/endpoint_gateways/endpoint_gateway_id-x/ips/id-x" ; "add_endpoint_gateway_ip")]
#[test_case("delete_endpoint_gateway", "DELETE", "/v1/endpoint_gateways/id-x" ; "delete_endpoint_gateway")]
#[test_case("get_endpoint_gateway", "GET", "/v1/endpoint_gateways/id-x" ; "get_endpoint_gateway")]
#[test_case("update_endpoint_gateway", "PATCH", "/v1/endpoint_gateways/id-x" ; "update_endpoint_gateway")]
#[test_case("list_floating_ips", "GET", "/v1/floating_ips" ; "list_floating_ips")]
#[test_case("create_floating_ip", "POST", "/v1/floating_ips" ; "create_floating_ip")]
#[test_case("delete_floating_ip", "DELETE", "/v1/floating_ips/id-x" ; "delete_floating_ip")]
#[test_case("get_floating_ip", "GET", "/v1/floating_ips/id-x" ; "get_floating_ip")]
#[test_case("update_floating_ip", "PATCH", "/v1/floating_ips/id-x" ; "update_floating_ip")]
#[test_case("list_flow_log_collectors", "GET", "/v1/flow_log_collectors" ; "list_flow_log_collectors")]
#[test_case("create_flow_log_collector", "POST", "/v1/flow_log_collectors" ; "create_flow_log_collector")]
#[test_case("delete_flow_log_collector", "DELETE", "/v1/flow_log_collectors/id-x" ; "delete_flow_log_collector")]
#[test_case("get_flow_log_collector", "GET", "/v1/flow_log_collectors/id-x" ; "get_flow_log_collector")]
#[test_case("update_flow_log_collector", "PATCH", "/v1/flow_log_collectors/id-x" ; "update_flow_log_collector")]
#[test_case("list_regions", "GET", "/v1/regions" ; "list_regions")]
#[test_case("get_region", "GET", "/v1/regions/name-x" ; "get_region")]
#[test_case("list_region_zones", "GET", "/v1/regions/region_name-x/zones" ; "list_region_zones")]
#[test_case("get_region_zone", "GET", "/v1/regions/region_name-x/zones/name-x" ; "get_region_zone")]
#[test_case("list_images", "GET", "/v1/images" ; "list_images")]
#[test_case("create_image", "POST", "/v1/images" ; "create_image")]
#[test_case("delete_image", "DELETE", "/v1/images/id-x" ; "delete_image")]
#[test_case("get_image", "GET", "/v1/images/id-x" ; "get_image")]
#[test_case("update_image", "PATCH", "/v1/images/id-x" ; "update_image")]
#[test_case("list_operating_systems", "GET", "/v1/operating_systems" ; "list_operating_systems")]
#[test_case("get_operating_system", "GET", "/v1/operating_systems/name-x" ; "get_operating_system")]
#[test_case("list_instance_profiles", "GET", "/v1/instance/profiles" ; "list_instance_profiles")]
#[test_case("get_instance_profile", "GET", "/v1/instance/profiles/name-x" ; "get_instance_profile")]
#[test_case("list_instance_templates", "GET", "/v1/instance/templates" ; "list_instance_templates")]
#[test_case("create_instance_template", "POST", "/v1/instance/templates" ; "create_instance_template")]
#[test_case("delete_instance_template", "DELETE", "/v1/instance/templates/id-x" ; "delete_instance_template")]
#[test_case("get_instance_template", "GET", "/v1/instance/templates/id-x" ; "get_instance_template")]
#[test_case("update_instance_template", "PATCH", "/v1/instance/templates/id-x" ; "update_instance_template")]
#[test_case("list_instances", "GET", "/v1/instances" ; "list_instances")]
#[test_case("create_instance", "POST", "/v1/instances" ; "create_instance")]
#[test_case("delete_instance", "DELETE", "/v1/instances/id-x" ; "delete_instance")]
#[test_case("get_instance", "GET", "/v1/instances/id-x" ; "get_instance")]
#[test_case("update_instance", "PATCH", "/v1/instances/id-x" ; "update_instance")]
#[test_case("get_instance_initialization", "GET", "/v1/instances/id-x/initialization" ; "get_instance_initialization")]
#[test_case("create_instance_action", "POST", "/v1/instances/instance_id-x/actions" ; "create_instance_action")]
#[test_case("list_instance_network_interfaces", "GET", "/v1/instances/instance_id-x/network_interfaces" ; "list_instance_network_interfaces")]
#[test_case("create_instance_network_interface", "POST", "/v1/instances/instance_id-x/network_interfaces" ; "create_instance_network_interface")]
#[test_case("delete_instance_network_interface", "DELETE", "/v1/instances/instance_id-x/network_interfaces/id-x" ; "delete_instance_network_interface")]
#[test_case("get_instance_network_interface", "GET", "/v1/instances/instance_id-x/network_interfaces/id-x" ; "get_instance_network_interface")]
#[test_case("update_instance_network_interface", "PATCH", "/v1/instances/instance_id-x/network_interfaces/id-x" ; "update_instance_network_interface")]
#[test_case("list_instance_network_interface_floating_ips", "GET", "/v1/instances/instance_id-x/network_interfaces/network_interface_id-x/floating_ips" ; "list_instance_network_interface_floating_ips")]
#[test_case("remove_instance_network_interface_floating_ip", "DELETE", "/v1/instances/instance_id-x/network_interfaces/network_interface_id-x/floating_ips/id-x" ; "remove_instance_network_interface_floating_ip")]
#[test_case("get_instance_network_interface_floating_ip", "GET", "/v1/instances/instance_id-x/network_interfaces/network_interface_id-x/floating_ips/id-x" ; "get_instance_network_interface_floating_ip")]
#[test_case("add_instance_network_interface_floating_ip", "PUT", "/v1/instances/instance_id-x/network_interfaces/network_interface_id-x/floating_ips/id-x" ; "add_instance_network_interface_floating_ip")]
#[test_case("list_instance_volume_attachments", "GET", "/v1/instances/instance_id-x/volume_attachments" ; "list_instance_volume_attachments")]
#[test_case("create_instance_volume_attachment", "POST", "/v1/instances/instance_id-x/volume_attachments" ; "create_instance_volume_attachment")]
#[test_case("delete_instance_volume_attachment", "DELETE", "/v1/instances/instance_id-x/volume_attachments/id-x" ; "delete_instance_volume_attachment")]
#[test_case("get_instance_volume_attachment", "GET", "/v1/instances/instance_id-x/volume_attachments/id-x" ; "get_instance_volume_attachment")]
#[test_case("update_instance_volume_attachment", "PATCH", "/v1/instances/instance_id-x/volume_attachments/id-x" ; "update_instance_volume_attachment")]
#[test_case("list_instance_groups", "GET", "/v1/instance_groups" ; "list_instance_groups")]
#[test_case("create_instance_group", "POST", "/v1/instance_groups" ; "create_instance_group")]
#[test_case("delete_instance_group", "DELETE", "/v1/instance_groups/id-x" ; "delete_instance_group")]
#[test_case("get_instance_group", "GET", "/v1/instance_groups/id-x" ; "get_instance_group")]
#[test_case("update_instance_group", "PATCH", "/v1/instance_groups/id-x" ; "update_instance_group")]
#[test_case("delete_instance_group_load_balancer", "DELETE", "/v1/instance_groups/instance_group_id-x/load_balancer" ; "delete_instance_group_load_balancer")]
#[test_case("list_instance_group_managers", "GET", "/v1/instance_groups/instance_group_id-x/managers" ; "list_instance_group_managers")]
#[test_case("create_instance_group_manager", "POST", "/v1/instance_groups/instance_group_id-x/managers" ; "create_instance_group_manager")]
#[test_case("delete_instance_group_manager", "DELETE", "/v1/instance_groups/instance_group_id-x/managers/id-x" ; "delete_instance_group_manager")]
#[test_case("get_instance_group_manager", "GET", "/v1/instance_groups/instance_group_id-x/managers/id-x" ; "get_instance_group_manager")]
#[test_case("update_instance_group_manager", "PATCH", "/v1/instance_groups/instance_group_id-x/managers/id-x" ; "update_instance_group_manager")]
#[test_case("list_instance_group_manager_policies", "GET", "/v1/instance_groups/instance_group_id-x/managers/instance_group_manager_id-x/policies" ; "list_instance_group_manager_policies")]
#[test_case("create_instance_group_manager_policy", "POST", "/v1/instance_groups/instance_group_id-x/managers/instance_group_manager_id-x/policies" ; "create_instance_group_manager_policy")]
#[test_case("delete_instance_group_manager_policy", "DELETE", "/v1/instance_groups/instance_group_id-x/managers/instance_group_manager_id-x/policies/id-x" ; "delete_instance_group_manager_policy")]
#[test_case("get_instance_group_manager_policy", "GET", "/v1/instance_groups/instance_group_id-x/managers/instance_group_manager_id-x/policies/id-x" ; "get_instance_group_manager_policy")]
#[test_case("update_instance_group_manager_policy", "PATCH", "/v1/instance_groups/instance_group_id-x/managers/instance_group_manager_id-x/policies/id-x" ; "update_instance_group_manager_policy")]
#[test_case("delete_instance_group_memberships", "DELETE", "/v1/instance_groups/instance_group_id-x/memberships" ; "delete_instance_group_memberships")]
#[test_case("list_instance_group_memberships", "GET", "/v1/instance_groups/instance_group_id-x/memberships" ; "list_instance_group_memberships")]
#[test_case("delete_instance_group_membership", "DELETE", "/v1/instance_groups/instance_group_id-x/memberships/id-x" ; "delete_instance_group_membership")]
#[test_case("get_instance_group_membership", "GET", "/v1/instance_groups/instance_group_id-x/memberships/id-x" ; "get_instance_group_membership")]
#[test_case("update_instance_group_membership", "PATCH", "/v1/instance_groups/instance_group_id-x/memberships/id-x" ; "update_instance_group_membership")]
#[test_case("list_keys", "GET", "/v1/keys" ; "list_keys")]
#[test_case("create_key", "POST", "/v1/keys" ; "create_key")]
#[test_case("delete_key", "DELETE", "/v1/keys/id-x" ; "delete_key")]
#[test_case("get_key", "GET", "/v1/keys/id-x" ; "get_key")]
#[test_case("update_key", "PATCH", "/v1/keys/id-x" ; "update_key")]
#[test_case("list_load_balancer_profiles", "GET", "/v1/load_balancers/profiles" ; "list_load_balancer_profiles")]
#[test_case("get_load_balancer_profile", "GET", "/v1/load_balancers/profiles/name-x" ; "get_load_balancer_profile")]
#[test_case("list_load_balancers", "GET", "/v1/load_balancers" ; "list_load_balancers")]
#[test_case("create_load_balancer", "POST", "/v1/load_balancers" ; "create_load_balancer")]
#[test_case("delete_load_balancer", "DELETE", "/v1/load_balancers/id-x" ; "delete_load_balancer")]
#[test_case("get_load_balancer", "GET", "/v1/load_balancers/id-x" ; "get_load_balancer")]
#[test_case("update_load_balancer", "PATCH", "/v1/load_balancers/id-x" ; "update_load_balancer")]
#[test_case("get_load_balancer_statistics", "GET", "/v1/load_balancers/id-x/statistics" ; "get_load_balancer_statistics")]
#[test_case("list_load_balancer_listeners", "GET", "/v1/load_balancers/load_balancer_id-x/listeners" ; "list_load_balancer_listeners")]
#[test_case("create_load_balancer_listener", "POST", "/v1/load_balancers/load_balancer_id-x/listeners" ; "create_load_balancer_listener")]
#[test_case("delete_load_balancer_listener", "DELETE", "/v1/load_balancers/load_balancer_id-x/listeners/id-x" ; "delete_load_balancer_listener")]
#[test_case("get_load_balancer_listener", "GET", "/v1/load_balancers/load_balancer_id-x/listeners/id-x" ; "get_load_balancer_listener")]
#[test_case("update_load_balancer_listener", "PATCH", "/v1/load_balancers/load_balancer_id-x/listeners/id-x" ; "update_load_balancer_listener")]
#[test_case("list_load_balancer_listener_policies", "GET", "/v1/load_balancers/load_balancer_id-x/listeners/listener_id-x/policies" ; "list_load_balancer_listener_policies")]
#[test_case("create_load_balancer_listener_policy", "POST", "/v1/load_balancers/load_balancer_id-x/listeners/listener_id-x/policies" ; "create_load_balancer_listener_policy")]
#[test_case("delete_load_balancer_listener_policy", "DELETE", "/v1/load_balancers/load_balancer_id-x/listeners/listener_id-x/policies/id-x" ; "delete_load_balancer_listener_policy")]
#[test_case("get_load_balancer_listener_policy", "GET", "/v1/load_balancers/load_balancer_id-x/listeners/listener_id-x/policies/id-x" ; "get_load_balancer_listener_policy")]
#[test_case("update_load_balancer_listener_policy", "PATCH", "/v1/load_balancers/load_balancer_id-x/listeners/listener_id-x/policies/id-x" ; "update_load_balancer_listener_policy")]
#[test_case("list_load_balancer_listener_policy_rules", "GET", "/v1/load_balancers/load_balancer_id-x/listeners/listener_id-x/policies/policy_id-x/rules" ; "list_load_balancer_listener_policy_rules")]
#[test_case("create_load_balancer_listener_policy_rule", "POST", "/v1/load_balancers/load_balancer_id-x/listeners/listener_id-x/policies/policy_id-x/rules" ; "create_load_balancer_listener_policy_rule")]
#[test_case("delete_load_balancer_listener_policy_rule", "DELETE", "/v1/load_balancers/load_balancer_id-x/listeners/listener_id-x/policies/policy_id-x/rules/id-x" ; "delete_load_balancer_listener_policy_rule")]
#[test_case("get_load_balancer_listener_policy_rule", "GET", "/v1/load_balancers/load_balancer_id-x/listeners/listener_id-x/policies/policy_id-x/rules/id-x" ; "get_load_balancer_listener_policy_rule")]
#[test_case("update_load_balancer_listener_policy_rule", "PATCH", "/v1/load_balancers/load_balancer_id-x/listeners/listener_id-x/policies/policy_id-x/rules/id-x" ; "update_load_balancer_listener_policy_rule")]
#[test_case("list_load_balancer_pools", "GET", "/v1/load_balancers/load_balancer_id-x/pools" ; "list_load_balancer_pools")]
#[test_case("create_load_balancer_pool", "POST", "/v1/load_balancers/load_balancer_id-x/pools" ; "create_load_balancer_pool")]
#[test_case("delete_load_balancer_pool", "DELETE", "/v1/load_balancers/load_balancer_id-x/pools/id-x" ; "delete_load_balancer_pool")]
#[test_case("get_load_balancer_pool", "GET", "/v1/load_balancers/load_balancer_id-x/pools/id-x" ; "get_load_balancer_pool")]
#[test_case("update_load_balancer_pool", "PATCH", "/v1/load_balancers/load_balancer_id-x/pools/id-x" ; "update_load_balancer_pool")]
#[test_case("list_load_balancer_pool_members", "GET", "/v1/load_balancers/load_balancer_id-x/pools/pool_id-x/members" ; "list_load_balancer_pool_members")]
#[test_case("create_load_balancer_pool_member", "POST", "/v1/load_balancers/load_balancer_id-x/pools/pool_id-x/members" ; "create_load_balancer_pool_member")]
#[test_case("replace_load_balancer_pool_members", "PUT", "/v1/load_balancers/load_balancer_id-x/pools/pool_id-x/members" ; "replace_load_balancer_pool_members")]
#[test_case("delete_load_balancer_pool_member", "DELETE", "/v1/load_balancers/load_balancer_id-x/pools/pool_id-x/members/id-x" ; "delete_load_balancer_pool_member")]
#[test_case("get_load_balancer_pool_member", "GET", "/v1/load_balancers/load_balancer_id-x/pools/pool_id-x/members/id-x" ; "get_load_balancer_pool_member")]
#[test_case("update_load_balancer_pool_member", "PATCH", "/v1/load_balancers/load_balancer_id-x/pools/pool_id-x/members/id-x" ; "update_load_balancer_pool_member")]
#[test_case("list_network_acls", "GET", "/v1/network_acls" ; "list_network_acls")]
#[test_case("create_network_acl", "POST", "/v1/network_acls" ; "create_network_acl")]
#[test_case("delete_network_acl", "DELETE", "/v1/network_acls/id-x" ; "delete_network_acl")]
#[test_case("get_network_acl", "GET", "/v1/network_acls/id-x" ; "get_network_acl")]
#[test_case("update_network_acl", "PATCH", "/v1/network_acls/id-x" ; "update_network_acl")]
#[test_case("list_network_acl_rules", "GET", "/v1/network_acls/network_acl_id-x/rules" ; "list_network_acl_rules")]
#[test_case("create_network_acl_rule", "POST", "/v1/network_acls/network_acl_id-x/rules" ; "create_network_acl_rule")]
#[test_case("delete_network_acl_rule", "DELETE", "/v1/network_acls/network_acl_id-x/rules/id-x" ; "delete_network_acl_rule")]
#[test_case("get_network_acl_rule", "GET", "/v1/network_acls/network_acl_id-x/rules/id-x" ; "get_network_acl_rule")]
#[test_case("update_network_acl_rule", "PATCH", "/v1/network_acls/network_acl_id-x/rules/id-x" ; "update_network_acl_rule")]
#[test_case("list_public_gateways", "GET", "/v1/public_gateways" ; "list_public_gateways")]
#[test_case("create_public_gateway", "POST", "/v1/public_gateways" ; "create_public_gateway")]
#[test_case("delete_public_gateway", "DELETE", "/v1/public_gateways/id-x" ; "delete_public_gateway")]
#[test_case("get_public_gateway", "GET", "/v1/public_gateways/id-x" ; "get_public_gateway")]
#[test_case("update_public_gateway", "PATCH", "/v1/public_gateways/id-x" ; "update_public_gateway")]
#[test_case("list_security_groups", "GET", "/v1/security_groups" ; "list_security_groups")]
#[test_case("create_security_group", "POST", "/v1/security_groups" ; "create_security_group")]
#[test_case("delete_security_group", "DELETE", "/v1/security_groups/id-x" ; "delete_security_group")]
#[test_case("get_security_group", "GET", "/v1/security_groups/id-x" ; "get_security_group")]
#[test_case("update_security_group", "PATCH", "/v1/security_groups/id-x" ; "update_security_group")]
#[test_case("list_security_group_network_interfaces", "GET", "/v1/security_groups/security_group_id-x/network_interfaces" ; "list_security_group_network_interfaces")]
#[test_case("remove_security_group_network_interface", "DELETE", "/v1/security_groups/security_group_id-x/network_interfaces/id-x" ; "remove_security_group_network_interface")]
#[test_case("get_security_group_network_interface", "GET", "/v1/security_groups/security_group_id-x/network_interfaces/id-x" ; "get_security_group_network_interface")]
#[test_case("add_security_group_network_interface", "PUT", "/v1/security_groups/security_group_id-x/network_interfaces/id-x" ; "add_security_group_network_interface")]
#[test_case("list_security_group_rules", "GET", "/v1/security_groups/security_group_id-x/rules" ; "list_security_group_rules")]
#[test_case("create_security_group_rule", "POST", "/v1/security_groups/security_group_id-x/rules" ; "create_security_group_rule")]
#[test_case("delete_security_group_rule", "DELETE", "/v1/security_groups/security_group_id-x/rules/id-x" ; "delete_security_group_rule")]
#[test_case("get_security_group_rule", "GET", "/v1/security_groups/security_group_id-x/rules/id-x" ; "get_security_group_rule")]
#[test_case("update_security_group_rule", "PATCH", "/v1/security_groups/security_group_id-x/rules/id-x" ; "update_security_group_rule")]
#[test_case("list_subnets", "GET", "/v1/subnets" ; "list_subnets")]
#[test_case("create_subnet", "POST", "/v1/subnets" ; "create_subnet")]
#[test_case("delete_subnet", "DELETE", "/v1/subnets/id-x" ; "delete_subnet")]
#[test_case("get_subnet", "GET", "/v1/subnets/id-x" ; "get_subnet")]
#[test_case("update_subnet", "PATCH", "/v1/subnets/id-x" ; "update_subnet")]
#[test_case("get_subnet_network_acl", "GET", "/v1/subnets/id-x/network_acl" ; "get_subnet_network_acl")]
#[test_case("replace_subnet_network_acl", "PUT", "/v1/subnets/id-x/network_acl" ; "replace_subnet_network_acl")]
#[test_case("unset_subnet_public_gateway", "DELETE", "/v1/subnets/id-x/public_gateway" ; "unset_subnet_public_gateway")]
#[test_case("get_subnet_public_gateway", "GET", "/v1/subnets/id-x/public_gateway" ; "get_subnet_public_gateway")]
#[test_case("set_subnet_public_gateway", "PUT", "/v1/subnets/id-x/public_gateway" ; "set_subnet_public_gateway")]
#[test_case("list_volume_profiles", "GET", "/v1/volume/profiles" ; "list_volume_profiles")]
#[test_case("get_volume_profile", "GET", "/v1/volume/profiles/name-x" ; "get_volume_profile")]
#[test_case("list_volumes", "GET", "/v1/volumes" ; "list_volumes")]
#[test_case("create_volume", "POST", "/v1/volumes" ; "create_volume")]
#[test_case("delete_volume", "DELETE", "/v1/volumes/id-x" ; "delete_volume")]
#[test_case("get_volume", "GET", "/v1/volumes/id-x" ; "get_volume")]
#[test_case("update_volume", "PATCH", "/v1/volumes/id-x" ; "update_volume")]
#[test_case("list_vpcs", "GET", "/v1/vpcs" ; "list_vpcs")]
#[test_case("create_vpc", "POST", "/v1/vpcs" ; "create_vpc")]
#[test_case("delete_vpc", "DELETE", "/v1/vpcs/id-x" ; "delete_vpc")]
#[test_case("get_vpc", "GET", "/v1/vpcs/id-x" ; "get_vpc")]
#[test_case("update_vpc", "PATCH", "/v1/vpcs/id-x" ; "update_vpc")]
#[test_case("get_vpc_default_network_acl", "GET", "/v1/vpcs/id-x/default_network_acl" ; "get_vpc_default_network_acl")]
#[test_case("get_vpc_default_security_group", "GET", "/v1/vpcs/id-x/default_security_group" ; "get_vpc_default_security_group")]
#[test_case("list_vpc_address_prefixes", "GET", "/v1/vpcs/vpc_id-x/address_prefixes" ; "list_vpc_address_prefixes")]
#[test_case("create_vpc_address_prefix", "POST", "/v1/vpcs/vpc_id-x/address_prefixes" ; "create_vpc_address_prefix")]
#[test_case("delete_vpc_address_prefix", "DELETE", "/v1/vpcs/vpc_id-x/address_prefixes/id-x" ; "delete_vpc_address_prefix")]
#[test_case("get_vpc_address_prefix", "GET", "/v1/vpcs/vpc_id-x/address_prefixes/id-x" ; "get_vpc_address_prefix")]
#[test_case("update_vpc_address_prefix", "PATCH", "/v1/vpcs/vpc_id-x/address_prefixes/id-x" ; "update_vpc_address_prefix")]
#[test_case("list_vpc_routes", "GET", "/v1/vpcs/vpc_id-x/routes" ; "list_vpc_routes")]
#[test_case("create_vpc_route", "POST", "/v1/vpcs/vpc_id-x/routes" ; "create_vpc_route")]
#[test_case("delete_vpc_route", "DELETE", "/v1/vpcs/vpc_id-x/routes/id-x" ; "delete_vpc_route")]
#[test_case("get_vpc_route", "GET", "/v1/vpcs/vpc_id-x/routes/id-x" ; "get_vpc_route")]
#[test_case("update_vpc_route", "PATCH", "/v1/vpcs/vpc_id-x/routes/id-x" ; "update_vpc_route")]
#[test_case("list_vpn_gateways", "GET", "/v1/vpn_gateways" ; "list_vpn_gateways")]
#[test_case("create_vpn_gateway", "POST", "/v1/vpn_gateways" ; "create_vpn_gateway")]
#[test_case("delete_vpn_gateway", "DELETE", "/v1/vpn_gateways/id-x" ; "delete_vpn_gateway")]
#[test_case("get_vpn_gateway", "GET", "/v1/vpn_gateways/id-x" ; "get_vpn_gateway")]
#[test_case("update_vpn_gateway", "PATCH", "/v1/vpn_gateways/id-x" ; "update_vpn_gateway")]
#[test_case("list_vpn_gateway_connections", "GET", "/v1/vpn_gateways/vpn_gateway_id-x/connections" ; "list_vpn_gateway_connections")]
#[test_case("create_vpn_gateway_connection", "POST", "/v1/vpn_gateways/vpn_gateway_id-x/connections" ; "create_vpn_gateway_connection")]
#[test_case("delete_vpn_gateway_connection", "DELETE", "/v1/vpn_gateways/vpn_gateway_id-x/connections/id-x" ; "delete_vpn_gateway_connection")]
#[test_case("get_vpn_gateway_connection", "GET", "/v1/vpn_gateways/vpn_gateway_id-x/connections/id-x" ; "get_vpn_gateway_connection")]
#[test_case("update_vpn_gateway_connection", "PATCH", "/v1/vpn_gateways/vpn_gateway_id-x/connections/id-x" ; "update_vpn_gateway_connection")]
#[test_case("list_vpn_gateway_connection_local_cidrs", "GET", "/v1/vpn_gateways/vpn_gateway_id-x/connections/id-x/local_cidrs" ; "list_vpn_gateway_connection_local_cidrs")]
#[test_case("remove_vpn_gateway_connection_local_cidr", "DELETE", "/v1/vpn_gateways/vpn_gateway_id-x/connections/id-x/local_cidrs/cidr_prefix-x/prefix_length-x" ; "remove_vpn_gateway_connection_local_cidr")]
#[test_case("check_vpn_gateway_connection_local_cidr", "GET", "/v1/vpn_gateways/vpn_gateway_id-x/connections/id-x/local_cidrs/cidr_prefix-x/prefix_length-x" ; "check_vpn_gateway_connection_local_cidr")]
#[test_case("add_vpn_gateway_connection_local_cidr", "PUT", "/v1/vpn_gateways/vpn_gateway_id-x/connections/id-x/local_cidrs/cidr_prefix-x/prefix_length-x" ; "add_vpn_gateway_connection_local_cidr")]
#[test_case("list_vpn_gateway_connection_peer_cidrs", "GET", "/v1/vpn_gateways/vpn_gateway_id-x/connections/id-x/peer_cidrs" ; "list_vpn_gateway_connection_peer_cidrs")]
#[test_case("remove_vpn_gateway_connection_peer_cidr", "DELETE", "/v1/vpn_gateways/vpn_gateway_id-x/connections/id-x/peer_cidrs/cidr_prefix-x/prefix_length-x" ; "remove_vpn_gateway_connection_peer_cidr")]
#[test_case("check_vpn_gateway_connection_peer_cidr", "GET", "/v1/vpn_gateways/vpn_gateway_id-x/connections/id-x/peer_cidrs/cidr_prefix-x/prefix_length-x" ; "check_vpn_gateway_connection_peer_cidr")]
#[test_case("add_vpn_gateway_connection_peer_cidr", "PUT", "/v1/vpn_gateways/vpn_gateway_id-x/connections/id-x/peer_cidrs/cidr_prefix-x/prefix_length-x" ; "add_vpn_gateway_connection_peer_cidr")]
#[test_case("list_ike_policies", "GET", "/v1/ike_policies" ; "list_ike_policies")]
#[test_case("create_ike_policy", "POST", "/v1/ike_policies" ; "create_ike_policy")]
#[test_case("delete_ike_policy", "DELETE", "/v1/ike_policies/id-x" ; "delete_ike_policy")]
#[test_case("get_ike_policy", "GET", "/v1/ike_policies/id-x" ; "get_ike_policy")]
#[test_case("update_ike_policy", "PATCH", "/v1/ike_policies/id-x" ; "update_ike_policy")]
#[test_case("list_ike_policy_connections", "GET", "/v1/ike_policies/id-x/connections" ; "list_ike_policy_connections")]
#[test_case("list_ipsec_policies", "GET", "/v1/ipsec_policies" ; "list_ipsec_policies")]
#[test_case("create_ipsec_policy", "POST", "/v1/ipsec_policies" ; "create_ipsec_policy")]
#[test_case("delete_ipsec_policy", "DELETE", "/v1/ipsec_policies/id-x" ; "delete_ipsec_policy")]
#[test_case("get_ipsec_policy", "GET", "/v1/ipsec_policies/id-x" ; "get_ipsec_policy")]
#[test_case("update_ipsec_policy", "PATCH", "/v1/ipsec_policies/id-x" ; "update_ipsec_policy")]
#[test_case("list_ipsec_policy_connections", "GET", "/v1/ipsec_policies/id-x/connections" ; "list_ipsec_policy_connections")]
#[tokio::test]
async fn sends_method_and_path(operation: &str, method: &str, path: &str) {
    let (server, client) = setup().await;

    // `{}` does not decode into every response type; only the request matters
    match call_with_required(&client, operation).await {
        Ok(()) | Err(Error::InvalidResponsePayload { .. }) => {}
        Err(e) => panic!("{operation} failed: {e}"),
    }

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method.as_str(), method);
    assert_eq!(request.url.path(), path);
    let query = request.url.query().unwrap_or_default();
    assert!(
        query.starts_with(VERSION_AND_GENERATION),
        "{operation} query was {query}"
    );
}

// ============================================================================
// Required parameters
// ============================================================================

#[test_case("create_endpoint_gateway", &["target", "vpc"] ; "create_endpoint_gateway")]
#[test_case("list_endpoint_gateway_ips", &["endpoint_gateway_id"] ; "list_endpoint_gateway_ips")]
#[test_case("remove_endpoint_gateway_ip", &["endpoint_gateway_id", "id"] ; "remove_endpoint_gateway_ip")]
#[test_case("get_endpoint_gateway_ip", &["endpoint_gateway_id", "id"] ; "get_endpoint_gateway_ip")]
#[test_case("add_endpoint_gateway_ip", &["endpoint_gateway_id", "id"] ; "add_endpoint_gateway_ip")]
#[test_case("delete_endpoint_gateway", &["id"] ; "delete_endpoint_gateway")]
#[test_case("get_endpoint_gateway", &["id"] ; "get_endpoint_gateway")]
#[test_case("update_endpoint_gateway", &["id"] ; "update_endpoint_gateway")]
#[test_case("create_floating_ip", &["body"] ; "create_floating_ip")]
#[test_case("delete_floating_ip", &["id"] ; "delete_floating_ip")]
#[test_case("get_floating_ip", &["id"] ; "get_floating_ip")]
#[test_case("update_floating_ip", &["id"] ; "update_floating_ip")]
#[test_case("create_flow_log_collector", &["storage_bucket", "target"] ; "create_flow_log_collector")]
#[test_case("delete_flow_log_collector", &["id"] ; "delete_flow_log_collector")]
#[test_case("get_flow_log_collector", &["id"] ; "get_flow_log_collector")]
#[test_case("update_flow_log_collector", &["id"] ; "update_flow_log_collector")]
#[test_case("get_region", &["name"] ; "get_region")]
#[test_case("list_region_zones", &["region_name"] ; "list_region_zones")]
#[test_case("get_region_zone", &["region_name", "name"] ; "get_region_zone")]
#[test_case("create_image", &["body"] ; "create_image")]
#[test_case("delete_image", &["id"] ; "delete_image")]
#[test_case("get_image", &["id"] ; "get_image")]
#[test_case("update_image", &["id"] ; "update_image")]
#[test_case("get_operating_system", &["name"] ; "get_operating_system")]
#[test_case("get_instance_profile", &["name"] ; "get_instance_profile")]
#[test_case("create_instance_template", &["body"] ; "create_instance_template")]
#[test_case("delete_instance_template", &["id"] ; "delete_instance_template")]
#[test_case("get_instance_template", &["id"] ; "get_instance_template")]
#[test_case("update_instance_template", &["id"] ; "update_instance_template")]
#[test_case("create_instance", &["body"] ; "create_instance")]
#[test_case("delete_instance", &["id"] ; "delete_instance")]
#[test_case("get_instance", &["id"] ; "get_instance")]
#[test_case("update_instance", &["id"] ; "update_instance")]
#[test_case("get_instance_initialization", &["id"] ; "get_instance_initialization")]
#[test_case("create_instance_action", &["instance_id", "type"] ; "create_instance_action")]
#[test_case("list_instance_network_interfaces", &["instance_id"] ; "list_instance_network_interfaces")]
#[test_case("create_instance_network_interface", &["instance_id", "subnet"] ; "create_instance_network_interface")]
#[test_case("delete_instance_network_interface", &["instance_id", "id"] ; "delete_instance_network_interface")]
#[test_case("get_instance_network_interface", &["instance_id", "id"] ; "get_instance_network_interface")]
#[test_case("update_instance_network_interface", &["instance_id", "id"] ; "update_instance_network_interface")]
#[test_case("list_instance_network_interface_floating_ips", &["instance_id", "network_interface_id"] ; "list_instance_network_interface_floating_ips")]
#[test_case("remove_instance_network_interface_floating_ip", &["instance_id", "network_interface_id", "id"] ; "remove_instance_network_interface_floating_ip")]
#[test_case("get_instance_network_interface_floating_ip", &["instance_id", "network_interface_id", "id"] ; "get_instance_network_interface_floating_ip")]
#[test_case("add_instance_network_interface_floating_ip", &["instance_id", "network_interface_id", "id"] ; "add_instance_network_interface_floating_ip")]
#[test_case("list_instance_volume_attachments", &["instance_id"] ; "list_instance_volume_attachments")]
#[test_case("create_instance_volume_attachment", &["instance_id", "volume"] ; "create_instance_volume_attachment")]
#[test_case("delete_instance_volume_attachment", &["instance_id", "id"] ; "delete_instance_volume_attachment")]
#[test_case("get_instance_volume_attachment", &["instance_id", "id"] ; "get_instance_volume_attachment")]
#[test_case("update_instance_volume_attachment", &["instance_id", "id"] ; "update_instance_volume_attachment")]
#[test_case("create_instance_group", &["instance_template", "subnets"] ; "create_instance_group")]
#[test_case("delete_instance_group", &["id"] ; "delete_instance_group")]
#[test_case("get_instance_group", &["id"] ; "get_instance_group")]
#[test_case("update_instance_group", &["id"] ; "update_instance_group")]
#[test_case("delete_instance_group_load_balancer", &["instance_group_id"] ; "delete_instance_group_load_balancer")]
#[test_case("list_instance_group_managers", &["instance_group_id"] ; "list_instance_group_managers")]
#[test_case("create_instance_group_manager", &["instance_group_id", "body"] ; "create_instance_group_manager")]
#[test_case("delete_instance_group_manager", &["instance_group_id", "id"] ; "delete_instance_group_manager")]
#[test_case("get_instance_group_manager", &["instance_group_id", "id"] ; "get_instance_group_manager")]
#[test_case("update_instance_group_manager", &["instance_group_id", "id"] ; "update_instance_group_manager")]
#[test_case("list_instance_group_manager_policies", &["instance_group_id", "instance_group_manager_id"] ; "list_instance_group_manager_policies")]
#[test_case("create_instance_group_manager_policy", &["instance_group_id", "instance_group_manager_id", "body"] ; "create_instance_group_manager_policy")]
#[test_case("delete_instance_group_manager_policy", &["instance_group_id", "instance_group_manager_id", "id"] ; "delete_instance_group_manager_policy")]
#[test_case("get_instance_group_manager_policy", &["instance_group_id", "instance_group_manager_id", "id"] ; "get_instance_group_manager_policy")]
#[test_case("update_instance_group_manager_policy", &["instance_group_id", "instance_group_manager_id", "id"] ; "update_instance_group_manager_policy")]
#[test_case("delete_instance_group_memberships", &["instance_group_id"] ; "delete_instance_group_memberships")]
#[test_case("list_instance_group_memberships", &["instance_group_id"] ; "list_instance_group_memberships")]
#[test_case("delete_instance_group_membership", &["instance_group_id", "id"] ; "delete_instance_group_membership")]
#[test_case("get_instance_group_membership", &["instance_group_id", "id"] ; "get_instance_group_membership")]
#[test_case("update_instance_group_membership", &["instance_group_id", "id"] ; "update_instance_group_membership")]
#[test_case("create_key", &["public_key"] ; "create_key")]
#[test_case("delete_key", &["id"] ; "delete_key")]
#[test_case("get_key", &["id"] ; "get_key")]
#[test_case("update_key", &["id"] ; "update_key")]
#[test_case("get_load_balancer_profile", &["name"] ; "get_load_balancer_profile")]
#[test_case("create_load_balancer", &["is_public", "subnets"] ; "create_load_balancer")]
#[test_case("delete_load_balancer", &["id"] ; "delete_load_balancer")]
#[test_case("get_load_balancer", &["id"] ; "get_load_balancer")]
#[test_case("update_load_balancer", &["id"] ; "update_load_balancer")]
#[test_case("get_load_balancer_statistics", &["id"] ; "get_load_balancer_statistics")]
#[test_case("list_load_balancer_listeners", &["load_balancer_id"] ; "list_load_balancer_listeners")]
#[test_case("create_load_balancer_listener", &["load_balancer_id", "port", "protocol"] ; "create_load_balancer_listener")]
#[test_case("delete_load_balancer_listener", &["load_balancer_id", "id"] ; "delete_load_balancer_listener")]
#[test_case("get_load_balancer_listener", &["load_balancer_id", "id"] ; "get_load_balancer_listener")]
#[test_case("update_load_balancer_listener", &["load_balancer_id", "id"] ; "update_load_balancer_listener")]
#[test_case("list_load_balancer_listener_policies", &["load_balancer_id", "listener_id"] ; "list_load_balancer_listener_policies")]
#[test_case("create_load_balancer_listener_policy", &["load_balancer_id", "listener_id", "action", "priority"] ; "create_load_balancer_listener_policy")]
#[test_case("delete_load_balancer_listener_policy", &["load_balancer_id", "listener_id", "id"] ; "delete_load_balancer_listener_policy")]
#[test_case("get_load_balancer_listener_policy", &["load_balancer_id", "listener_id", "id"] ; "get_load_balancer_listener_policy")]
#[test_case("update_load_balancer_listener_policy", &["load_balancer_id", "listener_id", "id"] ; "update_load_balancer_listener_policy")]
#[test_case("list_load_balancer_listener_policy_rules", &["load_balancer_id", "listener_id", "policy_id"] ; "list_load_balancer_listener_policy_rules")]
#[test_case("create_load_balancer_listener_policy_rule", &["load_balancer_id", "listener_id", "policy_id", "condition", "type", "value"] ; "create_load_balancer_listener_policy_rule")]
#[test_case("delete_load_balancer_listener_policy_rule", &["load_balancer_id", "listener_id", "policy_id", "id"] ; "delete_load_balancer_listener_policy_rule")]
#[test_case("get_load_balancer_listener_policy_rule", &["load_balancer_id", "listener_id", "policy_id", "id"] ; "get_load_balancer_listener_policy_rule")]
#[test_case("update_load_balancer_listener_policy_rule", &["load_balancer_id", "listener_id", "policy_id", "id"] ; "update_load_balancer_listener_policy_rule")]
#[test_case("list_load_balancer_pools", &["load_balancer_id"] ; "list_load_balancer_pools")]
#[test_case("create_load_balancer_pool", &["load_balancer_id", "algorithm", "health_monitor", "protocol"] ; "create_load_balancer_pool")]
#[test_case("delete_load_balancer_pool", &["load_balancer_id", "id"] ; "delete_load_balancer_pool")]
#[test_case("get_load_balancer_pool", &["load_balancer_id", "id"] ; "get_load_balancer_pool")]
#[test_case("update_load_balancer_pool", &["load_balancer_id", "id"] ; "update_load_balancer_pool")]
#[test_case("list_load_balancer_pool_members", &["load_balancer_id", "pool_id"] ; "list_load_balancer_pool_members")]
#[test_case("create_load_balancer_pool_member", &["load_balancer_id", "pool_id", "port", "target"] ; "create_load_balancer_pool_member")]
#[test_case("replace_load_balancer_pool_members", &["load_balancer_id", "pool_id", "members"] ; "replace_load_balancer_pool_members")]
#[test_case("delete_load_balancer_pool_member", &["load_balancer_id", "pool_id", "id"] ; "delete_load_balancer_pool_member")]
#[test_case("get_load_balancer_pool_member", &["load_balancer_id", "pool_id", "id"] ; "get_load_balancer_pool_member")]
#[test_case("update_load_balancer_pool_member", &["load_balancer_id", "pool_id", "id"] ; "update_load_balancer_pool_member")]
#[test_case("delete_network_acl", &["id"] ; "delete_network_acl")]
#[test_case("get_network_acl", &["id"] ; "get_network_acl")]
#[test_case("update_network_acl", &["id"] ; "update_network_acl")]
#[test_case("list_network_acl_rules", &["network_acl_id"] ; "list_network_acl_rules")]
#[test_case("create_network_acl_rule", &["network_acl_id", "body"] ; "create_network_acl_rule")]
#[test_case("delete_network_acl_rule", &["network_acl_id", "id"] ; "delete_network_acl_rule")]
#[test_case("get_network_acl_rule", &["network_acl_id", "id"] ; "get_network_acl_rule")]
#[test_case("update_network_acl_rule", &["network_acl_id", "id"] ; "update_network_acl_rule")]
#[test_case("create_public_gateway", &["vpc", "zone"] ; "create_public_gateway")]
#[test_case("delete_public_gateway", &["id"] ; "delete_public_gateway")]
#[test_case("get_public_gateway", &["id"] ; "get_public_gateway")]
#[test_case("update_public_gateway", &["id"] ; "update_public_gateway")]
#[test_case("create_security_group", &["vpc"] ; "create_security_group")]
#[test_case("delete_security_group", &["id"] ; "delete_security_group")]
#[test_case("get_security_group", &["id"] ; "get_security_group")]
#[test_case("update_security_group", &["id"] ; "update_security_group")]
#[test_case("list_security_group_network_interfaces", &["security_group_id"] ; "list_security_group_network_interfaces")]
#[test_case("remove_security_group_network_interface", &["security_group_id", "id"] ; "remove_security_group_network_interface")]
#[test_case("get_security_group_network_interface", &["security_group_id", "id"] ; "get_security_group_network_interface")]
#[test_case("add_security_group_network_interface", &["security_group_id", "id"] ; "add_security_group_network_interface")]
#[test_case("list_security_group_rules", &["security_group_id"] ; "list_security_group_rules")]
#[test_case("create_security_group_rule", &["security_group_id", "body"] ; "create_security_group_rule")]
#[test_case("delete_security_group_rule", &["security_group_id", "id"] ; "delete_security_group_rule")]
#[test_case("get_security_group_rule", &["security_group_id", "id"] ; "get_security_group_rule")]
#[test_case("update_security_group_rule", &["security_group_id", "id"] ; "update_security_group_rule")]
#[test_case("create_subnet", &["body"] ; "create_subnet")]
#[test_case("delete_subnet", &["id"] ; "delete_subnet")]
#[test_case("get_subnet", &["id"] ; "get_subnet")]
#[test_case("update_subnet", &["id"] ; "update_subnet")]
#[test_case("get_subnet_network_acl", &["id"] ; "get_subnet_network_acl")]
#[test_case("replace_subnet_network_acl", &["id", "body"] ; "replace_subnet_network_acl")]
#[test_case("unset_subnet_public_gateway", &["id"] ; "unset_subnet_public_gateway")]
#[test_case("get_subnet_public_gateway", &["id"] ; "get_subnet_public_gateway")]
#[test_case("set_subnet_public_gateway", &["id", "body"] ; "set_subnet_public_gateway")]
#[test_case("get_volume_profile", &["name"] ; "get_volume_profile")]
#[test_case("create_volume", &["body"] ; "create_volume")]
#[test_case("delete_volume", &["id"] ; "delete_volume")]
#[test_case("get_volume", &["id"] ; "get_volume")]
#[test_case("update_volume", &["id"] ; "update_volume")]
#[test_case("delete_vpc", &["id"] ; "delete_vpc")]
#[test_case("get_vpc", &["id"] ; "get_vpc")]
#[test_case("update_vpc", &["id"] ; "update_vpc")]
#[test_case("get_vpc_default_network_acl", &["id"] ; "get_vpc_default_network_acl")]
#[test_case("get_vpc_default_security_group", &["id"] ; "get_vpc_default_security_group")]
#[test_case("list_vpc_address_prefixes", &["vpc_id"] ; "list_vpc_address_prefixes")]
#[test_case("create_vpc_address_prefix", &["vpc_id", "cidr", "zone"] ; "create_vpc_address_prefix")]
#[test_case("delete_vpc_address_prefix", &["vpc_id", "id"] ; "delete_vpc_address_prefix")]
#[test_case("get_vpc_address_prefix", &["vpc_id", "id"] ; "get_vpc_address_prefix")]
#[test_case("update_vpc_address_prefix", &["vpc_id", "id"] ; "update_vpc_address_prefix")]
#[test_case("list_vpc_routes", &["vpc_id"] ; "list_vpc_routes")]
#[test_case("create_vpc_route", &["vpc_id", "destination", "next_hop", "zone"] ; "create_vpc_route")]
#[test_case("delete_vpc_route", &["vpc_id", "id"] ; "delete_vpc_route")]
#[test_case("get_vpc_route", &["vpc_id", "id"] ; "get_vpc_route")]
#[test_case("update_vpc_route", &["vpc_id", "id"] ; "update_vpc_route")]
#[test_case("create_vpn_gateway", &["body"] ; "create_vpn_gateway")]
#[test_case("delete_vpn_gateway", &["id"] ; "delete_vpn_gateway")]
#[test_case("get_vpn_gateway", &["id"] ; "get_vpn_gateway")]
#[test_case("update_vpn_gateway", &["id"] ; "update_vpn_gateway")]
#[test_case("list_vpn_gateway_connections", &["vpn_gateway_id"] ; "list_vpn_gateway_connections")]
#[test_case("create_vpn_gateway_connection", &["vpn_gateway_id", "peer_address", "psk"] ; "create_vpn_gateway_connection")]
#[test_case("delete_vpn_gateway_connection", &["vpn_gateway_id", "id"] ; "delete_vpn_gateway_connection")]
#[test_case("get_vpn_gateway_connection", &["vpn_gateway_id", "id"] ; "get_vpn_gateway_connection")]
#[test_case("update_vpn_gateway_connection", &["vpn_gateway_id", "id"] ; "update_vpn_gateway_connection")]
#[test_case("list_vpn_gateway_connection_local_cidrs", &["vpn_gateway_id", "id"] ; "list_vpn_gateway_connection_local_cidrs")]
#[test_case("remove_vpn_gateway_connection_local_cidr", &["vpn_gateway_id", "id", "cidr_prefix", "prefix_length"] ; "remove_vpn_gateway_connection_local_cidr")]
#[test_case("check_vpn_gateway_connection_local_cidr", &["vpn_gateway_id", "id", "cidr_prefix", "prefix_length"] ; "check_vpn_gateway_connection_local_cidr")]
#[test_case("add_vpn_gateway_connection_local_cidr", &["vpn_gateway_id", "id", "cidr_prefix", "prefix_length"] ; "add_vpn_gateway_connection_local_cidr")]
#[test_case("list_vpn_gateway_connection_peer_cidrs", &["vpn_gateway_id", "id"] ; "list_vpn_gateway_connection_peer_cidrs")]
#[test_case("remove_vpn_gateway_connection_peer_cidr", &["vpn_gateway_id", "id", "cidr_prefix", "prefix_length"] ; "remove_vpn_gateway_connection_peer_cidr")]
#[test_case("check_vpn_gateway_connection_peer_cidr", &["vpn_gateway_id", "id", "cidr_prefix", "prefix_length"] ; "check_vpn_gateway_connection_peer_cidr")]
#[test_case("add_vpn_gateway_connection_peer_cidr", &["vpn_gateway_id", "id", "cidr_prefix", "prefix_length"] ; "add_vpn_gateway_connection_peer_cidr")]
#[test_case("create_ike_policy", &["authentication_algorithm", "dh_group", "encryption_algorithm", "ike_version"] ; "create_ike_policy")]
#[test_case("delete_ike_policy", &["id"] ; "delete_ike_policy")]
#[test_case("get_ike_policy", &["id"] ; "get_ike_policy")]
#[test_case("update_ike_policy", &["id"] ; "update_ike_policy")]
#[test_case("list_ike_policy_connections", &["id"] ; "list_ike_policy_connections")]
#[test_case("create_ipsec_policy", &["authentication_algorithm", "encryption_algorithm", "pfs"] ; "create_ipsec_policy")]
#[test_case("delete_ipsec_policy", &["id"] ; "delete_ipsec_policy")]
#[test_case("get_ipsec_policy", &["id"] ; "get_ipsec_policy")]
#[test_case("update_ipsec_policy", &["id"] ; "update_ipsec_policy")]
#[test_case("list_ipsec_policy_connections", &["id"] ; "list_ipsec_policy_connections")]
#[tokio::test]
async fn rejects_missing_parameters(operation: &str, expected: &[&str]) {
    let (server, client) = setup().await;

    match call_without_parameters(&client, operation).await {
        Err(Error::MissingParameters(missing)) => assert_eq!(missing, expected),
        other => panic!("{operation}: expected MissingParameters, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}
