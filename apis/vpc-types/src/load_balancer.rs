// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Load balancer types (profiles, load balancers, listeners, policies,
//! policy rules, pools, members)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::collection;
use crate::common::{
    Identity, IpAddress, NamedIdentity, ProfileValue, Reference, ResourceGroupIdentity,
    SubnetIdentity, Timestamp,
};

// ============================================================================
// Enumerations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProvisioningStatus {
    Active,
    CreatePending,
    DeletePending,
    Failed,
    MaintenancePending,
    UpdatePending,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OperatingStatus {
    Offline,
    Online,
    #[serde(other)]
    Unknown,
}

/// Protocol of a listener, pool or health monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LoadBalancerProtocol {
    Http,
    Https,
    Tcp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolAlgorithm {
    LeastConnections,
    RoundRobin,
    WeightedRoundRobin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerPolicyAction {
    Forward,
    Redirect,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyRuleCondition {
    Contains,
    Equals,
    Matches,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyRuleType {
    Header,
    Hostname,
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PoolMemberHealth {
    Faulted,
    Ok,
    #[serde(other)]
    Unknown,
}

// ============================================================================
// Profiles
// ============================================================================

/// Load balancer profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerProfile {
    /// `application` or `network`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_supported: Option<ProfileValue>,
    pub name: String,
}

collection!(
    /// Page of load balancer profiles
    LoadBalancerProfileCollection,
    profiles: LoadBalancerProfile
);

/// Profile embedded in a load balancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerProfileReference {
    pub family: String,
    pub href: String,
    pub name: String,
}

// ============================================================================
// Load balancers
// ============================================================================

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerLogging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datapath: Option<LoadBalancerLoggingDatapath>,
}

/// Datapath logging, forwarded to the Log Analysis instance of the region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerLoggingDatapath {
    pub active: bool,
}

/// Load balancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    /// Fully qualified domain name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub listeners: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoadBalancerLogging>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_status: Option<OperatingStatus>,
    #[serde(default)]
    pub pools: Vec<Reference>,
    #[serde(default)]
    pub private_ips: Vec<IpAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<LoadBalancerProfileReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_status: Option<ProvisioningStatus>,
    #[serde(default)]
    pub public_ips: Vec<IpAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default)]
    pub subnets: Vec<Reference>,
}

/// All load balancers in the region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerCollection {
    #[serde(default)]
    pub load_balancers: Vec<LoadBalancer>,
}

/// Body for `create_load_balancer`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listeners: Option<Vec<LoadBalancerListenerPrototypeLoadBalancerContext>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoadBalancerLogging>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pools: Option<Vec<LoadBalancerPoolPrototype>>,
    /// Defaults to the application load balancer profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<NamedIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<SubnetIdentity>>,
}

/// Body for `update_load_balancer`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoadBalancerLogging>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Traffic statistics of a load balancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerStatistics {
    pub active_connections: u64,
    /// New connections per second
    pub connection_rate: f64,
    /// Megabytes processed this month
    pub data_processed_this_month: u64,
    /// Megabits per second
    pub throughput: f64,
}

// ============================================================================
// Listeners
// ============================================================================

/// Listener of a load balancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerListener {
    /// Certificate for HTTPS listeners
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_instance: Option<CertificateInstanceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_pool: Option<Reference>,
    pub href: String,
    pub id: String,
    #[serde(default)]
    pub policies: Vec<Reference>,
    pub port: u16,
    pub protocol: LoadBalancerProtocol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_status: Option<ProvisioningStatus>,
}

/// Certificate manager certificate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateInstanceReference {
    pub crn: String,
}

/// Listeners of a load balancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerListenerCollection {
    #[serde(default)]
    pub listeners: Vec<LoadBalancerListener>,
}

/// Body for `create_load_balancer_listener`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerListenerPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_instance: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_pool: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<LoadBalancerListenerPolicyPrototype>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<LoadBalancerProtocol>,
}

/// Listener created along with its load balancer
///
/// Pools do not exist yet at that point, so the default pool is named.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerListenerPrototypeLoadBalancerContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_pool: Option<NamedIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<LoadBalancerProtocol>,
}

/// Body for `update_load_balancer_listener`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerListenerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_instance: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_pool: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<LoadBalancerProtocol>,
}

// ============================================================================
// Listener policies and rules
// ============================================================================

/// What a policy forwards or redirects to
///
/// A pool (by `id`/`href`) for `forward`, a URL with status code for
/// `redirect`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListenerPolicyTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Layer 7 policy of a listener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerListenerPolicy {
    pub action: ListenerPolicyAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    pub href: String,
    pub id: String,
    pub name: String,
    /// Lower values are evaluated first
    pub priority: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_status: Option<ProvisioningStatus>,
    #[serde(default)]
    pub rules: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ListenerPolicyTarget>,
}

/// Policies of a listener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerListenerPolicyCollection {
    #[serde(default)]
    pub policies: Vec<LoadBalancerListenerPolicy>,
}

/// Body for `create_load_balancer_listener_policy`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerListenerPolicyPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ListenerPolicyAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<LoadBalancerListenerPolicyRulePrototype>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ListenerPolicyTarget>,
}

/// Body for `update_load_balancer_listener_policy`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerListenerPolicyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ListenerPolicyTarget>,
}

/// Rule of a listener policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerListenerPolicyRule {
    pub condition: PolicyRuleCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Header name, for `header` rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_status: Option<ProvisioningStatus>,
    #[serde(rename = "type")]
    pub rule_type: PolicyRuleType,
    pub value: String,
}

/// Rules of a listener policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerListenerPolicyRuleCollection {
    #[serde(default)]
    pub rules: Vec<LoadBalancerListenerPolicyRule>,
}

/// Body for `create_load_balancer_listener_policy_rule`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerListenerPolicyRulePrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<PolicyRuleCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<PolicyRuleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Body for `update_load_balancer_listener_policy_rule`
pub type LoadBalancerListenerPolicyRulePatch = LoadBalancerListenerPolicyRulePrototype;

// ============================================================================
// Pools and members
// ============================================================================

/// Health check of a pool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPoolHealthMonitor {
    /// Seconds between checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
    /// Defaults to the member port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub monitor_type: Option<LoadBalancerProtocol>,
    /// For `http`/`https` monitors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_path: Option<String>,
}

/// Session persistence of a pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPoolSessionPersistence {
    /// Always `source_ip`
    #[serde(rename = "type")]
    pub persistence_type: String,
}

/// Backend pool of a load balancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPool {
    pub algorithm: PoolAlgorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    pub health_monitor: LoadBalancerPoolHealthMonitor,
    pub href: String,
    pub id: String,
    /// Instance group feeding this pool, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_group: Option<Reference>,
    #[serde(default)]
    pub members: Vec<Reference>,
    pub name: String,
    pub protocol: LoadBalancerProtocol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_status: Option<ProvisioningStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_persistence: Option<LoadBalancerPoolSessionPersistence>,
}

/// Pools of a load balancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPoolCollection {
    #[serde(default)]
    pub pools: Vec<LoadBalancerPool>,
}

/// Body for `create_load_balancer_pool`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPoolPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<PoolAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_monitor: Option<LoadBalancerPoolHealthMonitor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<LoadBalancerPoolMemberPrototype>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<LoadBalancerProtocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_persistence: Option<LoadBalancerPoolSessionPersistence>,
}

/// Body for `update_load_balancer_pool`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPoolPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<PoolAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_monitor: Option<LoadBalancerPoolHealthMonitor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<LoadBalancerProtocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_persistence: Option<LoadBalancerPoolSessionPersistence>,
}

/// Backend a pool member sends traffic to: an IP address or an instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPoolMemberTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LoadBalancerPoolMemberTarget {
    pub fn address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Default::default()
        }
    }

    pub fn instance(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}

/// Member of a pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPoolMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<PoolMemberHealth>,
    pub href: String,
    pub id: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_status: Option<ProvisioningStatus>,
    pub target: LoadBalancerPoolMemberTarget,
    /// Only used by `weighted_round_robin`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u8>,
}

/// Members of a pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPoolMemberCollection {
    #[serde(default)]
    pub members: Vec<LoadBalancerPoolMember>,
}

/// Body for `create_load_balancer_pool_member`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPoolMemberPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<LoadBalancerPoolMemberTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u8>,
}

/// Body for `update_load_balancer_pool_member`
pub type LoadBalancerPoolMemberPatch = LoadBalancerPoolMemberPrototype;

/// Body for `replace_load_balancer_pool_members`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPoolMembersReplacement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<LoadBalancerPoolMemberPrototype>>,
}
