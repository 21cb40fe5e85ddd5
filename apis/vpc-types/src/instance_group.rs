// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance group types (groups, managers, policies, memberships)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::collection;
use crate::common::{Identity, Reference, ResourceGroupIdentity, SubnetIdentity, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InstanceGroupStatus {
    Deleting,
    Healthy,
    Scaling,
    Unhealthy,
    #[serde(other)]
    Unknown,
}

/// Group of identical instances built from one template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroup {
    /// Port instances listen on, used with a load balancer pool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_template: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_pool: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managers: Option<Vec<Reference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_count: Option<u32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InstanceGroupStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<Reference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Reference>,
}

collection!(
    /// Page of instance groups
    InstanceGroupCollection,
    instance_groups: InstanceGroup
);

/// Body for `create_instance_group`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroupPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_template: Option<Identity>,
    /// Required together with `load_balancer_pool`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_pool: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<SubnetIdentity>>,
}

/// Body for `update_instance_group`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroupPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_template: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_pool: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<SubnetIdentity>>,
}

// ============================================================================
// Managers
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceGroupManagerType {
    #[default]
    Autoscale,
}

/// Autoscale manager of an instance group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroupManager {
    /// Seconds of metrics averaged per scaling decision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_window: Option<u32>,
    /// Seconds to pause after a scaling request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_type: Option<InstanceGroupManagerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_membership_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_membership_count: Option<u32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<Reference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

collection!(
    /// Page of instance group managers
    InstanceGroupManagerCollection,
    managers: InstanceGroupManager
);

/// Body for `create_instance_group_manager`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroupManagerPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_window: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_type: Option<InstanceGroupManagerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_membership_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_membership_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body for `update_instance_group_manager`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroupManagerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_window: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_membership_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_membership_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// ============================================================================
// Policies
// ============================================================================

/// Metric a target policy scales on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceGroupManagerPolicyMetric {
    Cpu,
    Memory,
    NetworkIn,
    NetworkOut,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceGroupManagerPolicyType {
    #[default]
    Target,
}

/// Scaling policy of an autoscale manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroupManagerPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<InstanceGroupManagerPolicyMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_value: Option<u64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<InstanceGroupManagerPolicyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

collection!(
    /// Page of manager policies
    InstanceGroupManagerPolicyCollection,
    policies: InstanceGroupManagerPolicy
);

/// Body for `create_instance_group_manager_policy`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroupManagerPolicyPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<InstanceGroupManagerPolicyMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<InstanceGroupManagerPolicyType>,
}

/// Body for `update_instance_group_manager_policy`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroupManagerPolicyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<InstanceGroupManagerPolicyMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// ============================================================================
// Memberships
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InstanceGroupMembershipStatus {
    Deleting,
    Failed,
    Healthy,
    Pending,
    Unhealthy,
    #[serde(other)]
    Unknown,
}

/// Instance that belongs to an instance group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroupMembership {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Delete the instance when the membership is deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_instance_on_membership_delete: Option<bool>,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_template: Option<Reference>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_member: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InstanceGroupMembershipStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

collection!(
    /// Page of instance group memberships
    InstanceGroupMembershipCollection,
    memberships: InstanceGroupMembership
);

/// Body for `update_instance_group_membership`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroupMembershipPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
