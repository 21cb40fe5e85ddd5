// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! VPC, address prefix and route types

use serde::{Deserialize, Serialize};

use crate::collection;
use crate::common::{
    IpAddress, LifecycleState, NamedReference, Reference, ResourceGroupIdentity, ResourceStatus,
    Timestamp, ZoneIdentity,
};

/// Virtual Private Cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vpc {
    /// Whether this VPC is connected to Classic Infrastructure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classic_access: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    /// Cloud service endpoint source IPs, one per zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cse_source_ips: Option<Vec<VpcCseSourceIp>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_network_acl: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_security_group: Option<Reference>,
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

/// Source IP used for cloud service endpoint traffic from one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpcCseSourceIp {
    pub ip: IpAddress,
    pub zone: NamedReference,
}

collection!(
    /// Page of VPCs
    VpcCollection,
    vpcs: Vpc
);

/// How address prefixes are created for a new VPC
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressPrefixManagement {
    /// One default prefix per zone
    #[default]
    Auto,
    /// No default prefixes
    Manual,
}

/// Body for `create_vpc`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VpcPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_prefix_management: Option<AddressPrefixManagement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classic_access: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
}

/// Body for `update_vpc`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VpcPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Address prefix of a VPC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressPrefix {
    /// CIDR block for this prefix
    pub cidr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Whether subnets exist with addresses from this prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_subnets: Option<bool>,
    pub href: String,
    pub id: String,
    /// Whether this is the default prefix for its zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    pub name: String,
    pub zone: NamedReference,
}

collection!(
    /// Page of address prefixes
    AddressPrefixCollection,
    address_prefixes: AddressPrefix
);

/// Body for `create_vpc_address_prefix`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressPrefixPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneIdentity>,
}

/// Body for `update_vpc_address_prefix`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressPrefixPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// What a route does with matching traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteAction {
    /// Use the system-provided route
    Delegate,
    /// Route to `next_hop`
    Deliver,
    Drop,
}

/// Static route of a VPC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<RouteAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Destination CIDR
    pub destination: String,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<LifecycleState>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hop: Option<IpAddress>,
    pub zone: NamedReference,
}

collection!(
    /// Page of routes
    RouteCollection,
    routes: Route
);

/// Body for `create_vpc_route`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<RouteAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hop: Option<IpAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneIdentity>,
}

/// Body for `update_vpc_route`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
