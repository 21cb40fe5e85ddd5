// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Subnet types

use serde::{Deserialize, Serialize};

use crate::collection;
use crate::common::{
    IpVersion, NamedReference, NetworkAclIdentity, PublicGatewayIdentity, Reference,
    ResourceGroupIdentity, ResourceStatus, Timestamp, VpcIdentity, ZoneIdentity,
};

/// Subnet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subnet {
    /// Number of addresses still free for allocation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_ipv4_address_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_version: Option<IpVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_cidr_block: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_acl: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_gateway: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_ipv4_address_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<NamedReference>,
}

collection!(
    /// Page of subnets
    SubnetCollection,
    subnets: Subnet
);

/// Body for `create_subnet`
///
/// Either `ipv4_cidr_block` or `total_ipv4_address_count` together with
/// `zone` must be given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubnetPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_version: Option<IpVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_cidr_block: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_acl: Option<NetworkAclIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_gateway: Option<PublicGatewayIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    /// Address count; must be a power of two
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_ipv4_address_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<VpcIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneIdentity>,
}

/// Body for `update_subnet`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubnetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_acl: Option<NetworkAclIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_gateway: Option<PublicGatewayIdentity>,
}
