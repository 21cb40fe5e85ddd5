// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Public gateway types

use serde::{Deserialize, Serialize};

use crate::collection;
use crate::common::{
    Deleted, NamedReference, Reference, ResourceGroupIdentity, ResourceStatus, Timestamp,
    VpcIdentity, ZoneIdentity,
};

/// Public gateway giving subnets outbound internet access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicGateway {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating_ip: Option<PublicGatewayFloatingIp>,
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<NamedReference>,
}

/// Floating IP bound to a public gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicGatewayFloatingIp {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<Deleted>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

collection!(
    /// Page of public gateways
    PublicGatewayCollection,
    public_gateways: PublicGateway
);

/// Floating IP for a new public gateway: an existing one by identity or
/// address, or a new one by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicGatewayFloatingIpPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body for `create_public_gateway`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicGatewayPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating_ip: Option<PublicGatewayFloatingIpPrototype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<VpcIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneIdentity>,
}

/// Body for `update_public_gateway`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicGatewayPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
