// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Endpoint gateway and reserved IP types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::collection;
use crate::common::{
    Deleted, LifecycleState, Reference, ResourceGroupIdentity, SubnetIdentity, Timestamp,
    VpcIdentity,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HealthState {
    Degraded,
    Faulted,
    Inapplicable,
    Ok,
    #[serde(other)]
    Unknown,
}

/// Service an endpoint gateway connects to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointGatewayTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    /// For `provider_infrastructure_service` targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `provider_cloud_service` or `provider_infrastructure_service`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// Embedded link to a reserved IP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservedIpReference {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<Deleted>,
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// Private endpoint for an IBM Cloud service inside a VPC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointGateway {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_state: Option<HealthState>,
    pub href: String,
    pub id: String,
    #[serde(default)]
    pub ips: Vec<ReservedIpReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<LifecycleState>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Fully qualified domain name of the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_endpoints: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<EndpointGatewayTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Reference>,
}

collection!(
    /// Page of endpoint gateways
    EndpointGatewayCollection,
    endpoint_gateways: EndpointGateway
);

/// Reserved IP to bind on creation: an existing one by `id`/`href`, or a
/// new one in `subnet`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointGatewayReservedIp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<SubnetIdentity>,
}

/// Body for `create_endpoint_gateway`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointGatewayPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ips: Option<Vec<EndpointGatewayReservedIp>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<EndpointGatewayTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<VpcIdentity>,
}

/// Body for `update_endpoint_gateway`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointGatewayPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Reserved IP address in a subnet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservedIp {
    pub address: String,
    /// Release the address when its target is deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    pub href: String,
    pub id: String,
    pub name: String,
    /// `provider` or `user`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Reference>,
}

collection!(
    /// Page of reserved IPs bound to an endpoint gateway
    ReservedIpCollectionEndpointGatewayContext,
    ips: ReservedIp
);
