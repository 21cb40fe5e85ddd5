// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Floating IP types

use serde::{Deserialize, Serialize};

use crate::collection;
use crate::common::{
    Deleted, Identity, NamedReference, Reference, ResourceGroupIdentity, ResourceStatus,
    Timestamp, ZoneIdentity,
};

/// Reserved public IP address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingIp {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    /// Network interface or public gateway the address is bound to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<FloatingIpTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<NamedReference>,
}

/// Target of a floating IP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingIpTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<Deleted>,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Set for network interface targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_ipv4_address: Option<String>,
    /// `network_interface` or `public_gateway`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

collection!(
    /// Page of floating IPs
    FloatingIpCollection,
    floating_ips: FloatingIp
);

/// Floating IPs bound to one network interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingIpUnpaginatedCollection {
    #[serde(default)]
    pub floating_ips: Vec<FloatingIp>,
}

/// Body for `create_floating_ip`
///
/// Set `zone` to reserve an unbound address, or `target` to reserve and
/// bind one to a network interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloatingIpPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneIdentity>,
}

/// Body for `update_floating_ip`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloatingIpPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Network interface to rebind to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Identity>,
}
