// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! IKE policy, IPsec policy, VPN gateway and VPN connection types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::collection;
use crate::common::{
    Identity, IpAddress, Reference, ResourceGroupIdentity, ResourceStatus, SubnetIdentity,
    Timestamp,
};

// ============================================================================
// Algorithms
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthenticationAlgorithm {
    #[serde(rename = "md5")]
    Md5,
    #[serde(rename = "sha1")]
    Sha1,
    #[serde(rename = "sha256")]
    Sha256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncryptionAlgorithm {
    #[serde(rename = "triple_des")]
    TripleDes,
    #[serde(rename = "aes128")]
    Aes128,
    #[serde(rename = "aes256")]
    Aes256,
}

/// Perfect Forward Secrecy setting of an IPsec policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pfs {
    #[serde(rename = "disabled")]
    Disabled,
    #[serde(rename = "group_14")]
    Group14,
    #[serde(rename = "group_2")]
    Group2,
    #[serde(rename = "group_5")]
    Group5,
}

// ============================================================================
// IKE policies
// ============================================================================

/// IKE (phase 1) policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IkePolicy {
    pub authentication_algorithm: AuthenticationAlgorithm,
    /// Connections using this policy
    #[serde(default)]
    pub connections: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Diffie-Hellman group (2, 5 or 14)
    pub dh_group: u8,
    pub encryption_algorithm: EncryptionAlgorithm,
    pub href: String,
    pub id: String,
    /// 1 or 2
    pub ike_version: u8,
    /// Key lifetime in seconds
    pub key_lifetime: u32,
    pub name: String,
    /// Always `main`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negotiation_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

collection!(
    /// Page of IKE policies
    IkePolicyCollection,
    ike_policies: IkePolicy
);

/// Body for `create_ike_policy`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IkePolicyPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_algorithm: Option<AuthenticationAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dh_group: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<EncryptionAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ike_version: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_lifetime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
}

/// Body for `update_ike_policy`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IkePolicyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_algorithm: Option<AuthenticationAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dh_group: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<EncryptionAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ike_version: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_lifetime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// ============================================================================
// IPsec policies
// ============================================================================

/// IPsec (phase 2) policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpsecPolicy {
    pub authentication_algorithm: AuthenticationAlgorithm,
    #[serde(default)]
    pub connections: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Always `tunnel`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encapsulation_mode: Option<String>,
    pub encryption_algorithm: EncryptionAlgorithm,
    pub href: String,
    pub id: String,
    pub key_lifetime: u32,
    pub name: String,
    pub pfs: Pfs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Always `esp`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform_protocol: Option<String>,
}

collection!(
    /// Page of IPsec policies
    IpsecPolicyCollection,
    ipsec_policies: IpsecPolicy
);

/// Body for `create_ipsec_policy`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpsecPolicyPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_algorithm: Option<AuthenticationAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<EncryptionAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_lifetime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfs: Option<Pfs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
}

/// Body for `update_ipsec_policy`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpsecPolicyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_algorithm: Option<AuthenticationAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<EncryptionAlgorithm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_lifetime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfs: Option<Pfs>,
}

// ============================================================================
// VPN gateways
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VpnGatewayMode {
    Policy,
    Route,
}

/// One member (appliance) of a VPN gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpnGatewayMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_ip: Option<IpAddress>,
    pub public_ip: IpAddress,
    /// `active` or `standby`
    pub role: String,
    pub status: ResourceStatus,
}

/// VPN gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpnGateway {
    #[serde(default)]
    pub connections: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    pub href: String,
    pub id: String,
    #[serde(default)]
    pub members: Vec<VpnGatewayMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<VpnGatewayMode>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<Reference>,
}

collection!(
    /// Page of VPN gateways
    VpnGatewayCollection,
    vpn_gateways: VpnGateway
);

/// Body for `create_vpn_gateway`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VpnGatewayPrototype {
    /// Defaults to `policy`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<VpnGatewayMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<SubnetIdentity>,
}

/// Body for `update_vpn_gateway`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VpnGatewayPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// ============================================================================
// Connections
// ============================================================================

/// Action taken when a peer stops responding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadPeerDetectionAction {
    Clear,
    Hold,
    None,
    Restart,
}

/// Dead peer detection settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeadPeerDetection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<DeadPeerDetectionAction>,
    /// Seconds between checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    /// Seconds before a peer is declared dead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VpnGatewayConnectionStatus {
    Down,
    Up,
    #[serde(other)]
    Unknown,
}

/// Site-to-site connection of a VPN gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpnGatewayConnection {
    pub admin_state_up: bool,
    /// Always `psk`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead_peer_detection: Option<DeadPeerDetection>,
    pub href: String,
    pub id: String,
    /// Auto-negotiated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ike_policy: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipsec_policy: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_cidrs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<VpnGatewayMode>,
    pub name: String,
    pub peer_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_cidrs: Option<Vec<String>>,
    /// Pre-shared key
    pub psk: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub status: VpnGatewayConnectionStatus,
}

/// Connections of a VPN gateway or users of a policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpnGatewayConnectionCollection {
    #[serde(default)]
    pub connections: Vec<VpnGatewayConnection>,
}

/// Body for `create_vpn_gateway_connection`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VpnGatewayConnectionPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state_up: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead_peer_detection: Option<DeadPeerDetection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ike_policy: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipsec_policy: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_cidrs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_cidrs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psk: Option<String>,
}

/// Body for `update_vpn_gateway_connection`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VpnGatewayConnectionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state_up: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead_peer_detection: Option<DeadPeerDetection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ike_policy: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipsec_policy: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psk: Option<String>,
}

/// Local CIDRs of a policy-mode connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpnGatewayConnectionLocalCidrs {
    #[serde(default)]
    pub local_cidrs: Vec<String>,
}

/// Peer CIDRs of a policy-mode connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpnGatewayConnectionPeerCidrs {
    #[serde(default)]
    pub peer_cidrs: Vec<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ipsec_policy_enums() {
        let policy: IpsecPolicy = serde_json::from_str(
            r#"{
                "authentication_algorithm": "sha256",
                "connections": [],
                "encryption_algorithm": "triple_des",
                "href": "https://us-south.iaas.cloud.ibm.com/v1/ipsec_policies/1",
                "id": "1",
                "key_lifetime": 3600,
                "name": "my-ipsec",
                "pfs": "group_14"
            }"#,
        )
        .unwrap();
        assert_eq!(policy.pfs, Pfs::Group14);
        assert_eq!(policy.encryption_algorithm, EncryptionAlgorithm::TripleDes);
        assert_eq!(
            policy.authentication_algorithm,
            AuthenticationAlgorithm::Sha256
        );
    }
}
