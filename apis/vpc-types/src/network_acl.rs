// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network ACL and ACL rule types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::collection;
use crate::common::{
    Direction, Identity, IpVersion, NetworkAclIdentity, Reference, ResourceGroupIdentity,
    Timestamp, VpcIdentity,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NetworkAclRuleAction {
    Allow,
    Deny,
}

/// Protocol matched by a firewall rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RuleProtocol {
    All,
    Icmp,
    Tcp,
    Udp,
}

/// Stateless subnet firewall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAcl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    /// Ordered rules
    #[serde(default)]
    pub rules: Vec<NetworkAclRule>,
    /// Subnets the ACL is attached to
    #[serde(default)]
    pub subnets: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Reference>,
}

collection!(
    /// Page of network ACLs
    NetworkAclCollection,
    network_acls: NetworkAcl
);

/// Network ACL rule
///
/// The protocol decides which of the optional members apply: `code` and
/// `type` for ICMP, the port ranges for TCP and UDP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAclRule {
    pub action: NetworkAclRuleAction,
    /// The rule this one is evaluated before, absent for the last rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Destination CIDR
    pub destination: String,
    pub direction: Direction,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_version: Option<IpVersion>,
    pub name: String,
    pub protocol: RuleProtocol,
    /// Source CIDR
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u8>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub icmp_type: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_port_min: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_port_max: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_port_min: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_port_max: Option<u16>,
}

collection!(
    /// Page of network ACL rules
    NetworkAclRuleCollection,
    rules: NetworkAclRule
);

/// Body for `create_network_acl_rule`, and the rules of a network ACL
/// prototype (where `before` must be left unset)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkAclRulePrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<NetworkAclRuleAction>,
    /// Insert before this rule; appended when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<RuleProtocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u8>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub icmp_type: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_port_min: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_port_max: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_port_min: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_port_max: Option<u16>,
}

/// Body for `update_network_acl_rule`
pub type NetworkAclRulePatch = NetworkAclRulePrototype;

/// Body for `create_network_acl`
///
/// Either list `rules` or copy them from `source_network_acl`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkAclPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<NetworkAclRulePrototype>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_network_acl: Option<NetworkAclIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<VpcIdentity>,
}

/// Body for `update_network_acl`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkAclPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_icmp_rule_members() {
        let rule: NetworkAclRule = serde_json::from_str(
            r#"{
                "action": "allow",
                "destination": "0.0.0.0/0",
                "direction": "inbound",
                "href": "https://us-south.iaas.cloud.ibm.com/v1/network_acls/a/rules/b",
                "id": "b",
                "ip_version": "ipv4",
                "name": "allow-ping",
                "protocol": "icmp",
                "source": "10.0.0.0/8",
                "code": 0,
                "type": 8
            }"#,
        )
        .unwrap();
        assert_eq!(rule.protocol, RuleProtocol::Icmp);
        assert_eq!(rule.icmp_type, Some(8));
        assert_eq!(rule.before, None);
    }

    #[test]
    fn test_rule_patch_sends_only_changes() {
        let patch = NetworkAclRulePatch {
            action: Some(NetworkAclRuleAction::Deny),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"action":"deny"}"#);
    }
}
