// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types used across the VPC API

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// RFC3339 timestamp as returned by the API
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Embedded link to another resource
///
/// The API embeds a trimmed-down view of related resources (a subnet's VPC,
/// an instance's image, ...). Which members are present depends on the
/// resource kind; `href` and `id` always are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// CRN, for resources that have one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    /// Present when the referenced resource has been deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<Deleted>,
    /// URL of the referenced resource
    pub href: String,
    /// Unique identifier
    pub id: String,
    /// User-defined name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type, for references that can point at several kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// Link to a resource addressed by name (zones, regions, profiles)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedReference {
    /// URL of the referenced resource
    pub href: String,
    /// Globally unique name
    pub name: String,
}

/// Marker present on references to deleted resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deleted {
    /// Link to documentation about deleted resources
    pub more_info: String,
}

/// Identifies an existing resource in a request body
///
/// Exactly one member should be set; use the constructors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Identity {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn by_crn(crn: impl Into<String>) -> Self {
        Self {
            crn: Some(crn.into()),
            ..Default::default()
        }
    }

    pub fn by_href(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Default::default()
        }
    }
}

/// Identifies a resource addressed by name in a request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl NamedIdentity {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            href: None,
        }
    }

    pub fn by_href(href: impl Into<String>) -> Self {
        Self {
            name: None,
            href: Some(href.into()),
        }
    }
}

pub type ResourceGroupIdentity = Identity;
pub type VpcIdentity = Identity;
pub type SubnetIdentity = Identity;
pub type NetworkAclIdentity = Identity;
pub type PublicGatewayIdentity = Identity;
pub type SecurityGroupIdentity = Identity;
pub type ZoneIdentity = NamedIdentity;

/// A single IP address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAddress {
    /// IPv4 address in dotted decimal notation
    pub address: String,
}

impl IpAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// A profile attribute
///
/// Profiles describe attributes as a fixed value, a range, an enumeration
/// or a value that depends on other configuration. All shapes share one
/// struct; `type` says which members apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileValue {
    /// `fixed`, `range`, `enum` or `dependent`
    #[serde(rename = "type")]
    pub value_type: String,
    /// Value for `fixed` attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Permitted values for `enum` attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<serde_json::Value>>,
    /// Default for `range` and `enum` attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<serde_json::Value>,
}

/// Error document returned with 4xx/5xx responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// One entry per problem found
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
    /// Request trace ID to quote when contacting support
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    /// HTTP status code, when echoed in the body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// One problem in an [`ApiError`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorItem {
    /// Machine-readable code (e.g. `not_found`, `validation_required_field_missing`)
    pub code: String,
    /// Human-readable description
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
    /// The request member the error refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ApiErrorTarget>,
}

/// Location of the offending input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorTarget {
    /// `field`, `header` or `parameter`
    #[serde(rename = "type")]
    pub target_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for item in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}: {}", item.code, item.message)?;
        }
        if first {
            write!(f, "no error details")?;
        }
        if let Some(trace) = &self.trace {
            write!(f, " (trace {})", trace)?;
        }
        Ok(())
    }
}

/// Link in a collection (`first`, `next`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub href: String,
}

impl PageLink {
    /// The `start` token carried by this link
    pub fn start_token(&self) -> Option<String> {
        vpc_pagination::start_token(&self.href)
    }
}

/// A page of a paginated list
pub trait Paginated {
    type Item;

    /// Token for the following page, `None` on the last page
    fn next_start(&self) -> Option<String>;

    fn into_items(self) -> Vec<Self::Item>;
}

/// Status shared by most network resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResourceStatus {
    Available,
    Deleting,
    Failed,
    Pending,
    #[serde(other)]
    Unknown,
}

/// Lifecycle of resources managed by the newer VPC control plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LifecycleState {
    Deleted,
    Deleting,
    Failed,
    Pending,
    Stable,
    Suspended,
    Updating,
    Waiting,
    #[serde(other)]
    Unknown,
}

/// Traffic direction of a firewall rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IpVersion {
    #[default]
    Ipv4,
}

/// Encryption applied to a volume or image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Encryption {
    ProviderManaged,
    UserManaged,
    #[serde(other)]
    Unknown,
}
