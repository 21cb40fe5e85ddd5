// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance types (profiles, templates, instances, network interfaces,
//! volume attachments, actions)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::collection;
use crate::common::{
    Identity, NamedIdentity, NamedReference, ProfileValue, Reference, ResourceGroupIdentity,
    SecurityGroupIdentity, SubnetIdentity, Timestamp, VpcIdentity, ZoneIdentity,
};

// ============================================================================
// Profiles
// ============================================================================

/// Instance profile (vCPU, memory and bandwidth shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<ProfileValue>,
    /// `balanced`, `compute`, `memory`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<ProfileValue>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_architecture: Option<ProfileValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_speed: Option<ProfileValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcpu_architecture: Option<ProfileValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcpu_count: Option<ProfileValue>,
}

collection!(
    /// Page of instance profiles
    InstanceProfileCollection,
    profiles: InstanceProfile
);

pub type InstanceProfileIdentity = NamedIdentity;

// ============================================================================
// Shared prototype pieces
// ============================================================================

/// Network interface to create along with an instance or attach later
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterfacePrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Address to reserve; one is chosen from the subnet when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_ipv4_address: Option<String>,
    /// Defaults to the VPC's default security group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<SecurityGroupIdentity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<SubnetIdentity>,
}

/// Volume to attach: either an existing volume or one to create
///
/// Set one of `id`/`crn`/`href` to attach an existing volume, or `profile`
/// (plus capacity and friends) to create one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeAttachmentVolumePrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Capacity in GB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<Identity>,
    /// Only for the `custom` volume profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<NamedIdentity>,
}

impl VolumeAttachmentVolumePrototype {
    /// Attach the existing volume with this ID
    pub fn existing(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}

/// Body for `create_instance_volume_attachment`, and the volume attachments
/// of instance and template prototypes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeAttachmentPrototype {
    /// Delete the volume when the instance is deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_volume_on_instance_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeAttachmentVolumePrototype>,
}

// ============================================================================
// Instance templates
// ============================================================================

/// Instance template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_volume_attachment: Option<VolumeAttachmentPrototype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<Identity>>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<NetworkInterfacePrototype>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_network_interface: Option<NetworkInterfacePrototype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<InstanceProfileIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_attachments: Option<Vec<VolumeAttachmentPrototype>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneIdentity>,
}

/// All instance templates in the region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceTemplateCollection {
    #[serde(default)]
    pub templates: Vec<InstanceTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
}

/// Body for `create_instance_template`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceTemplatePrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_volume_attachment: Option<VolumeAttachmentPrototype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<Identity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<NetworkInterfacePrototype>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_network_interface: Option<NetworkInterfacePrototype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<InstanceProfileIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_attachments: Option<Vec<VolumeAttachmentPrototype>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<VpcIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneIdentity>,
}

/// Body for `update_instance_template`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceTemplatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// ============================================================================
// Instances
// ============================================================================

/// Instance state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InstanceStatus {
    Deleting,
    Failed,
    Pausing,
    Paused,
    Pending,
    Restarting,
    Resuming,
    Running,
    Starting,
    Stopped,
    Stopping,
    #[serde(other)]
    Unknown,
}

/// Virtual server instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Total bandwidth in Mbps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_volume_attachment: Option<VolumeAttachmentReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Reference>,
    /// Memory in GB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<u32>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<NetworkInterfaceReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_network_interface: Option<NetworkInterfaceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<NamedReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InstanceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcpu: Option<InstanceVcpu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_attachments: Option<Vec<VolumeAttachmentReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<NamedReference>,
}

/// Virtual CPUs of an instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceVcpu {
    pub architecture: String,
    pub count: u32,
}

collection!(
    /// Page of instances
    InstanceCollection,
    instances: Instance
);

/// Body for `create_instance`
///
/// Either a `source_template` or the `profile`, `vpc`, `zone`,
/// `primary_network_interface` and `image` members must be supplied.
/// Members given alongside a template override it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstancePrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_volume_attachment: Option<VolumeAttachmentPrototype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Identity>,
    /// Keys made available to cloud-init
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<Identity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Secondary network interfaces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<NetworkInterfacePrototype>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_network_interface: Option<NetworkInterfacePrototype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<InstanceProfileIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_template: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_attachments: Option<Vec<VolumeAttachmentPrototype>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<VpcIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneIdentity>,
}

/// Body for `update_instance`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstancePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Credentials and keys an instance was initialized with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceInitialization {
    #[serde(default)]
    pub keys: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_accounts: Option<Vec<InstanceUserAccount>>,
}

/// Administrator account created at initialization (Windows images)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceUserAccount {
    /// Password encrypted with `encryption_key`, base64
    pub encrypted_password: String,
    pub encryption_key: Reference,
    pub resource_type: String,
    pub username: String,
}

// ============================================================================
// Actions
// ============================================================================

/// Action to perform on an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InstanceActionType {
    Reboot,
    Start,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InstanceActionStatus {
    Completed,
    Failed,
    Pending,
    Running,
    #[serde(other)]
    Unknown,
}

/// Body for `create_instance_action`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceActionPrototype {
    /// Stop or reboot without waiting for running work to finish
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<InstanceActionType>,
}

/// Instance action as accepted by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
    pub status: InstanceActionStatus,
    #[serde(rename = "type")]
    pub action_type: InstanceActionType,
}

// ============================================================================
// Network interfaces
// ============================================================================

/// Embedded link to a network interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterfaceReference {
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_ipv4_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<Reference>,
}

/// Network interface of an instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterface {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Floating IPs bound to this interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating_ips: Option<Vec<Reference>>,
    pub href: String,
    pub id: String,
    pub name: String,
    /// Port speed in Mbps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_speed: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_ipv4_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<Reference>>,
    /// `available`, `deleting`, `failed` or `pending`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<crate::common::ResourceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<Reference>,
    /// `primary` or `secondary`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<String>,
}

/// Network interfaces of an instance or security group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterfaceCollection {
    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterface>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
}

/// Body for `update_instance_network_interface`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterfacePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// ============================================================================
// Volume attachments
// ============================================================================

/// Device an attached volume appears as
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAttachmentDevice {
    pub id: String,
}

/// Embedded link to a volume attachment, from an instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAttachmentReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<VolumeAttachmentDevice>,
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<Reference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VolumeAttachmentStatus {
    Attached,
    Attaching,
    Deleting,
    Detaching,
    #[serde(other)]
    Unknown,
}

/// Attachment of a volume to an instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAttachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_volume_on_instance_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<VolumeAttachmentDevice>,
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VolumeAttachmentStatus>,
    /// `boot` or `data`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub attachment_type: Option<String>,
    pub volume: Reference,
}

/// Volume attachments of an instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAttachmentCollection {
    #[serde(default)]
    pub volume_attachments: Vec<VolumeAttachment>,
}

/// Body for `update_instance_volume_attachment`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeAttachmentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_volume_on_instance_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
