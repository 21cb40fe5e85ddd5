// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Block storage volume types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::collection;
use crate::common::{
    Encryption, Identity, NamedIdentity, NamedReference, Reference, ResourceGroupIdentity,
    Timestamp, ZoneIdentity,
};
use crate::instance::VolumeAttachmentDevice;

/// Volume profile (performance tier)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeProfile {
    /// `tiered` or `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub href: String,
    pub name: String,
}

collection!(
    /// Page of volume profiles
    VolumeProfileCollection,
    profiles: VolumeProfile
);

pub type VolumeProfileIdentity = NamedIdentity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VolumeStatus {
    Available,
    Failed,
    Pending,
    PendingDeletion,
    Unusable,
    #[serde(other)]
    Unknown,
}

/// Block storage volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Capacity in GB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption: Option<Encryption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<Reference>,
    pub href: String,
    pub id: String,
    /// Maximum I/O operations per second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<u64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<NamedReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VolumeStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_attachments: Option<Vec<VolumeInstanceAttachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<NamedReference>,
}

/// Attachment of a volume, seen from the volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeInstanceAttachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_volume_on_instance_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<VolumeAttachmentDevice>,
    pub href: String,
    pub id: String,
    pub instance: Reference,
    pub name: String,
    /// `boot` or `data`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub attachment_type: Option<String>,
}

collection!(
    /// Page of volumes
    VolumeCollection,
    volumes: Volume
);

/// Body for `create_volume`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumePrototype {
    /// Capacity in GB (10 to 2000)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<Identity>,
    /// Only for the `custom` profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<VolumeProfileIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneIdentity>,
}

/// Body for `update_volume`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
