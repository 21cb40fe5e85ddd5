// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Image and operating system types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::collection;
use crate::common::{Encryption, Identity, NamedIdentity, Reference, ResourceGroupIdentity, Timestamp};

/// Image state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImageStatus {
    Available,
    Deleting,
    Deprecated,
    Failed,
    Pending,
    Unusable,
    #[serde(other)]
    Unknown,
}

/// Who can use an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageVisibility {
    Private,
    Public,
}

/// Boot image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption: Option<Encryption>,
    /// Root key used to wrap the image's data encryption key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<ImageFile>,
    pub href: String,
    pub id: String,
    /// Smallest boot volume, in GB, this image can be provisioned onto
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_provisioned_size: Option<u64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<OperatingSystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ImageStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<ImageVisibility>,
}

/// Image file details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFile {
    /// Size in GB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

collection!(
    /// Page of images
    ImageCollection,
    images: Image
);

/// Location of an image file in Cloud Object Storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFilePrototype {
    /// `cos://` URL of the qcow2 or vhd file
    pub href: String,
}

/// Body for `create_image`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePrototype {
    /// Base64 data key wrapped by `encryption_key`, for encrypted images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_data_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<ImageFilePrototype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<NamedIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
}

/// Body for `update_image`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Operating system of an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingSystem {
    /// `amd64`, `s390x`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    /// Images with this OS can only run on dedicated hosts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedicated_host_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub href: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

collection!(
    /// Page of operating systems
    OperatingSystemCollection,
    operating_systems: OperatingSystem
);
