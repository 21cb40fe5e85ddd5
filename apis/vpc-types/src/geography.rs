// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Regions and zones

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::common::NamedReference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RegionStatus {
    Available,
    Unavailable,
    #[serde(other)]
    Unknown,
}

/// Geographic region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// API endpoint for this region
    pub endpoint: String,
    pub href: String,
    /// e.g. `us-south`
    pub name: String,
    pub status: RegionStatus,
}

/// All regions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCollection {
    #[serde(default)]
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ZoneStatus {
    Available,
    Impaired,
    Unavailable,
    #[serde(other)]
    Unknown,
}

/// Availability zone within a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub href: String,
    /// e.g. `us-south-1`
    pub name: String,
    pub region: NamedReference,
    pub status: ZoneStatus,
}

/// Zones of a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCollection {
    #[serde(default)]
    pub zones: Vec<Zone>,
}
