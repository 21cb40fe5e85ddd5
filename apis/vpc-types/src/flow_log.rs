// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Flow log collector types

use serde::{Deserialize, Serialize};

use crate::collection;
use crate::common::{Identity, LifecycleState, Reference, ResourceGroupIdentity, Timestamp};

/// Cloud Object Storage bucket receiving flow logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageBucket {
    pub name: String,
}

impl StorageBucket {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Collects flow logs for a VPC, subnet, instance or network interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowLogCollector {
    /// Whether logs are being collected
    pub active: bool,
    /// Delete the collector when its target is deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<LifecycleState>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<StorageBucket>,
    /// `resource_type` says what kind of resource is targeted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Reference>,
}

collection!(
    /// Page of flow log collectors
    FlowLogCollectorCollection,
    flow_log_collectors: FlowLogCollector
);

/// Body for `create_flow_log_collector`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowLogCollectorPrototype {
    /// Defaults to `false`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<StorageBucket>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Identity>,
}

/// Body for `update_flow_log_collector`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowLogCollectorPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
