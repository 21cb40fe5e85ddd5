// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Typed helpers for instance actions
//!
//! The API models start/stop/reboot as a single `create_instance_action`
//! endpoint with a `type` member. These wrappers spell the common cases out.

use vpc_types::{Instance, InstanceAction, InstanceActionType};

use crate::{Client, Result};

impl Client {
    // ========================================================================
    // Instance Actions
    // ========================================================================

    /// Start a stopped instance
    pub async fn start_instance(&self, instance_id: &str) -> Result<InstanceAction> {
        self.instance_action(instance_id, InstanceActionType::Start, None)
            .await
    }

    /// Stop an instance
    ///
    /// # Arguments
    /// * `instance_id` - Instance identifier
    /// * `force` - Drop any queued actions and stop immediately
    pub async fn stop_instance(&self, instance_id: &str, force: bool) -> Result<InstanceAction> {
        self.instance_action(instance_id, InstanceActionType::Stop, Some(force))
            .await
    }

    /// Reboot an instance
    ///
    /// # Arguments
    /// * `instance_id` - Instance identifier
    /// * `force` - Drop any queued actions and reboot immediately
    pub async fn reboot_instance(&self, instance_id: &str, force: bool) -> Result<InstanceAction> {
        self.instance_action(instance_id, InstanceActionType::Reboot, Some(force))
            .await
    }

    /// Rename an instance
    pub async fn rename_instance(&self, instance_id: &str, name: &str) -> Result<Instance> {
        self.update_instance()
            .id(instance_id)
            .name(name)
            .send()
            .await
            .map(|rv| rv.into_inner())
    }

    async fn instance_action(
        &self,
        instance_id: &str,
        action: InstanceActionType,
        force: Option<bool>,
    ) -> Result<InstanceAction> {
        let mut request = self
            .create_instance_action()
            .instance_id(instance_id)
            .action_type(action);
        if let Some(force) = force {
            request = request.force(force);
        }
        request.send().await.map(|rv| rv.into_inner())
    }
}
