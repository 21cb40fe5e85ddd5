// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance groups, managers, policies and memberships

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    Identity, InstanceGroup, InstanceGroupCollection, InstanceGroupManager,
    InstanceGroupManagerCollection, InstanceGroupManagerPatch, InstanceGroupManagerPolicy,
    InstanceGroupManagerPolicyCollection, InstanceGroupManagerPolicyMetric,
    InstanceGroupManagerPolicyPatch, InstanceGroupManagerPolicyPrototype,
    InstanceGroupManagerPrototype, InstanceGroupMembership, InstanceGroupMembershipCollection,
    InstanceGroupMembershipPatch, InstanceGroupPatch, InstanceGroupPrototype, ResourceGroupIdentity,
    SubnetIdentity,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all instance groups
    ///
    /// Sends a `GET` request to `/instance_groups`
    ///
    /// ```ignore
    /// let response = client.list_instance_groups()
    ///    .start(start)
    ///    .limit(limit)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_instance_groups(&self) -> ListInstanceGroups<'_> {
        ListInstanceGroups::new(self)
    }

    /// Create an instance group
    ///
    /// Sends a `POST` request to `/instance_groups`
    ///
    /// ```ignore
    /// let response = client.create_instance_group()
    ///    .instance_template(instance_template)
    ///    .subnets(subnets)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_instance_group(&self) -> CreateInstanceGroup<'_> {
        CreateInstanceGroup::new(self)
    }

    /// Delete an instance group
    ///
    /// Sends a `DELETE` request to `/instance_groups/{id}`
    pub fn delete_instance_group(&self) -> DeleteInstanceGroup<'_> {
        DeleteInstanceGroup::new(self)
    }

    /// Retrieve an instance group
    ///
    /// Sends a `GET` request to `/instance_groups/{id}`
    pub fn get_instance_group(&self) -> GetInstanceGroup<'_> {
        GetInstanceGroup::new(self)
    }

    /// Update an instance group
    ///
    /// Sends a `PATCH` request to `/instance_groups/{id}`
    ///
    /// ```ignore
    /// let response = client.update_instance_group()
    ///    .id(id)
    ///    .application_port(application_port)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_instance_group(&self) -> UpdateInstanceGroup<'_> {
        UpdateInstanceGroup::new(self)
    }

    /// Delete an instance group's load balancer
    ///
    /// Sends a `DELETE` request to `/instance_groups/{instance_group_id}/load_balancer`
    pub fn delete_instance_group_load_balancer(&self) -> DeleteInstanceGroupLoadBalancer<'_> {
        DeleteInstanceGroupLoadBalancer::new(self)
    }

    /// List all managers for an instance group
    ///
    /// Sends a `GET` request to `/instance_groups/{instance_group_id}/managers`
    ///
    /// ```ignore
    /// let response = client.list_instance_group_managers()
    ///    .instance_group_id(instance_group_id)
    ///    .start(start)
    ///    .limit(limit)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_instance_group_managers(&self) -> ListInstanceGroupManagers<'_> {
        ListInstanceGroupManagers::new(self)
    }

    /// Create a manager for an instance group
    ///
    /// Sends a `POST` request to `/instance_groups/{instance_group_id}/managers`
    ///
    /// ```ignore
    /// let response = client.create_instance_group_manager()
    ///    .instance_group_id(instance_group_id)
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_instance_group_manager(&self) -> CreateInstanceGroupManager<'_> {
        CreateInstanceGroupManager::new(self)
    }

    /// Delete an instance group manager
    ///
    /// Sends a `DELETE` request to `/instance_groups/{instance_group_id}/managers/{id}`
    pub fn delete_instance_group_manager(&self) -> DeleteInstanceGroupManager<'_> {
        DeleteInstanceGroupManager::new(self)
    }

    /// Retrieve an instance group manager
    ///
    /// Sends a `GET` request to `/instance_groups/{instance_group_id}/managers/{id}`
    pub fn get_instance_group_manager(&self) -> GetInstanceGroupManager<'_> {
        GetInstanceGroupManager::new(self)
    }

    /// Update an instance group manager
    ///
    /// Sends a `PATCH` request to `/instance_groups/{instance_group_id}/managers/{id}`
    ///
    /// ```ignore
    /// let response = client.update_instance_group_manager()
    ///    .instance_group_id(instance_group_id)
    ///    .id(id)
    ///    .aggregation_window(aggregation_window)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_instance_group_manager(&self) -> UpdateInstanceGroupManager<'_> {
        UpdateInstanceGroupManager::new(self)
    }

    /// List all policies for an instance group manager
    ///
    /// Sends a `GET` request to `/instance_groups/{instance_group_id}/managers/{instance_group_manager_id}/policies`
    ///
    /// ```ignore
    /// let response = client.list_instance_group_manager_policies()
    ///    .instance_group_id(instance_group_id)
    ///    .instance_group_manager_id(instance_group_manager_id)
    ///    .start(start)
    ///    .limit(limit)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_instance_group_manager_policies(&self) -> ListInstanceGroupManagerPolicies<'_> {
        ListInstanceGroupManagerPolicies::new(self)
    }

    /// Create a policy for an instance group manager
    ///
    /// Sends a `POST` request to `/instance_groups/{instance_group_id}/managers/{instance_group_manager_id}/policies`
    ///
    /// ```ignore
    /// let response = client.create_instance_group_manager_policy()
    ///    .instance_group_id(instance_group_id)
    ///    .instance_group_manager_id(instance_group_manager_id)
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_instance_group_manager_policy(&self) -> CreateInstanceGroupManagerPolicy<'_> {
        CreateInstanceGroupManagerPolicy::new(self)
    }

    /// Delete an instance group manager policy
    ///
    /// Sends a `DELETE` request to `/instance_groups/{instance_group_id}/managers/{instance_group_manager_id}/policies/{id}`
    pub fn delete_instance_group_manager_policy(&self) -> DeleteInstanceGroupManagerPolicy<'_> {
        DeleteInstanceGroupManagerPolicy::new(self)
    }

    /// Retrieve an instance group manager policy
    ///
    /// Sends a `GET` request to `/instance_groups/{instance_group_id}/managers/{instance_group_manager_id}/policies/{id}`
    pub fn get_instance_group_manager_policy(&self) -> GetInstanceGroupManagerPolicy<'_> {
        GetInstanceGroupManagerPolicy::new(self)
    }

    /// Update an instance group manager policy
    ///
    /// Sends a `PATCH` request to `/instance_groups/{instance_group_id}/managers/{instance_group_manager_id}/policies/{id}`
    ///
    /// ```ignore
    /// let response = client.update_instance_group_manager_policy()
    ///    .instance_group_id(instance_group_id)
    ///    .instance_group_manager_id(instance_group_manager_id)
    ///    .id(id)
    ///    .metric_type(metric_type)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_instance_group_manager_policy(&self) -> UpdateInstanceGroupManagerPolicy<'_> {
        UpdateInstanceGroupManagerPolicy::new(self)
    }

    /// Delete all memberships from an instance group
    ///
    /// Sends a `DELETE` request to `/instance_groups/{instance_group_id}/memberships`
    pub fn delete_instance_group_memberships(&self) -> DeleteInstanceGroupMemberships<'_> {
        DeleteInstanceGroupMemberships::new(self)
    }

    /// List all memberships for an instance group
    ///
    /// Sends a `GET` request to `/instance_groups/{instance_group_id}/memberships`
    ///
    /// ```ignore
    /// let response = client.list_instance_group_memberships()
    ///    .instance_group_id(instance_group_id)
    ///    .start(start)
    ///    .limit(limit)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_instance_group_memberships(&self) -> ListInstanceGroupMemberships<'_> {
        ListInstanceGroupMemberships::new(self)
    }

    /// Delete a single membership from an instance group
    ///
    /// Sends a `DELETE` request to `/instance_groups/{instance_group_id}/memberships/{id}`
    pub fn delete_instance_group_membership(&self) -> DeleteInstanceGroupMembership<'_> {
        DeleteInstanceGroupMembership::new(self)
    }

    /// Retrieve an instance group membership
    ///
    /// Sends a `GET` request to `/instance_groups/{instance_group_id}/memberships/{id}`
    pub fn get_instance_group_membership(&self) -> GetInstanceGroupMembership<'_> {
        GetInstanceGroupMembership::new(self)
    }

    /// Update an instance group membership
    ///
    /// Sends a `PATCH` request to `/instance_groups/{instance_group_id}/memberships/{id}`
    ///
    /// ```ignore
    /// let response = client.update_instance_group_membership()
    ///    .instance_group_id(instance_group_id)
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_instance_group_membership(&self) -> UpdateInstanceGroupMembership<'_> {
        UpdateInstanceGroupMembership::new(self)
    }
}

/// Builder for [`Client::list_instance_groups`]
#[derive(Debug, Clone)]
pub struct ListInstanceGroups<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
}

impl<'a> ListInstanceGroups<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            start: None,
            limit: None,
        }
    }

    /// Page token taken from the `next` link of a previous page
    pub fn start(mut self, value: impl Into<String>) -> Self {
        self.start = Some(value.into());
        self
    }

    /// Number of resources to return on a page
    pub fn limit(mut self, value: u32) -> Self {
        self.limit = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroupCollection>> {
        Operation::new(self.client, "list_instance_groups", Method::GET, "/instance_groups")
            .query("start", self.start)
            .query("limit", self.limit)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_instance_group`]
#[derive(Debug, Clone)]
pub struct CreateInstanceGroup<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: InstanceGroupPrototype,
}

impl<'a> CreateInstanceGroup<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: Default::default(),
        }
    }

    pub fn application_port(mut self, value: u16) -> Self {
        self.body.application_port = Some(value);
        self
    }

    pub fn instance_template(mut self, value: Identity) -> Self {
        self.body.instance_template = Some(value);
        self
    }

    pub fn load_balancer(mut self, value: Identity) -> Self {
        self.body.load_balancer = Some(value);
        self
    }

    pub fn load_balancer_pool(mut self, value: Identity) -> Self {
        self.body.load_balancer_pool = Some(value);
        self
    }

    pub fn membership_count(mut self, value: u32) -> Self {
        self.body.membership_count = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn resource_group(mut self, value: ResourceGroupIdentity) -> Self {
        self.body.resource_group = Some(value);
        self
    }

    pub fn subnets(mut self, value: Vec<SubnetIdentity>) -> Self {
        self.body.subnets = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: InstanceGroupPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroup>> {
        Operation::new(self.client, "create_instance_group", Method::POST, "/instance_groups")
            .require("instance_template", self.body.instance_template.is_some())
            .require("subnets", self.body.subnets.is_some())
            .json(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_instance_group`]
#[derive(Debug, Clone)]
pub struct DeleteInstanceGroup<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteInstanceGroup<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            id: None,
        }
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_instance_group",
            Method::DELETE,
            "/instance_groups/{id}",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_instance_group`]
#[derive(Debug, Clone)]
pub struct GetInstanceGroup<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetInstanceGroup<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            id: None,
        }
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroup>> {
        Operation::new(self.client, "get_instance_group", Method::GET, "/instance_groups/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_instance_group`]
#[derive(Debug, Clone)]
pub struct UpdateInstanceGroup<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: InstanceGroupPatch,
}

impl<'a> UpdateInstanceGroup<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            id: None,
            body: Default::default(),
        }
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn application_port(mut self, value: u16) -> Self {
        self.body.application_port = Some(value);
        self
    }

    pub fn instance_template(mut self, value: Identity) -> Self {
        self.body.instance_template = Some(value);
        self
    }

    pub fn load_balancer(mut self, value: Identity) -> Self {
        self.body.load_balancer = Some(value);
        self
    }

    pub fn load_balancer_pool(mut self, value: Identity) -> Self {
        self.body.load_balancer_pool = Some(value);
        self
    }

    pub fn membership_count(mut self, value: u32) -> Self {
        self.body.membership_count = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn subnets(mut self, value: Vec<SubnetIdentity>) -> Self {
        self.body.subnets = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: InstanceGroupPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroup>> {
        Operation::new(self.client, "update_instance_group", Method::PATCH, "/instance_groups/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_instance_group_load_balancer`]
#[derive(Debug, Clone)]
pub struct DeleteInstanceGroupLoadBalancer<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
}

impl<'a> DeleteInstanceGroupLoadBalancer<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_instance_group_load_balancer",
            Method::DELETE,
            "/instance_groups/{instance_group_id}/load_balancer",
        )
        .path("instance_group_id", self.instance_group_id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::list_instance_group_managers`]
#[derive(Debug, Clone)]
pub struct ListInstanceGroupManagers<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    start: Option<String>,
    limit: Option<u32>,
}

impl<'a> ListInstanceGroupManagers<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            start: None,
            limit: None,
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    /// Page token taken from the `next` link of a previous page
    pub fn start(mut self, value: impl Into<String>) -> Self {
        self.start = Some(value.into());
        self
    }

    /// Number of resources to return on a page
    pub fn limit(mut self, value: u32) -> Self {
        self.limit = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroupManagerCollection>> {
        Operation::new(
            self.client,
            "list_instance_group_managers",
            Method::GET,
            "/instance_groups/{instance_group_id}/managers",
        )
        .path("instance_group_id", self.instance_group_id)
        .query("start", self.start)
        .query("limit", self.limit)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_instance_group_manager`]
#[derive(Debug, Clone)]
pub struct CreateInstanceGroupManager<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    body: Option<InstanceGroupManagerPrototype>,
}

impl<'a> CreateInstanceGroupManager<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            body: None,
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub fn body(mut self, value: InstanceGroupManagerPrototype) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroupManager>> {
        Operation::new(
            self.client,
            "create_instance_group_manager",
            Method::POST,
            "/instance_groups/{instance_group_id}/managers",
        )
        .path("instance_group_id", self.instance_group_id)
        .required_json("body", self.body.as_ref())
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_instance_group_manager`]
#[derive(Debug, Clone)]
pub struct DeleteInstanceGroupManager<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteInstanceGroupManager<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            id: None,
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_instance_group_manager",
            Method::DELETE,
            "/instance_groups/{instance_group_id}/managers/{id}",
        )
        .path("instance_group_id", self.instance_group_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_instance_group_manager`]
#[derive(Debug, Clone)]
pub struct GetInstanceGroupManager<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetInstanceGroupManager<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            id: None,
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroupManager>> {
        Operation::new(
            self.client,
            "get_instance_group_manager",
            Method::GET,
            "/instance_groups/{instance_group_id}/managers/{id}",
        )
        .path("instance_group_id", self.instance_group_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_instance_group_manager`]
#[derive(Debug, Clone)]
pub struct UpdateInstanceGroupManager<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    id: Option<String>,
    body: InstanceGroupManagerPatch,
}

impl<'a> UpdateInstanceGroupManager<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn aggregation_window(mut self, value: u32) -> Self {
        self.body.aggregation_window = Some(value);
        self
    }

    pub fn cooldown(mut self, value: u32) -> Self {
        self.body.cooldown = Some(value);
        self
    }

    pub fn management_enabled(mut self, value: bool) -> Self {
        self.body.management_enabled = Some(value);
        self
    }

    pub fn max_membership_count(mut self, value: u32) -> Self {
        self.body.max_membership_count = Some(value);
        self
    }

    pub fn min_membership_count(mut self, value: u32) -> Self {
        self.body.min_membership_count = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: InstanceGroupManagerPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroupManager>> {
        Operation::new(
            self.client,
            "update_instance_group_manager",
            Method::PATCH,
            "/instance_groups/{instance_group_id}/managers/{id}",
        )
        .path("instance_group_id", self.instance_group_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_instance_group_manager_policies`]
#[derive(Debug, Clone)]
pub struct ListInstanceGroupManagerPolicies<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    instance_group_manager_id: Option<String>,
    start: Option<String>,
    limit: Option<u32>,
}

impl<'a> ListInstanceGroupManagerPolicies<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            instance_group_manager_id: None,
            start: None,
            limit: None,
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub fn instance_group_manager_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_manager_id = Some(value.into());
        self
    }

    /// Page token taken from the `next` link of a previous page
    pub fn start(mut self, value: impl Into<String>) -> Self {
        self.start = Some(value.into());
        self
    }

    /// Number of resources to return on a page
    pub fn limit(mut self, value: u32) -> Self {
        self.limit = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroupManagerPolicyCollection>> {
        Operation::new(
            self.client,
            "list_instance_group_manager_policies",
            Method::GET,
            "/instance_groups/{instance_group_id}/managers/{instance_group_manager_id}/policies",
        )
        .path("instance_group_id", self.instance_group_id)
        .path("instance_group_manager_id", self.instance_group_manager_id)
        .query("start", self.start)
        .query("limit", self.limit)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_instance_group_manager_policy`]
#[derive(Debug, Clone)]
pub struct CreateInstanceGroupManagerPolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    instance_group_manager_id: Option<String>,
    body: Option<InstanceGroupManagerPolicyPrototype>,
}

impl<'a> CreateInstanceGroupManagerPolicy<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            instance_group_manager_id: None,
            body: None,
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub fn instance_group_manager_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_manager_id = Some(value.into());
        self
    }

    pub fn body(mut self, value: InstanceGroupManagerPolicyPrototype) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroupManagerPolicy>> {
        Operation::new(
            self.client,
            "create_instance_group_manager_policy",
            Method::POST,
            "/instance_groups/{instance_group_id}/managers/{instance_group_manager_id}/policies",
        )
        .path("instance_group_id", self.instance_group_id)
        .path("instance_group_manager_id", self.instance_group_manager_id)
        .required_json("body", self.body.as_ref())
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_instance_group_manager_policy`]
#[derive(Debug, Clone)]
pub struct DeleteInstanceGroupManagerPolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    instance_group_manager_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteInstanceGroupManagerPolicy<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            instance_group_manager_id: None,
            id: None,
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub fn instance_group_manager_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_manager_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_instance_group_manager_policy",
            Method::DELETE,
            "/instance_groups/{instance_group_id}/managers/{instance_group_manager_id}/policies/{id}",
        )
        .path("instance_group_id", self.instance_group_id)
        .path("instance_group_manager_id", self.instance_group_manager_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_instance_group_manager_policy`]
#[derive(Debug, Clone)]
pub struct GetInstanceGroupManagerPolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    instance_group_manager_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetInstanceGroupManagerPolicy<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            instance_group_manager_id: None,
            id: None,
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub fn instance_group_manager_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_manager_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroupManagerPolicy>> {
        Operation::new(
            self.client,
            "get_instance_group_manager_policy",
            Method::GET,
            "/instance_groups/{instance_group_id}/managers/{instance_group_manager_id}/policies/{id}",
        )
        .path("instance_group_id", self.instance_group_id)
        .path("instance_group_manager_id", self.instance_group_manager_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_instance_group_manager_policy`]
#[derive(Debug, Clone)]
pub struct UpdateInstanceGroupManagerPolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    instance_group_manager_id: Option<String>,
    id: Option<String>,
    body: InstanceGroupManagerPolicyPatch,
}

impl<'a> UpdateInstanceGroupManagerPolicy<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            instance_group_manager_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub fn instance_group_manager_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_manager_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn metric_type(mut self, value: InstanceGroupManagerPolicyMetric) -> Self {
        self.body.metric_type = Some(value);
        self
    }

    pub fn metric_value(mut self, value: u64) -> Self {
        self.body.metric_value = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: InstanceGroupManagerPolicyPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroupManagerPolicy>> {
        Operation::new(
            self.client,
            "update_instance_group_manager_policy",
            Method::PATCH,
            "/instance_groups/{instance_group_id}/managers/{instance_group_manager_id}/policies/{id}",
        )
        .path("instance_group_id", self.instance_group_id)
        .path("instance_group_manager_id", self.instance_group_manager_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_instance_group_memberships`]
#[derive(Debug, Clone)]
pub struct DeleteInstanceGroupMemberships<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
}

impl<'a> DeleteInstanceGroupMemberships<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_instance_group_memberships",
            Method::DELETE,
            "/instance_groups/{instance_group_id}/memberships",
        )
        .path("instance_group_id", self.instance_group_id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::list_instance_group_memberships`]
#[derive(Debug, Clone)]
pub struct ListInstanceGroupMemberships<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    start: Option<String>,
    limit: Option<u32>,
}

impl<'a> ListInstanceGroupMemberships<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            start: None,
            limit: None,
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    /// Page token taken from the `next` link of a previous page
    pub fn start(mut self, value: impl Into<String>) -> Self {
        self.start = Some(value.into());
        self
    }

    /// Number of resources to return on a page
    pub fn limit(mut self, value: u32) -> Self {
        self.limit = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroupMembershipCollection>> {
        Operation::new(
            self.client,
            "list_instance_group_memberships",
            Method::GET,
            "/instance_groups/{instance_group_id}/memberships",
        )
        .path("instance_group_id", self.instance_group_id)
        .query("start", self.start)
        .query("limit", self.limit)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_instance_group_membership`]
#[derive(Debug, Clone)]
pub struct DeleteInstanceGroupMembership<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteInstanceGroupMembership<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            id: None,
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_instance_group_membership",
            Method::DELETE,
            "/instance_groups/{instance_group_id}/memberships/{id}",
        )
        .path("instance_group_id", self.instance_group_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_instance_group_membership`]
#[derive(Debug, Clone)]
pub struct GetInstanceGroupMembership<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetInstanceGroupMembership<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            id: None,
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroupMembership>> {
        Operation::new(
            self.client,
            "get_instance_group_membership",
            Method::GET,
            "/instance_groups/{instance_group_id}/memberships/{id}",
        )
        .path("instance_group_id", self.instance_group_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_instance_group_membership`]
#[derive(Debug, Clone)]
pub struct UpdateInstanceGroupMembership<'a> {
    client: &'a Client,
    headers: HeaderMap,
    instance_group_id: Option<String>,
    id: Option<String>,
    body: InstanceGroupMembershipPatch,
}

impl<'a> UpdateInstanceGroupMembership<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            instance_group_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn instance_group_id(mut self, value: impl Into<String>) -> Self {
        self.instance_group_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: InstanceGroupMembershipPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<InstanceGroupMembership>> {
        Operation::new(
            self.client,
            "update_instance_group_membership",
            Method::PATCH,
            "/instance_groups/{instance_group_id}/memberships/{id}",
        )
        .path("instance_group_id", self.instance_group_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

request_headers! {
    ListInstanceGroups,
    CreateInstanceGroup,
    DeleteInstanceGroup,
    GetInstanceGroup,
    UpdateInstanceGroup,
    DeleteInstanceGroupLoadBalancer,
    ListInstanceGroupManagers,
    CreateInstanceGroupManager,
    DeleteInstanceGroupManager,
    GetInstanceGroupManager,
    UpdateInstanceGroupManager,
    ListInstanceGroupManagerPolicies,
    CreateInstanceGroupManagerPolicy,
    DeleteInstanceGroupManagerPolicy,
    GetInstanceGroupManagerPolicy,
    UpdateInstanceGroupManagerPolicy,
    DeleteInstanceGroupMemberships,
    ListInstanceGroupMemberships,
    DeleteInstanceGroupMembership,
    GetInstanceGroupMembership,
    UpdateInstanceGroupMembership,
}
