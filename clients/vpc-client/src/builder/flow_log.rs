// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Flow log collectors

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    FlowLogCollector, FlowLogCollectorCollection, FlowLogCollectorPatch, FlowLogCollectorPrototype,
    Identity, ResourceGroupIdentity, StorageBucket,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all flow log collectors
    ///
    /// Sends a `GET` request to `/flow_log_collectors`
    ///
    /// ```ignore
    /// let response = client.list_flow_log_collectors()
    ///    .start(start)
    ///    .limit(limit)
    ///    .resource_group_id(resource_group_id)
    ///    .name(name)
    ///    .vpc_id(vpc_id)
    ///    .vpc_crn(vpc_crn)
    ///    .vpc_name(vpc_name)
    ///    .target_id(target_id)
    ///    .target_resource_type(target_resource_type)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_flow_log_collectors(&self) -> ListFlowLogCollectors<'_> {
        ListFlowLogCollectors::new(self)
    }

    /// Create a flow log collector
    ///
    /// Sends a `POST` request to `/flow_log_collectors`
    ///
    /// ```ignore
    /// let response = client.create_flow_log_collector()
    ///    .storage_bucket(storage_bucket)
    ///    .target(target)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_flow_log_collector(&self) -> CreateFlowLogCollector<'_> {
        CreateFlowLogCollector::new(self)
    }

    /// Delete the specified flow log collector
    ///
    /// Sends a `DELETE` request to `/flow_log_collectors/{id}`
    pub fn delete_flow_log_collector(&self) -> DeleteFlowLogCollector<'_> {
        DeleteFlowLogCollector::new(self)
    }

    /// Retrieve the specified flow log collector
    ///
    /// Sends a `GET` request to `/flow_log_collectors/{id}`
    pub fn get_flow_log_collector(&self) -> GetFlowLogCollector<'_> {
        GetFlowLogCollector::new(self)
    }

    /// Update the specified flow log collector
    ///
    /// Sends a `PATCH` request to `/flow_log_collectors/{id}`
    ///
    /// ```ignore
    /// let response = client.update_flow_log_collector()
    ///    .id(id)
    ///    .active(active)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_flow_log_collector(&self) -> UpdateFlowLogCollector<'_> {
        UpdateFlowLogCollector::new(self)
    }
}

/// Builder for [`Client::list_flow_log_collectors`]
#[derive(Debug, Clone)]
pub struct ListFlowLogCollectors<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
    resource_group_id: Option<String>,
    name: Option<String>,
    vpc_id: Option<String>,
    vpc_crn: Option<String>,
    vpc_name: Option<String>,
    target_id: Option<String>,
    target_resource_type: Option<String>,
}

impl<'a> ListFlowLogCollectors<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            start: None,
            limit: None,
            resource_group_id: None,
            name: None,
            vpc_id: None,
            vpc_crn: None,
            vpc_name: None,
            target_id: None,
            target_resource_type: None,
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

    /// Only resources in the resource group with this identifier
    pub fn resource_group_id(mut self, value: impl Into<String>) -> Self {
        self.resource_group_id = Some(value.into());
        self
    }

    /// Only resources with this exact name
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Only resources in the VPC with this identifier
    pub fn vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }

    /// Only resources in the VPC with this CRN
    pub fn vpc_crn(mut self, value: impl Into<String>) -> Self {
        self.vpc_crn = Some(value.into());
        self
    }

    /// Only resources in the VPC with this name
    pub fn vpc_name(mut self, value: impl Into<String>) -> Self {
        self.vpc_name = Some(value.into());
        self
    }

    /// Only collectors whose target has this identifier
    pub fn target_id(mut self, value: impl Into<String>) -> Self {
        self.target_id = Some(value.into());
        self
    }

    /// Only collectors whose target is of this resource type
    pub fn target_resource_type(mut self, value: impl Into<String>) -> Self {
        self.target_resource_type = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<FlowLogCollectorCollection>> {
        Operation::new(self.client, "list_flow_log_collectors", Method::GET, "/flow_log_collectors")
            .query("start", self.start)
            .query("limit", self.limit)
            .query("resource_group.id", self.resource_group_id)
            .query("name", self.name)
            .query("vpc.id", self.vpc_id)
            .query("vpc.crn", self.vpc_crn)
            .query("vpc.name", self.vpc_name)
            .query("target.id", self.target_id)
            .query("target.resource_type", self.target_resource_type)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_flow_log_collector`]
#[derive(Debug, Clone)]
pub struct CreateFlowLogCollector<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: FlowLogCollectorPrototype,
}

impl<'a> CreateFlowLogCollector<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: Default::default(),
        }
    }

    pub fn active(mut self, value: bool) -> Self {
        self.body.active = Some(value);
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

    pub fn storage_bucket(mut self, value: StorageBucket) -> Self {
        self.body.storage_bucket = Some(value);
        self
    }

    pub fn target(mut self, value: Identity) -> Self {
        self.body.target = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: FlowLogCollectorPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<FlowLogCollector>> {
        Operation::new(
            self.client,
            "create_flow_log_collector",
            Method::POST,
            "/flow_log_collectors",
        )
        .require("storage_bucket", self.body.storage_bucket.is_some())
        .require("target", self.body.target.is_some())
        .json(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_flow_log_collector`]
#[derive(Debug, Clone)]
pub struct DeleteFlowLogCollector<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteFlowLogCollector<'a> {
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
            "delete_flow_log_collector",
            Method::DELETE,
            "/flow_log_collectors/{id}",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_flow_log_collector`]
#[derive(Debug, Clone)]
pub struct GetFlowLogCollector<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetFlowLogCollector<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<FlowLogCollector>> {
        Operation::new(
            self.client,
            "get_flow_log_collector",
            Method::GET,
            "/flow_log_collectors/{id}",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_flow_log_collector`]
#[derive(Debug, Clone)]
pub struct UpdateFlowLogCollector<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: FlowLogCollectorPatch,
}

impl<'a> UpdateFlowLogCollector<'a> {
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

    pub fn active(mut self, value: bool) -> Self {
        self.body.active = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: FlowLogCollectorPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<FlowLogCollector>> {
        Operation::new(
            self.client,
            "update_flow_log_collector",
            Method::PATCH,
            "/flow_log_collectors/{id}",
        )
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

request_headers! {
    ListFlowLogCollectors,
    CreateFlowLogCollector,
    DeleteFlowLogCollector,
    GetFlowLogCollector,
    UpdateFlowLogCollector,
}
