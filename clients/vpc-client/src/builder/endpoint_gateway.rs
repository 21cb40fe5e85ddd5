// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Endpoint gateways and their reserved IPs

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    EndpointGateway, EndpointGatewayCollection, EndpointGatewayPatch, EndpointGatewayPrototype,
    EndpointGatewayReservedIp, EndpointGatewayTarget, ReservedIp,
    ReservedIpCollectionEndpointGatewayContext, ResourceGroupIdentity, VpcIdentity,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all endpoint gateways
    ///
    /// Sends a `GET` request to `/endpoint_gateways`
    ///
    /// ```ignore
    /// let response = client.list_endpoint_gateways()
    ///    .name(name)
    ///    .start(start)
    ///    .limit(limit)
    ///    .resource_group_id(resource_group_id)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_endpoint_gateways(&self) -> ListEndpointGateways<'_> {
        ListEndpointGateways::new(self)
    }

    /// Create an endpoint gateway
    ///
    /// Sends a `POST` request to `/endpoint_gateways`
    ///
    /// ```ignore
    /// let response = client.create_endpoint_gateway()
    ///    .target(target)
    ///    .vpc(vpc)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_endpoint_gateway(&self) -> CreateEndpointGateway<'_> {
        CreateEndpointGateway::new(self)
    }

    /// List all reserved IPs bound to an endpoint gateway
    ///
    /// Sends a `GET` request to `/endpoint_gateways/{endpoint_gateway_id}/ips`
    ///
    /// ```ignore
    /// let response = client.list_endpoint_gateway_ips()
    ///    .endpoint_gateway_id(endpoint_gateway_id)
    ///    .start(start)
    ///    .limit(limit)
    ///    .sort(sort)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_endpoint_gateway_ips(&self) -> ListEndpointGatewayIps<'_> {
        ListEndpointGatewayIps::new(self)
    }

    /// Unbind a reserved IP from an endpoint gateway
    ///
    /// Sends a `DELETE` request to `/endpoint_gateways/{endpoint_gateway_id}/ips/{id}`
    pub fn remove_endpoint_gateway_ip(&self) -> RemoveEndpointGatewayIp<'_> {
        RemoveEndpointGatewayIp::new(self)
    }

    /// Retrieve a reserved IP bound to an endpoint gateway
    ///
    /// Sends a `GET` request to `/endpoint_gateways/{endpoint_gateway_id}/ips/{id}`
    pub fn get_endpoint_gateway_ip(&self) -> GetEndpointGatewayIp<'_> {
        GetEndpointGatewayIp::new(self)
    }

    /// Bind a reserved IP to an endpoint gateway
    ///
    /// Sends a `PUT` request to `/endpoint_gateways/{endpoint_gateway_id}/ips/{id}`
    pub fn add_endpoint_gateway_ip(&self) -> AddEndpointGatewayIp<'_> {
        AddEndpointGatewayIp::new(self)
    }

    /// Delete an endpoint gateway
    ///
    /// Sends a `DELETE` request to `/endpoint_gateways/{id}`
    pub fn delete_endpoint_gateway(&self) -> DeleteEndpointGateway<'_> {
        DeleteEndpointGateway::new(self)
    }

    /// Retrieve an endpoint gateway
    ///
    /// Sends a `GET` request to `/endpoint_gateways/{id}`
    pub fn get_endpoint_gateway(&self) -> GetEndpointGateway<'_> {
        GetEndpointGateway::new(self)
    }

    /// Update an endpoint gateway
    ///
    /// Sends a `PATCH` request to `/endpoint_gateways/{id}`
    ///
    /// ```ignore
    /// let response = client.update_endpoint_gateway()
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_endpoint_gateway(&self) -> UpdateEndpointGateway<'_> {
        UpdateEndpointGateway::new(self)
    }
}

/// Builder for [`Client::list_endpoint_gateways`]
#[derive(Debug, Clone)]
pub struct ListEndpointGateways<'a> {
    client: &'a Client,
    headers: HeaderMap,
    name: Option<String>,
    start: Option<String>,
    limit: Option<u32>,
    resource_group_id: Option<String>,
}

impl<'a> ListEndpointGateways<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            name: None,
            start: None,
            limit: None,
            resource_group_id: None,
        }
    }

    /// Only resources with this exact name
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
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

    /// Only resources in the resource group with this identifier
    pub fn resource_group_id(mut self, value: impl Into<String>) -> Self {
        self.resource_group_id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<EndpointGatewayCollection>> {
        Operation::new(self.client, "list_endpoint_gateways", Method::GET, "/endpoint_gateways")
            .query("name", self.name)
            .query("start", self.start)
            .query("limit", self.limit)
            .query("resource_group.id", self.resource_group_id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_endpoint_gateway`]
#[derive(Debug, Clone)]
pub struct CreateEndpointGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: EndpointGatewayPrototype,
}

impl<'a> CreateEndpointGateway<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: Default::default(),
        }
    }

    pub fn ips(mut self, value: Vec<EndpointGatewayReservedIp>) -> Self {
        self.body.ips = Some(value);
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

    pub fn target(mut self, value: EndpointGatewayTarget) -> Self {
        self.body.target = Some(value);
        self
    }

    pub fn vpc(mut self, value: VpcIdentity) -> Self {
        self.body.vpc = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: EndpointGatewayPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<EndpointGateway>> {
        Operation::new(self.client, "create_endpoint_gateway", Method::POST, "/endpoint_gateways")
            .require("target", self.body.target.is_some())
            .require("vpc", self.body.vpc.is_some())
            .json(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::list_endpoint_gateway_ips`]
#[derive(Debug, Clone)]
pub struct ListEndpointGatewayIps<'a> {
    client: &'a Client,
    headers: HeaderMap,
    endpoint_gateway_id: Option<String>,
    start: Option<String>,
    limit: Option<u32>,
    sort: Option<String>,
}

impl<'a> ListEndpointGatewayIps<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            endpoint_gateway_id: None,
            start: None,
            limit: None,
            sort: None,
        }
    }

    pub fn endpoint_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.endpoint_gateway_id = Some(value.into());
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

    /// Sort by `name` or `created_at`; prefix with `-` for descending
    pub fn sort(mut self, value: impl Into<String>) -> Self {
        self.sort = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<ReservedIpCollectionEndpointGatewayContext>> {
        Operation::new(
            self.client,
            "list_endpoint_gateway_ips",
            Method::GET,
            "/endpoint_gateways/{endpoint_gateway_id}/ips",
        )
        .path("endpoint_gateway_id", self.endpoint_gateway_id)
        .query("start", self.start)
        .query("limit", self.limit)
        .query("sort", self.sort)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::remove_endpoint_gateway_ip`]
#[derive(Debug, Clone)]
pub struct RemoveEndpointGatewayIp<'a> {
    client: &'a Client,
    headers: HeaderMap,
    endpoint_gateway_id: Option<String>,
    id: Option<String>,
}

impl<'a> RemoveEndpointGatewayIp<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            endpoint_gateway_id: None,
            id: None,
        }
    }

    pub fn endpoint_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.endpoint_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "remove_endpoint_gateway_ip",
            Method::DELETE,
            "/endpoint_gateways/{endpoint_gateway_id}/ips/{id}",
        )
        .path("endpoint_gateway_id", self.endpoint_gateway_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_endpoint_gateway_ip`]
#[derive(Debug, Clone)]
pub struct GetEndpointGatewayIp<'a> {
    client: &'a Client,
    headers: HeaderMap,
    endpoint_gateway_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetEndpointGatewayIp<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            endpoint_gateway_id: None,
            id: None,
        }
    }

    pub fn endpoint_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.endpoint_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<ReservedIp>> {
        Operation::new(
            self.client,
            "get_endpoint_gateway_ip",
            Method::GET,
            "/endpoint_gateways/{endpoint_gateway_id}/ips/{id}",
        )
        .path("endpoint_gateway_id", self.endpoint_gateway_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::add_endpoint_gateway_ip`]
#[derive(Debug, Clone)]
pub struct AddEndpointGatewayIp<'a> {
    client: &'a Client,
    headers: HeaderMap,
    endpoint_gateway_id: Option<String>,
    id: Option<String>,
}

impl<'a> AddEndpointGatewayIp<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            endpoint_gateway_id: None,
            id: None,
        }
    }

    pub fn endpoint_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.endpoint_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<ReservedIp>> {
        Operation::new(
            self.client,
            "add_endpoint_gateway_ip",
            Method::PUT,
            "/endpoint_gateways/{endpoint_gateway_id}/ips/{id}",
        )
        .path("endpoint_gateway_id", self.endpoint_gateway_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_endpoint_gateway`]
#[derive(Debug, Clone)]
pub struct DeleteEndpointGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteEndpointGateway<'a> {
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
            "delete_endpoint_gateway",
            Method::DELETE,
            "/endpoint_gateways/{id}",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_endpoint_gateway`]
#[derive(Debug, Clone)]
pub struct GetEndpointGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetEndpointGateway<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<EndpointGateway>> {
        Operation::new(self.client, "get_endpoint_gateway", Method::GET, "/endpoint_gateways/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_endpoint_gateway`]
#[derive(Debug, Clone)]
pub struct UpdateEndpointGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: EndpointGatewayPatch,
}

impl<'a> UpdateEndpointGateway<'a> {
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

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: EndpointGatewayPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<EndpointGateway>> {
        Operation::new(
            self.client,
            "update_endpoint_gateway",
            Method::PATCH,
            "/endpoint_gateways/{id}",
        )
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

request_headers! {
    ListEndpointGateways,
    CreateEndpointGateway,
    ListEndpointGatewayIps,
    RemoveEndpointGatewayIp,
    GetEndpointGatewayIp,
    AddEndpointGatewayIp,
    DeleteEndpointGateway,
    GetEndpointGateway,
    UpdateEndpointGateway,
}
