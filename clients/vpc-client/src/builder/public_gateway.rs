// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Public gateways

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    PublicGateway, PublicGatewayCollection, PublicGatewayFloatingIpPrototype, PublicGatewayPatch,
    PublicGatewayPrototype, ResourceGroupIdentity, VpcIdentity, ZoneIdentity,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all public gateways
    ///
    /// Sends a `GET` request to `/public_gateways`
    ///
    /// ```ignore
    /// let response = client.list_public_gateways()
    ///    .start(start)
    ///    .limit(limit)
    ///    .resource_group_id(resource_group_id)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_public_gateways(&self) -> ListPublicGateways<'_> {
        ListPublicGateways::new(self)
    }

    /// Create a public gateway
    ///
    /// Sends a `POST` request to `/public_gateways`
    ///
    /// ```ignore
    /// let response = client.create_public_gateway()
    ///    .vpc(vpc)
    ///    .zone(zone)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_public_gateway(&self) -> CreatePublicGateway<'_> {
        CreatePublicGateway::new(self)
    }

    /// Delete a public gateway
    ///
    /// Sends a `DELETE` request to `/public_gateways/{id}`
    pub fn delete_public_gateway(&self) -> DeletePublicGateway<'_> {
        DeletePublicGateway::new(self)
    }

    /// Retrieve a public gateway
    ///
    /// Sends a `GET` request to `/public_gateways/{id}`
    pub fn get_public_gateway(&self) -> GetPublicGateway<'_> {
        GetPublicGateway::new(self)
    }

    /// Update a public gateway
    ///
    /// Sends a `PATCH` request to `/public_gateways/{id}`
    ///
    /// ```ignore
    /// let response = client.update_public_gateway()
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_public_gateway(&self) -> UpdatePublicGateway<'_> {
        UpdatePublicGateway::new(self)
    }
}

/// Builder for [`Client::list_public_gateways`]
#[derive(Debug, Clone)]
pub struct ListPublicGateways<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
    resource_group_id: Option<String>,
}

impl<'a> ListPublicGateways<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            start: None,
            limit: None,
            resource_group_id: None,
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

    pub async fn send(self) -> Result<ResponseValue<PublicGatewayCollection>> {
        Operation::new(self.client, "list_public_gateways", Method::GET, "/public_gateways")
            .query("start", self.start)
            .query("limit", self.limit)
            .query("resource_group.id", self.resource_group_id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_public_gateway`]
#[derive(Debug, Clone)]
pub struct CreatePublicGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: PublicGatewayPrototype,
}

impl<'a> CreatePublicGateway<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: Default::default(),
        }
    }

    pub fn floating_ip(mut self, value: PublicGatewayFloatingIpPrototype) -> Self {
        self.body.floating_ip = Some(value);
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

    pub fn vpc(mut self, value: VpcIdentity) -> Self {
        self.body.vpc = Some(value);
        self
    }

    pub fn zone(mut self, value: ZoneIdentity) -> Self {
        self.body.zone = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: PublicGatewayPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<PublicGateway>> {
        Operation::new(self.client, "create_public_gateway", Method::POST, "/public_gateways")
            .require("vpc", self.body.vpc.is_some())
            .require("zone", self.body.zone.is_some())
            .json(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_public_gateway`]
#[derive(Debug, Clone)]
pub struct DeletePublicGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeletePublicGateway<'a> {
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
            "delete_public_gateway",
            Method::DELETE,
            "/public_gateways/{id}",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_public_gateway`]
#[derive(Debug, Clone)]
pub struct GetPublicGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetPublicGateway<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<PublicGateway>> {
        Operation::new(self.client, "get_public_gateway", Method::GET, "/public_gateways/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_public_gateway`]
#[derive(Debug, Clone)]
pub struct UpdatePublicGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: PublicGatewayPatch,
}

impl<'a> UpdatePublicGateway<'a> {
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
    pub fn body(mut self, value: PublicGatewayPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<PublicGateway>> {
        Operation::new(self.client, "update_public_gateway", Method::PATCH, "/public_gateways/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

request_headers! {
    ListPublicGateways,
    CreatePublicGateway,
    DeletePublicGateway,
    GetPublicGateway,
    UpdatePublicGateway,
}
