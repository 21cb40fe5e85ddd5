// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Floating IPs

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    FloatingIp, FloatingIpCollection, FloatingIpPatch, FloatingIpPrototype, Identity,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all floating IPs
    ///
    /// Sends a `GET` request to `/floating_ips`
    ///
    /// ```ignore
    /// let response = client.list_floating_ips()
    ///    .start(start)
    ///    .limit(limit)
    ///    .resource_group_id(resource_group_id)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_floating_ips(&self) -> ListFloatingIps<'_> {
        ListFloatingIps::new(self)
    }

    /// Reserve a floating IP
    ///
    /// Sends a `POST` request to `/floating_ips`
    ///
    /// ```ignore
    /// let response = client.create_floating_ip()
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_floating_ip(&self) -> CreateFloatingIp<'_> {
        CreateFloatingIp::new(self)
    }

    /// Release the specified floating IP
    ///
    /// Sends a `DELETE` request to `/floating_ips/{id}`
    pub fn delete_floating_ip(&self) -> DeleteFloatingIp<'_> {
        DeleteFloatingIp::new(self)
    }

    /// Retrieve the specified floating IP
    ///
    /// Sends a `GET` request to `/floating_ips/{id}`
    pub fn get_floating_ip(&self) -> GetFloatingIp<'_> {
        GetFloatingIp::new(self)
    }

    /// Update the specified floating IP
    ///
    /// Sends a `PATCH` request to `/floating_ips/{id}`
    ///
    /// ```ignore
    /// let response = client.update_floating_ip()
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_floating_ip(&self) -> UpdateFloatingIp<'_> {
        UpdateFloatingIp::new(self)
    }
}

/// Builder for [`Client::list_floating_ips`]
#[derive(Debug, Clone)]
pub struct ListFloatingIps<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
    resource_group_id: Option<String>,
}

impl<'a> ListFloatingIps<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<FloatingIpCollection>> {
        Operation::new(self.client, "list_floating_ips", Method::GET, "/floating_ips")
            .query("start", self.start)
            .query("limit", self.limit)
            .query("resource_group.id", self.resource_group_id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_floating_ip`]
#[derive(Debug, Clone)]
pub struct CreateFloatingIp<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: Option<FloatingIpPrototype>,
}

impl<'a> CreateFloatingIp<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn body(mut self, value: FloatingIpPrototype) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<FloatingIp>> {
        Operation::new(self.client, "create_floating_ip", Method::POST, "/floating_ips")
            .required_json("body", self.body.as_ref())
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_floating_ip`]
#[derive(Debug, Clone)]
pub struct DeleteFloatingIp<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteFloatingIp<'a> {
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
        Operation::new(self.client, "delete_floating_ip", Method::DELETE, "/floating_ips/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send_empty()
            .await
    }
}

/// Builder for [`Client::get_floating_ip`]
#[derive(Debug, Clone)]
pub struct GetFloatingIp<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetFloatingIp<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<FloatingIp>> {
        Operation::new(self.client, "get_floating_ip", Method::GET, "/floating_ips/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_floating_ip`]
#[derive(Debug, Clone)]
pub struct UpdateFloatingIp<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: FloatingIpPatch,
}

impl<'a> UpdateFloatingIp<'a> {
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

    pub fn target(mut self, value: Identity) -> Self {
        self.body.target = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: FloatingIpPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<FloatingIp>> {
        Operation::new(self.client, "update_floating_ip", Method::PATCH, "/floating_ips/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

request_headers! {
    ListFloatingIps,
    CreateFloatingIp,
    DeleteFloatingIp,
    GetFloatingIp,
    UpdateFloatingIp,
}
