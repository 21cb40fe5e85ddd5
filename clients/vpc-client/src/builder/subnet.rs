// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Subnets

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    NetworkAcl, NetworkAclIdentity, PublicGateway, PublicGatewayIdentity, Subnet, SubnetCollection,
    SubnetPatch, SubnetPrototype,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all subnets
    ///
    /// Sends a `GET` request to `/subnets`
    ///
    /// ```ignore
    /// let response = client.list_subnets()
    ///    .start(start)
    ///    .limit(limit)
    ///    .resource_group_id(resource_group_id)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_subnets(&self) -> ListSubnets<'_> {
        ListSubnets::new(self)
    }

    /// Create a subnet
    ///
    /// Sends a `POST` request to `/subnets`
    ///
    /// ```ignore
    /// let response = client.create_subnet()
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_subnet(&self) -> CreateSubnet<'_> {
        CreateSubnet::new(self)
    }

    /// Delete a subnet
    ///
    /// Sends a `DELETE` request to `/subnets/{id}`
    pub fn delete_subnet(&self) -> DeleteSubnet<'_> {
        DeleteSubnet::new(self)
    }

    /// Retrieve a subnet
    ///
    /// Sends a `GET` request to `/subnets/{id}`
    pub fn get_subnet(&self) -> GetSubnet<'_> {
        GetSubnet::new(self)
    }

    /// Update a subnet
    ///
    /// Sends a `PATCH` request to `/subnets/{id}`
    ///
    /// ```ignore
    /// let response = client.update_subnet()
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_subnet(&self) -> UpdateSubnet<'_> {
        UpdateSubnet::new(self)
    }

    /// Retrieve a subnet's attached network ACL
    ///
    /// Sends a `GET` request to `/subnets/{id}/network_acl`
    pub fn get_subnet_network_acl(&self) -> GetSubnetNetworkAcl<'_> {
        GetSubnetNetworkAcl::new(self)
    }

    /// Attach a network ACL to a subnet
    ///
    /// Sends a `PUT` request to `/subnets/{id}/network_acl`
    ///
    /// ```ignore
    /// let response = client.replace_subnet_network_acl()
    ///    .id(id)
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn replace_subnet_network_acl(&self) -> ReplaceSubnetNetworkAcl<'_> {
        ReplaceSubnetNetworkAcl::new(self)
    }

    /// Detach a public gateway from a subnet
    ///
    /// Sends a `DELETE` request to `/subnets/{id}/public_gateway`
    pub fn unset_subnet_public_gateway(&self) -> UnsetSubnetPublicGateway<'_> {
        UnsetSubnetPublicGateway::new(self)
    }

    /// Retrieve a subnet's attached public gateway
    ///
    /// Sends a `GET` request to `/subnets/{id}/public_gateway`
    pub fn get_subnet_public_gateway(&self) -> GetSubnetPublicGateway<'_> {
        GetSubnetPublicGateway::new(self)
    }

    /// Attach a public gateway to a subnet
    ///
    /// Sends a `PUT` request to `/subnets/{id}/public_gateway`
    ///
    /// ```ignore
    /// let response = client.set_subnet_public_gateway()
    ///    .id(id)
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn set_subnet_public_gateway(&self) -> SetSubnetPublicGateway<'_> {
        SetSubnetPublicGateway::new(self)
    }
}

/// Builder for [`Client::list_subnets`]
#[derive(Debug, Clone)]
pub struct ListSubnets<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
    resource_group_id: Option<String>,
}

impl<'a> ListSubnets<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<SubnetCollection>> {
        Operation::new(self.client, "list_subnets", Method::GET, "/subnets")
            .query("start", self.start)
            .query("limit", self.limit)
            .query("resource_group.id", self.resource_group_id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_subnet`]
#[derive(Debug, Clone)]
pub struct CreateSubnet<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: Option<SubnetPrototype>,
}

impl<'a> CreateSubnet<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn body(mut self, value: SubnetPrototype) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Subnet>> {
        Operation::new(self.client, "create_subnet", Method::POST, "/subnets")
            .required_json("body", self.body.as_ref())
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_subnet`]
#[derive(Debug, Clone)]
pub struct DeleteSubnet<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteSubnet<'a> {
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
        Operation::new(self.client, "delete_subnet", Method::DELETE, "/subnets/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send_empty()
            .await
    }
}

/// Builder for [`Client::get_subnet`]
#[derive(Debug, Clone)]
pub struct GetSubnet<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetSubnet<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<Subnet>> {
        Operation::new(self.client, "get_subnet", Method::GET, "/subnets/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_subnet`]
#[derive(Debug, Clone)]
pub struct UpdateSubnet<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: SubnetPatch,
}

impl<'a> UpdateSubnet<'a> {
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

    pub fn network_acl(mut self, value: NetworkAclIdentity) -> Self {
        self.body.network_acl = Some(value);
        self
    }

    pub fn public_gateway(mut self, value: PublicGatewayIdentity) -> Self {
        self.body.public_gateway = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: SubnetPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Subnet>> {
        Operation::new(self.client, "update_subnet", Method::PATCH, "/subnets/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::get_subnet_network_acl`]
#[derive(Debug, Clone)]
pub struct GetSubnetNetworkAcl<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetSubnetNetworkAcl<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<NetworkAcl>> {
        Operation::new(
            self.client,
            "get_subnet_network_acl",
            Method::GET,
            "/subnets/{id}/network_acl",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::replace_subnet_network_acl`]
#[derive(Debug, Clone)]
pub struct ReplaceSubnetNetworkAcl<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: Option<NetworkAclIdentity>,
}

impl<'a> ReplaceSubnetNetworkAcl<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            id: None,
            body: None,
        }
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn body(mut self, value: NetworkAclIdentity) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkAcl>> {
        Operation::new(
            self.client,
            "replace_subnet_network_acl",
            Method::PUT,
            "/subnets/{id}/network_acl",
        )
        .path("id", self.id)
        .required_json("body", self.body.as_ref())
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::unset_subnet_public_gateway`]
#[derive(Debug, Clone)]
pub struct UnsetSubnetPublicGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> UnsetSubnetPublicGateway<'a> {
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
            "unset_subnet_public_gateway",
            Method::DELETE,
            "/subnets/{id}/public_gateway",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_subnet_public_gateway`]
#[derive(Debug, Clone)]
pub struct GetSubnetPublicGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetSubnetPublicGateway<'a> {
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
        Operation::new(
            self.client,
            "get_subnet_public_gateway",
            Method::GET,
            "/subnets/{id}/public_gateway",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::set_subnet_public_gateway`]
#[derive(Debug, Clone)]
pub struct SetSubnetPublicGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: Option<PublicGatewayIdentity>,
}

impl<'a> SetSubnetPublicGateway<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            id: None,
            body: None,
        }
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn body(mut self, value: PublicGatewayIdentity) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<PublicGateway>> {
        Operation::new(
            self.client,
            "set_subnet_public_gateway",
            Method::PUT,
            "/subnets/{id}/public_gateway",
        )
        .path("id", self.id)
        .required_json("body", self.body.as_ref())
        .headers(self.headers)
        .send()
        .await
    }
}

request_headers! {
    ListSubnets,
    CreateSubnet,
    DeleteSubnet,
    GetSubnet,
    UpdateSubnet,
    GetSubnetNetworkAcl,
    ReplaceSubnetNetworkAcl,
    UnsetSubnetPublicGateway,
    GetSubnetPublicGateway,
    SetSubnetPublicGateway,
}
