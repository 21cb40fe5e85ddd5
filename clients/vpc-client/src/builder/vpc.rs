// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! VPCs, address prefixes and routes

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    AddressPrefix, AddressPrefixCollection, AddressPrefixManagement, AddressPrefixPatch,
    AddressPrefixPrototype, IpAddress, NetworkAcl, ResourceGroupIdentity, Route, RouteAction,
    RouteCollection, RoutePatch, RoutePrototype, SecurityGroup, Vpc, VpcCollection, VpcPatch,
    VpcPrototype, ZoneIdentity,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all VPCs
    ///
    /// Sends a `GET` request to `/vpcs`
    ///
    /// ```ignore
    /// let response = client.list_vpcs()
    ///    .start(start)
    ///    .limit(limit)
    ///    .resource_group_id(resource_group_id)
    ///    .classic_access(classic_access)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_vpcs(&self) -> ListVpcs<'_> {
        ListVpcs::new(self)
    }

    /// Create a VPC
    ///
    /// Sends a `POST` request to `/vpcs`
    ///
    /// ```ignore
    /// let response = client.create_vpc()
    ///    .address_prefix_management(address_prefix_management)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_vpc(&self) -> CreateVpc<'_> {
        CreateVpc::new(self)
    }

    /// Delete a VPC
    ///
    /// Sends a `DELETE` request to `/vpcs/{id}`
    pub fn delete_vpc(&self) -> DeleteVpc<'_> {
        DeleteVpc::new(self)
    }

    /// Retrieve a VPC
    ///
    /// Sends a `GET` request to `/vpcs/{id}`
    pub fn get_vpc(&self) -> GetVpc<'_> {
        GetVpc::new(self)
    }

    /// Update a VPC
    ///
    /// Sends a `PATCH` request to `/vpcs/{id}`
    ///
    /// ```ignore
    /// let response = client.update_vpc()
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_vpc(&self) -> UpdateVpc<'_> {
        UpdateVpc::new(self)
    }

    /// Retrieve a VPC's default network ACL
    ///
    /// Sends a `GET` request to `/vpcs/{id}/default_network_acl`
    pub fn get_vpc_default_network_acl(&self) -> GetVpcDefaultNetworkAcl<'_> {
        GetVpcDefaultNetworkAcl::new(self)
    }

    /// Retrieve a VPC's default security group
    ///
    /// Sends a `GET` request to `/vpcs/{id}/default_security_group`
    pub fn get_vpc_default_security_group(&self) -> GetVpcDefaultSecurityGroup<'_> {
        GetVpcDefaultSecurityGroup::new(self)
    }

    /// List all address prefixes for a VPC
    ///
    /// Sends a `GET` request to `/vpcs/{vpc_id}/address_prefixes`
    ///
    /// ```ignore
    /// let response = client.list_vpc_address_prefixes()
    ///    .vpc_id(vpc_id)
    ///    .start(start)
    ///    .limit(limit)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_vpc_address_prefixes(&self) -> ListVpcAddressPrefixes<'_> {
        ListVpcAddressPrefixes::new(self)
    }

    /// Create an address prefix for a VPC
    ///
    /// Sends a `POST` request to `/vpcs/{vpc_id}/address_prefixes`
    ///
    /// ```ignore
    /// let response = client.create_vpc_address_prefix()
    ///    .vpc_id(vpc_id)
    ///    .cidr(cidr)
    ///    .zone(zone)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_vpc_address_prefix(&self) -> CreateVpcAddressPrefix<'_> {
        CreateVpcAddressPrefix::new(self)
    }

    /// Delete an address prefix
    ///
    /// Sends a `DELETE` request to `/vpcs/{vpc_id}/address_prefixes/{id}`
    pub fn delete_vpc_address_prefix(&self) -> DeleteVpcAddressPrefix<'_> {
        DeleteVpcAddressPrefix::new(self)
    }

    /// Retrieve an address prefix
    ///
    /// Sends a `GET` request to `/vpcs/{vpc_id}/address_prefixes/{id}`
    pub fn get_vpc_address_prefix(&self) -> GetVpcAddressPrefix<'_> {
        GetVpcAddressPrefix::new(self)
    }

    /// Update an address prefix
    ///
    /// Sends a `PATCH` request to `/vpcs/{vpc_id}/address_prefixes/{id}`
    ///
    /// ```ignore
    /// let response = client.update_vpc_address_prefix()
    ///    .vpc_id(vpc_id)
    ///    .id(id)
    ///    .is_default(is_default)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_vpc_address_prefix(&self) -> UpdateVpcAddressPrefix<'_> {
        UpdateVpcAddressPrefix::new(self)
    }

    /// List all routes in a VPC
    ///
    /// Sends a `GET` request to `/vpcs/{vpc_id}/routes`
    ///
    /// ```ignore
    /// let response = client.list_vpc_routes()
    ///    .vpc_id(vpc_id)
    ///    .zone_name(zone_name)
    ///    .start(start)
    ///    .limit(limit)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_vpc_routes(&self) -> ListVpcRoutes<'_> {
        ListVpcRoutes::new(self)
    }

    /// Create a route in a VPC
    ///
    /// Sends a `POST` request to `/vpcs/{vpc_id}/routes`
    ///
    /// ```ignore
    /// let response = client.create_vpc_route()
    ///    .vpc_id(vpc_id)
    ///    .destination(destination)
    ///    .next_hop(next_hop)
    ///    .zone(zone)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_vpc_route(&self) -> CreateVpcRoute<'_> {
        CreateVpcRoute::new(self)
    }

    /// Delete a VPC route
    ///
    /// Sends a `DELETE` request to `/vpcs/{vpc_id}/routes/{id}`
    pub fn delete_vpc_route(&self) -> DeleteVpcRoute<'_> {
        DeleteVpcRoute::new(self)
    }

    /// Retrieve a VPC route
    ///
    /// Sends a `GET` request to `/vpcs/{vpc_id}/routes/{id}`
    pub fn get_vpc_route(&self) -> GetVpcRoute<'_> {
        GetVpcRoute::new(self)
    }

    /// Update a VPC route
    ///
    /// Sends a `PATCH` request to `/vpcs/{vpc_id}/routes/{id}`
    ///
    /// ```ignore
    /// let response = client.update_vpc_route()
    ///    .vpc_id(vpc_id)
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_vpc_route(&self) -> UpdateVpcRoute<'_> {
        UpdateVpcRoute::new(self)
    }
}

/// Builder for [`Client::list_vpcs`]
#[derive(Debug, Clone)]
pub struct ListVpcs<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
    resource_group_id: Option<String>,
    classic_access: Option<bool>,
}

impl<'a> ListVpcs<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            start: None,
            limit: None,
            resource_group_id: None,
            classic_access: None,
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

    /// Only VPCs with (or without) classic access
    pub fn classic_access(mut self, value: bool) -> Self {
        self.classic_access = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VpcCollection>> {
        Operation::new(self.client, "list_vpcs", Method::GET, "/vpcs")
            .query("start", self.start)
            .query("limit", self.limit)
            .query("resource_group.id", self.resource_group_id)
            .query("classic_access", self.classic_access)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_vpc`]
#[derive(Debug, Clone)]
pub struct CreateVpc<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: VpcPrototype,
}

impl<'a> CreateVpc<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: Default::default(),
        }
    }

    pub fn address_prefix_management(mut self, value: AddressPrefixManagement) -> Self {
        self.body.address_prefix_management = Some(value);
        self
    }

    pub fn classic_access(mut self, value: bool) -> Self {
        self.body.classic_access = Some(value);
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

    /// Replace the whole request body
    pub fn body(mut self, value: VpcPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Vpc>> {
        Operation::new(self.client, "create_vpc", Method::POST, "/vpcs")
            .json(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_vpc`]
#[derive(Debug, Clone)]
pub struct DeleteVpc<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteVpc<'a> {
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
        Operation::new(self.client, "delete_vpc", Method::DELETE, "/vpcs/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send_empty()
            .await
    }
}

/// Builder for [`Client::get_vpc`]
#[derive(Debug, Clone)]
pub struct GetVpc<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetVpc<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<Vpc>> {
        Operation::new(self.client, "get_vpc", Method::GET, "/vpcs/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_vpc`]
#[derive(Debug, Clone)]
pub struct UpdateVpc<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: VpcPatch,
}

impl<'a> UpdateVpc<'a> {
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
    pub fn body(mut self, value: VpcPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Vpc>> {
        Operation::new(self.client, "update_vpc", Method::PATCH, "/vpcs/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::get_vpc_default_network_acl`]
#[derive(Debug, Clone)]
pub struct GetVpcDefaultNetworkAcl<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetVpcDefaultNetworkAcl<'a> {
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
            "get_vpc_default_network_acl",
            Method::GET,
            "/vpcs/{id}/default_network_acl",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::get_vpc_default_security_group`]
#[derive(Debug, Clone)]
pub struct GetVpcDefaultSecurityGroup<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetVpcDefaultSecurityGroup<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<SecurityGroup>> {
        Operation::new(
            self.client,
            "get_vpc_default_security_group",
            Method::GET,
            "/vpcs/{id}/default_security_group",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_vpc_address_prefixes`]
#[derive(Debug, Clone)]
pub struct ListVpcAddressPrefixes<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpc_id: Option<String>,
    start: Option<String>,
    limit: Option<u32>,
}

impl<'a> ListVpcAddressPrefixes<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpc_id: None,
            start: None,
            limit: None,
        }
    }

    pub fn vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
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

    pub async fn send(self) -> Result<ResponseValue<AddressPrefixCollection>> {
        Operation::new(
            self.client,
            "list_vpc_address_prefixes",
            Method::GET,
            "/vpcs/{vpc_id}/address_prefixes",
        )
        .path("vpc_id", self.vpc_id)
        .query("start", self.start)
        .query("limit", self.limit)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_vpc_address_prefix`]
#[derive(Debug, Clone)]
pub struct CreateVpcAddressPrefix<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpc_id: Option<String>,
    body: AddressPrefixPrototype,
}

impl<'a> CreateVpcAddressPrefix<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpc_id: None,
            body: Default::default(),
        }
    }

    pub fn vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }

    pub fn cidr(mut self, value: impl Into<String>) -> Self {
        self.body.cidr = Some(value.into());
        self
    }

    pub fn is_default(mut self, value: bool) -> Self {
        self.body.is_default = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn zone(mut self, value: ZoneIdentity) -> Self {
        self.body.zone = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: AddressPrefixPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<AddressPrefix>> {
        Operation::new(
            self.client,
            "create_vpc_address_prefix",
            Method::POST,
            "/vpcs/{vpc_id}/address_prefixes",
        )
        .path("vpc_id", self.vpc_id)
        .require("cidr", self.body.cidr.is_some())
        .require("zone", self.body.zone.is_some())
        .json(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_vpc_address_prefix`]
#[derive(Debug, Clone)]
pub struct DeleteVpcAddressPrefix<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpc_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteVpcAddressPrefix<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpc_id: None,
            id: None,
        }
    }

    pub fn vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_vpc_address_prefix",
            Method::DELETE,
            "/vpcs/{vpc_id}/address_prefixes/{id}",
        )
        .path("vpc_id", self.vpc_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_vpc_address_prefix`]
#[derive(Debug, Clone)]
pub struct GetVpcAddressPrefix<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpc_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetVpcAddressPrefix<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpc_id: None,
            id: None,
        }
    }

    pub fn vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<AddressPrefix>> {
        Operation::new(
            self.client,
            "get_vpc_address_prefix",
            Method::GET,
            "/vpcs/{vpc_id}/address_prefixes/{id}",
        )
        .path("vpc_id", self.vpc_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_vpc_address_prefix`]
#[derive(Debug, Clone)]
pub struct UpdateVpcAddressPrefix<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpc_id: Option<String>,
    id: Option<String>,
    body: AddressPrefixPatch,
}

impl<'a> UpdateVpcAddressPrefix<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpc_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn is_default(mut self, value: bool) -> Self {
        self.body.is_default = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: AddressPrefixPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<AddressPrefix>> {
        Operation::new(
            self.client,
            "update_vpc_address_prefix",
            Method::PATCH,
            "/vpcs/{vpc_id}/address_prefixes/{id}",
        )
        .path("vpc_id", self.vpc_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_vpc_routes`]
#[derive(Debug, Clone)]
pub struct ListVpcRoutes<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpc_id: Option<String>,
    zone_name: Option<String>,
    start: Option<String>,
    limit: Option<u32>,
}

impl<'a> ListVpcRoutes<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpc_id: None,
            zone_name: None,
            start: None,
            limit: None,
        }
    }

    pub fn vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }

    /// Only resources in the zone with this name
    pub fn zone_name(mut self, value: impl Into<String>) -> Self {
        self.zone_name = Some(value.into());
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

    pub async fn send(self) -> Result<ResponseValue<RouteCollection>> {
        Operation::new(self.client, "list_vpc_routes", Method::GET, "/vpcs/{vpc_id}/routes")
            .path("vpc_id", self.vpc_id)
            .query("zone.name", self.zone_name)
            .query("start", self.start)
            .query("limit", self.limit)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_vpc_route`]
#[derive(Debug, Clone)]
pub struct CreateVpcRoute<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpc_id: Option<String>,
    body: RoutePrototype,
}

impl<'a> CreateVpcRoute<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpc_id: None,
            body: Default::default(),
        }
    }

    pub fn vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }

    pub fn action(mut self, value: RouteAction) -> Self {
        self.body.action = Some(value);
        self
    }

    pub fn destination(mut self, value: impl Into<String>) -> Self {
        self.body.destination = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn next_hop(mut self, value: IpAddress) -> Self {
        self.body.next_hop = Some(value);
        self
    }

    pub fn zone(mut self, value: ZoneIdentity) -> Self {
        self.body.zone = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: RoutePrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Route>> {
        Operation::new(self.client, "create_vpc_route", Method::POST, "/vpcs/{vpc_id}/routes")
            .path("vpc_id", self.vpc_id)
            .require("destination", self.body.destination.is_some())
            .require("next_hop", self.body.next_hop.is_some())
            .require("zone", self.body.zone.is_some())
            .json(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_vpc_route`]
#[derive(Debug, Clone)]
pub struct DeleteVpcRoute<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpc_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteVpcRoute<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpc_id: None,
            id: None,
        }
    }

    pub fn vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_vpc_route",
            Method::DELETE,
            "/vpcs/{vpc_id}/routes/{id}",
        )
        .path("vpc_id", self.vpc_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_vpc_route`]
#[derive(Debug, Clone)]
pub struct GetVpcRoute<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpc_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetVpcRoute<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpc_id: None,
            id: None,
        }
    }

    pub fn vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Route>> {
        Operation::new(self.client, "get_vpc_route", Method::GET, "/vpcs/{vpc_id}/routes/{id}")
            .path("vpc_id", self.vpc_id)
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_vpc_route`]
#[derive(Debug, Clone)]
pub struct UpdateVpcRoute<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpc_id: Option<String>,
    id: Option<String>,
    body: RoutePatch,
}

impl<'a> UpdateVpcRoute<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpc_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
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
    pub fn body(mut self, value: RoutePatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<Route>> {
        Operation::new(self.client, "update_vpc_route", Method::PATCH, "/vpcs/{vpc_id}/routes/{id}")
            .path("vpc_id", self.vpc_id)
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

request_headers! {
    ListVpcs,
    CreateVpc,
    DeleteVpc,
    GetVpc,
    UpdateVpc,
    GetVpcDefaultNetworkAcl,
    GetVpcDefaultSecurityGroup,
    ListVpcAddressPrefixes,
    CreateVpcAddressPrefix,
    DeleteVpcAddressPrefix,
    GetVpcAddressPrefix,
    UpdateVpcAddressPrefix,
    ListVpcRoutes,
    CreateVpcRoute,
    DeleteVpcRoute,
    GetVpcRoute,
    UpdateVpcRoute,
}
