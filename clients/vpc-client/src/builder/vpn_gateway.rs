// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! VPN gateways, connections and connection CIDRs

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    DeadPeerDetection, Identity, VpnGateway, VpnGatewayCollection, VpnGatewayConnection,
    VpnGatewayConnectionCollection, VpnGatewayConnectionLocalCidrs, VpnGatewayConnectionPatch,
    VpnGatewayConnectionPeerCidrs, VpnGatewayConnectionPrototype, VpnGatewayConnectionStatus,
    VpnGatewayMode, VpnGatewayPatch, VpnGatewayPrototype,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all VPN gateways
    ///
    /// Sends a `GET` request to `/vpn_gateways`
    ///
    /// ```ignore
    /// let response = client.list_vpn_gateways()
    ///    .start(start)
    ///    .limit(limit)
    ///    .resource_group_id(resource_group_id)
    ///    .mode(mode)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_vpn_gateways(&self) -> ListVpnGateways<'_> {
        ListVpnGateways::new(self)
    }

    /// Create a VPN gateway
    ///
    /// Sends a `POST` request to `/vpn_gateways`
    ///
    /// ```ignore
    /// let response = client.create_vpn_gateway()
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_vpn_gateway(&self) -> CreateVpnGateway<'_> {
        CreateVpnGateway::new(self)
    }

    /// Delete a VPN gateway
    ///
    /// Sends a `DELETE` request to `/vpn_gateways/{id}`
    pub fn delete_vpn_gateway(&self) -> DeleteVpnGateway<'_> {
        DeleteVpnGateway::new(self)
    }

    /// Retrieve a VPN gateway
    ///
    /// Sends a `GET` request to `/vpn_gateways/{id}`
    pub fn get_vpn_gateway(&self) -> GetVpnGateway<'_> {
        GetVpnGateway::new(self)
    }

    /// Update a VPN gateway
    ///
    /// Sends a `PATCH` request to `/vpn_gateways/{id}`
    ///
    /// ```ignore
    /// let response = client.update_vpn_gateway()
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_vpn_gateway(&self) -> UpdateVpnGateway<'_> {
        UpdateVpnGateway::new(self)
    }

    /// List all connections of a VPN gateway
    ///
    /// Sends a `GET` request to `/vpn_gateways/{vpn_gateway_id}/connections`
    ///
    /// ```ignore
    /// let response = client.list_vpn_gateway_connections()
    ///    .vpn_gateway_id(vpn_gateway_id)
    ///    .status(status)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_vpn_gateway_connections(&self) -> ListVpnGatewayConnections<'_> {
        ListVpnGatewayConnections::new(self)
    }

    /// Create a connection for a VPN gateway
    ///
    /// Sends a `POST` request to `/vpn_gateways/{vpn_gateway_id}/connections`
    ///
    /// ```ignore
    /// let response = client.create_vpn_gateway_connection()
    ///    .vpn_gateway_id(vpn_gateway_id)
    ///    .peer_address(peer_address)
    ///    .psk(psk)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_vpn_gateway_connection(&self) -> CreateVpnGatewayConnection<'_> {
        CreateVpnGatewayConnection::new(self)
    }

    /// Delete a VPN gateway connection
    ///
    /// Sends a `DELETE` request to `/vpn_gateways/{vpn_gateway_id}/connections/{id}`
    pub fn delete_vpn_gateway_connection(&self) -> DeleteVpnGatewayConnection<'_> {
        DeleteVpnGatewayConnection::new(self)
    }

    /// Retrieve a VPN gateway connection
    ///
    /// Sends a `GET` request to `/vpn_gateways/{vpn_gateway_id}/connections/{id}`
    pub fn get_vpn_gateway_connection(&self) -> GetVpnGatewayConnection<'_> {
        GetVpnGatewayConnection::new(self)
    }

    /// Update a VPN gateway connection
    ///
    /// Sends a `PATCH` request to `/vpn_gateways/{vpn_gateway_id}/connections/{id}`
    ///
    /// ```ignore
    /// let response = client.update_vpn_gateway_connection()
    ///    .vpn_gateway_id(vpn_gateway_id)
    ///    .id(id)
    ///    .admin_state_up(admin_state_up)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_vpn_gateway_connection(&self) -> UpdateVpnGatewayConnection<'_> {
        UpdateVpnGatewayConnection::new(self)
    }

    /// List all local CIDRs for a VPN gateway connection
    ///
    /// Sends a `GET` request to `/vpn_gateways/{vpn_gateway_id}/connections/{id}/local_cidrs`
    pub fn list_vpn_gateway_connection_local_cidrs(
        &self,
    ) -> ListVpnGatewayConnectionLocalCidrs<'_> {
        ListVpnGatewayConnectionLocalCidrs::new(self)
    }

    /// Remove a local CIDR from a VPN gateway connection
    ///
    /// Sends a `DELETE` request to `/vpn_gateways/{vpn_gateway_id}/connections/{id}/local_cidrs/{cidr_prefix}/{prefix_length}`
    pub fn remove_vpn_gateway_connection_local_cidr(
        &self,
    ) -> RemoveVpnGatewayConnectionLocalCidr<'_> {
        RemoveVpnGatewayConnectionLocalCidr::new(self)
    }

    /// Check if the specified local CIDR exists on a VPN gateway connection
    ///
    /// Sends a `GET` request to `/vpn_gateways/{vpn_gateway_id}/connections/{id}/local_cidrs/{cidr_prefix}/{prefix_length}`
    pub fn check_vpn_gateway_connection_local_cidr(
        &self,
    ) -> CheckVpnGatewayConnectionLocalCidr<'_> {
        CheckVpnGatewayConnectionLocalCidr::new(self)
    }

    /// Set a local CIDR on a VPN gateway connection
    ///
    /// Sends a `PUT` request to `/vpn_gateways/{vpn_gateway_id}/connections/{id}/local_cidrs/{cidr_prefix}/{prefix_length}`
    pub fn add_vpn_gateway_connection_local_cidr(&self) -> AddVpnGatewayConnectionLocalCidr<'_> {
        AddVpnGatewayConnectionLocalCidr::new(self)
    }

    /// List all peer CIDRs for a VPN gateway connection
    ///
    /// Sends a `GET` request to `/vpn_gateways/{vpn_gateway_id}/connections/{id}/peer_cidrs`
    pub fn list_vpn_gateway_connection_peer_cidrs(&self) -> ListVpnGatewayConnectionPeerCidrs<'_> {
        ListVpnGatewayConnectionPeerCidrs::new(self)
    }

    /// Remove a peer CIDR from a VPN gateway connection
    ///
    /// Sends a `DELETE` request to `/vpn_gateways/{vpn_gateway_id}/connections/{id}/peer_cidrs/{cidr_prefix}/{prefix_length}`
    pub fn remove_vpn_gateway_connection_peer_cidr(
        &self,
    ) -> RemoveVpnGatewayConnectionPeerCidr<'_> {
        RemoveVpnGatewayConnectionPeerCidr::new(self)
    }

    /// Check if the specified peer CIDR exists on a VPN gateway connection
    ///
    /// Sends a `GET` request to `/vpn_gateways/{vpn_gateway_id}/connections/{id}/peer_cidrs/{cidr_prefix}/{prefix_length}`
    pub fn check_vpn_gateway_connection_peer_cidr(&self) -> CheckVpnGatewayConnectionPeerCidr<'_> {
        CheckVpnGatewayConnectionPeerCidr::new(self)
    }

    /// Set a peer CIDR on a VPN gateway connection
    ///
    /// Sends a `PUT` request to `/vpn_gateways/{vpn_gateway_id}/connections/{id}/peer_cidrs/{cidr_prefix}/{prefix_length}`
    pub fn add_vpn_gateway_connection_peer_cidr(&self) -> AddVpnGatewayConnectionPeerCidr<'_> {
        AddVpnGatewayConnectionPeerCidr::new(self)
    }
}

/// Builder for [`Client::list_vpn_gateways`]
#[derive(Debug, Clone)]
pub struct ListVpnGateways<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
    resource_group_id: Option<String>,
    mode: Option<VpnGatewayMode>,
}

impl<'a> ListVpnGateways<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            start: None,
            limit: None,
            resource_group_id: None,
            mode: None,
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

    pub fn mode(mut self, value: VpnGatewayMode) -> Self {
        self.mode = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VpnGatewayCollection>> {
        Operation::new(self.client, "list_vpn_gateways", Method::GET, "/vpn_gateways")
            .query("start", self.start)
            .query("limit", self.limit)
            .query("resource_group.id", self.resource_group_id)
            .query("mode", self.mode)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_vpn_gateway`]
#[derive(Debug, Clone)]
pub struct CreateVpnGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: Option<VpnGatewayPrototype>,
}

impl<'a> CreateVpnGateway<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn body(mut self, value: VpnGatewayPrototype) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VpnGateway>> {
        Operation::new(self.client, "create_vpn_gateway", Method::POST, "/vpn_gateways")
            .required_json("body", self.body.as_ref())
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_vpn_gateway`]
#[derive(Debug, Clone)]
pub struct DeleteVpnGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteVpnGateway<'a> {
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
        Operation::new(self.client, "delete_vpn_gateway", Method::DELETE, "/vpn_gateways/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send_empty()
            .await
    }
}

/// Builder for [`Client::get_vpn_gateway`]
#[derive(Debug, Clone)]
pub struct GetVpnGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetVpnGateway<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<VpnGateway>> {
        Operation::new(self.client, "get_vpn_gateway", Method::GET, "/vpn_gateways/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_vpn_gateway`]
#[derive(Debug, Clone)]
pub struct UpdateVpnGateway<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: VpnGatewayPatch,
}

impl<'a> UpdateVpnGateway<'a> {
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
    pub fn body(mut self, value: VpnGatewayPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VpnGateway>> {
        Operation::new(self.client, "update_vpn_gateway", Method::PATCH, "/vpn_gateways/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::list_vpn_gateway_connections`]
#[derive(Debug, Clone)]
pub struct ListVpnGatewayConnections<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpn_gateway_id: Option<String>,
    status: Option<VpnGatewayConnectionStatus>,
}

impl<'a> ListVpnGatewayConnections<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpn_gateway_id: None,
            status: None,
        }
    }

    pub fn vpn_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(value.into());
        self
    }

    pub fn status(mut self, value: VpnGatewayConnectionStatus) -> Self {
        self.status = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VpnGatewayConnectionCollection>> {
        Operation::new(
            self.client,
            "list_vpn_gateway_connections",
            Method::GET,
            "/vpn_gateways/{vpn_gateway_id}/connections",
        )
        .path("vpn_gateway_id", self.vpn_gateway_id)
        .query("status", self.status)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_vpn_gateway_connection`]
#[derive(Debug, Clone)]
pub struct CreateVpnGatewayConnection<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpn_gateway_id: Option<String>,
    body: VpnGatewayConnectionPrototype,
}

impl<'a> CreateVpnGatewayConnection<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpn_gateway_id: None,
            body: Default::default(),
        }
    }

    pub fn vpn_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(value.into());
        self
    }

    pub fn admin_state_up(mut self, value: bool) -> Self {
        self.body.admin_state_up = Some(value);
        self
    }

    pub fn dead_peer_detection(mut self, value: DeadPeerDetection) -> Self {
        self.body.dead_peer_detection = Some(value);
        self
    }

    pub fn ike_policy(mut self, value: Identity) -> Self {
        self.body.ike_policy = Some(value);
        self
    }

    pub fn ipsec_policy(mut self, value: Identity) -> Self {
        self.body.ipsec_policy = Some(value);
        self
    }

    pub fn local_cidrs(mut self, value: Vec<String>) -> Self {
        self.body.local_cidrs = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn peer_address(mut self, value: impl Into<String>) -> Self {
        self.body.peer_address = Some(value.into());
        self
    }

    pub fn peer_cidrs(mut self, value: Vec<String>) -> Self {
        self.body.peer_cidrs = Some(value);
        self
    }

    pub fn psk(mut self, value: impl Into<String>) -> Self {
        self.body.psk = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: VpnGatewayConnectionPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VpnGatewayConnection>> {
        Operation::new(
            self.client,
            "create_vpn_gateway_connection",
            Method::POST,
            "/vpn_gateways/{vpn_gateway_id}/connections",
        )
        .path("vpn_gateway_id", self.vpn_gateway_id)
        .require("peer_address", self.body.peer_address.is_some())
        .require("psk", self.body.psk.is_some())
        .json(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_vpn_gateway_connection`]
#[derive(Debug, Clone)]
pub struct DeleteVpnGatewayConnection<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpn_gateway_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteVpnGatewayConnection<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpn_gateway_id: None,
            id: None,
        }
    }

    pub fn vpn_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_vpn_gateway_connection",
            Method::DELETE,
            "/vpn_gateways/{vpn_gateway_id}/connections/{id}",
        )
        .path("vpn_gateway_id", self.vpn_gateway_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_vpn_gateway_connection`]
#[derive(Debug, Clone)]
pub struct GetVpnGatewayConnection<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpn_gateway_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetVpnGatewayConnection<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpn_gateway_id: None,
            id: None,
        }
    }

    pub fn vpn_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VpnGatewayConnection>> {
        Operation::new(
            self.client,
            "get_vpn_gateway_connection",
            Method::GET,
            "/vpn_gateways/{vpn_gateway_id}/connections/{id}",
        )
        .path("vpn_gateway_id", self.vpn_gateway_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_vpn_gateway_connection`]
#[derive(Debug, Clone)]
pub struct UpdateVpnGatewayConnection<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpn_gateway_id: Option<String>,
    id: Option<String>,
    body: VpnGatewayConnectionPatch,
}

impl<'a> UpdateVpnGatewayConnection<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpn_gateway_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn vpn_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn admin_state_up(mut self, value: bool) -> Self {
        self.body.admin_state_up = Some(value);
        self
    }

    pub fn dead_peer_detection(mut self, value: DeadPeerDetection) -> Self {
        self.body.dead_peer_detection = Some(value);
        self
    }

    pub fn ike_policy(mut self, value: Identity) -> Self {
        self.body.ike_policy = Some(value);
        self
    }

    pub fn ipsec_policy(mut self, value: Identity) -> Self {
        self.body.ipsec_policy = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn peer_address(mut self, value: impl Into<String>) -> Self {
        self.body.peer_address = Some(value.into());
        self
    }

    pub fn psk(mut self, value: impl Into<String>) -> Self {
        self.body.psk = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: VpnGatewayConnectionPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VpnGatewayConnection>> {
        Operation::new(
            self.client,
            "update_vpn_gateway_connection",
            Method::PATCH,
            "/vpn_gateways/{vpn_gateway_id}/connections/{id}",
        )
        .path("vpn_gateway_id", self.vpn_gateway_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_vpn_gateway_connection_local_cidrs`]
#[derive(Debug, Clone)]
pub struct ListVpnGatewayConnectionLocalCidrs<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpn_gateway_id: Option<String>,
    id: Option<String>,
}

impl<'a> ListVpnGatewayConnectionLocalCidrs<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpn_gateway_id: None,
            id: None,
        }
    }

    pub fn vpn_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VpnGatewayConnectionLocalCidrs>> {
        Operation::new(
            self.client,
            "list_vpn_gateway_connection_local_cidrs",
            Method::GET,
            "/vpn_gateways/{vpn_gateway_id}/connections/{id}/local_cidrs",
        )
        .path("vpn_gateway_id", self.vpn_gateway_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::remove_vpn_gateway_connection_local_cidr`]
#[derive(Debug, Clone)]
pub struct RemoveVpnGatewayConnectionLocalCidr<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpn_gateway_id: Option<String>,
    id: Option<String>,
    cidr_prefix: Option<String>,
    prefix_length: Option<String>,
}

impl<'a> RemoveVpnGatewayConnectionLocalCidr<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpn_gateway_id: None,
            id: None,
            cidr_prefix: None,
            prefix_length: None,
        }
    }

    pub fn vpn_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn cidr_prefix(mut self, value: impl Into<String>) -> Self {
        self.cidr_prefix = Some(value.into());
        self
    }

    pub fn prefix_length(mut self, value: impl Into<String>) -> Self {
        self.prefix_length = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "remove_vpn_gateway_connection_local_cidr",
            Method::DELETE,
            "/vpn_gateways/{vpn_gateway_id}/connections/{id}/local_cidrs/{cidr_prefix}/{prefix_length}",
        )
        .path("vpn_gateway_id", self.vpn_gateway_id)
        .path("id", self.id)
        .path("cidr_prefix", self.cidr_prefix)
        .path("prefix_length", self.prefix_length)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::check_vpn_gateway_connection_local_cidr`]
#[derive(Debug, Clone)]
pub struct CheckVpnGatewayConnectionLocalCidr<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpn_gateway_id: Option<String>,
    id: Option<String>,
    cidr_prefix: Option<String>,
    prefix_length: Option<String>,
}

impl<'a> CheckVpnGatewayConnectionLocalCidr<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpn_gateway_id: None,
            id: None,
            cidr_prefix: None,
            prefix_length: None,
        }
    }

    pub fn vpn_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn cidr_prefix(mut self, value: impl Into<String>) -> Self {
        self.cidr_prefix = Some(value.into());
        self
    }

    pub fn prefix_length(mut self, value: impl Into<String>) -> Self {
        self.prefix_length = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "check_vpn_gateway_connection_local_cidr",
            Method::GET,
            "/vpn_gateways/{vpn_gateway_id}/connections/{id}/local_cidrs/{cidr_prefix}/{prefix_length}",
        )
        .path("vpn_gateway_id", self.vpn_gateway_id)
        .path("id", self.id)
        .path("cidr_prefix", self.cidr_prefix)
        .path("prefix_length", self.prefix_length)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::add_vpn_gateway_connection_local_cidr`]
#[derive(Debug, Clone)]
pub struct AddVpnGatewayConnectionLocalCidr<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpn_gateway_id: Option<String>,
    id: Option<String>,
    cidr_prefix: Option<String>,
    prefix_length: Option<String>,
}

impl<'a> AddVpnGatewayConnectionLocalCidr<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpn_gateway_id: None,
            id: None,
            cidr_prefix: None,
            prefix_length: None,
        }
    }

    pub fn vpn_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn cidr_prefix(mut self, value: impl Into<String>) -> Self {
        self.cidr_prefix = Some(value.into());
        self
    }

    pub fn prefix_length(mut self, value: impl Into<String>) -> Self {
        self.prefix_length = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "add_vpn_gateway_connection_local_cidr",
            Method::PUT,
            "/vpn_gateways/{vpn_gateway_id}/connections/{id}/local_cidrs/{cidr_prefix}/{prefix_length}",
        )
        .path("vpn_gateway_id", self.vpn_gateway_id)
        .path("id", self.id)
        .path("cidr_prefix", self.cidr_prefix)
        .path("prefix_length", self.prefix_length)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::list_vpn_gateway_connection_peer_cidrs`]
#[derive(Debug, Clone)]
pub struct ListVpnGatewayConnectionPeerCidrs<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpn_gateway_id: Option<String>,
    id: Option<String>,
}

impl<'a> ListVpnGatewayConnectionPeerCidrs<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpn_gateway_id: None,
            id: None,
        }
    }

    pub fn vpn_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<VpnGatewayConnectionPeerCidrs>> {
        Operation::new(
            self.client,
            "list_vpn_gateway_connection_peer_cidrs",
            Method::GET,
            "/vpn_gateways/{vpn_gateway_id}/connections/{id}/peer_cidrs",
        )
        .path("vpn_gateway_id", self.vpn_gateway_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::remove_vpn_gateway_connection_peer_cidr`]
#[derive(Debug, Clone)]
pub struct RemoveVpnGatewayConnectionPeerCidr<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpn_gateway_id: Option<String>,
    id: Option<String>,
    cidr_prefix: Option<String>,
    prefix_length: Option<String>,
}

impl<'a> RemoveVpnGatewayConnectionPeerCidr<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpn_gateway_id: None,
            id: None,
            cidr_prefix: None,
            prefix_length: None,
        }
    }

    pub fn vpn_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn cidr_prefix(mut self, value: impl Into<String>) -> Self {
        self.cidr_prefix = Some(value.into());
        self
    }

    pub fn prefix_length(mut self, value: impl Into<String>) -> Self {
        self.prefix_length = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "remove_vpn_gateway_connection_peer_cidr",
            Method::DELETE,
            "/vpn_gateways/{vpn_gateway_id}/connections/{id}/peer_cidrs/{cidr_prefix}/{prefix_length}",
        )
        .path("vpn_gateway_id", self.vpn_gateway_id)
        .path("id", self.id)
        .path("cidr_prefix", self.cidr_prefix)
        .path("prefix_length", self.prefix_length)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::check_vpn_gateway_connection_peer_cidr`]
#[derive(Debug, Clone)]
pub struct CheckVpnGatewayConnectionPeerCidr<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpn_gateway_id: Option<String>,
    id: Option<String>,
    cidr_prefix: Option<String>,
    prefix_length: Option<String>,
}

impl<'a> CheckVpnGatewayConnectionPeerCidr<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpn_gateway_id: None,
            id: None,
            cidr_prefix: None,
            prefix_length: None,
        }
    }

    pub fn vpn_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn cidr_prefix(mut self, value: impl Into<String>) -> Self {
        self.cidr_prefix = Some(value.into());
        self
    }

    pub fn prefix_length(mut self, value: impl Into<String>) -> Self {
        self.prefix_length = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "check_vpn_gateway_connection_peer_cidr",
            Method::GET,
            "/vpn_gateways/{vpn_gateway_id}/connections/{id}/peer_cidrs/{cidr_prefix}/{prefix_length}",
        )
        .path("vpn_gateway_id", self.vpn_gateway_id)
        .path("id", self.id)
        .path("cidr_prefix", self.cidr_prefix)
        .path("prefix_length", self.prefix_length)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::add_vpn_gateway_connection_peer_cidr`]
#[derive(Debug, Clone)]
pub struct AddVpnGatewayConnectionPeerCidr<'a> {
    client: &'a Client,
    headers: HeaderMap,
    vpn_gateway_id: Option<String>,
    id: Option<String>,
    cidr_prefix: Option<String>,
    prefix_length: Option<String>,
}

impl<'a> AddVpnGatewayConnectionPeerCidr<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            vpn_gateway_id: None,
            id: None,
            cidr_prefix: None,
            prefix_length: None,
        }
    }

    pub fn vpn_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn cidr_prefix(mut self, value: impl Into<String>) -> Self {
        self.cidr_prefix = Some(value.into());
        self
    }

    pub fn prefix_length(mut self, value: impl Into<String>) -> Self {
        self.prefix_length = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "add_vpn_gateway_connection_peer_cidr",
            Method::PUT,
            "/vpn_gateways/{vpn_gateway_id}/connections/{id}/peer_cidrs/{cidr_prefix}/{prefix_length}",
        )
        .path("vpn_gateway_id", self.vpn_gateway_id)
        .path("id", self.id)
        .path("cidr_prefix", self.cidr_prefix)
        .path("prefix_length", self.prefix_length)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

request_headers! {
    ListVpnGateways,
    CreateVpnGateway,
    DeleteVpnGateway,
    GetVpnGateway,
    UpdateVpnGateway,
    ListVpnGatewayConnections,
    CreateVpnGatewayConnection,
    DeleteVpnGatewayConnection,
    GetVpnGatewayConnection,
    UpdateVpnGatewayConnection,
    ListVpnGatewayConnectionLocalCidrs,
    RemoveVpnGatewayConnectionLocalCidr,
    CheckVpnGatewayConnectionLocalCidr,
    AddVpnGatewayConnectionLocalCidr,
    ListVpnGatewayConnectionPeerCidrs,
    RemoveVpnGatewayConnectionPeerCidr,
    CheckVpnGatewayConnectionPeerCidr,
    AddVpnGatewayConnectionPeerCidr,
}
