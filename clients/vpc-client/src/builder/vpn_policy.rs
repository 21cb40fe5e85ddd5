// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! IKE and IPsec policies

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    AuthenticationAlgorithm, EncryptionAlgorithm, IkePolicy, IkePolicyCollection, IkePolicyPatch,
    IkePolicyPrototype, IpsecPolicy, IpsecPolicyCollection, IpsecPolicyPatch, IpsecPolicyPrototype,
    Pfs, ResourceGroupIdentity, VpnGatewayConnectionCollection,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all IKE policies
    ///
    /// Sends a `GET` request to `/ike_policies`
    ///
    /// ```ignore
    /// let response = client.list_ike_policies()
    ///    .start(start)
    ///    .limit(limit)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_ike_policies(&self) -> ListIkePolicies<'_> {
        ListIkePolicies::new(self)
    }

    /// Create an IKE policy
    ///
    /// Sends a `POST` request to `/ike_policies`
    ///
    /// ```ignore
    /// let response = client.create_ike_policy()
    ///    .authentication_algorithm(authentication_algorithm)
    ///    .dh_group(dh_group)
    ///    .encryption_algorithm(encryption_algorithm)
    ///    .ike_version(ike_version)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_ike_policy(&self) -> CreateIkePolicy<'_> {
        CreateIkePolicy::new(self)
    }

    /// Delete an IKE policy
    ///
    /// Sends a `DELETE` request to `/ike_policies/{id}`
    pub fn delete_ike_policy(&self) -> DeleteIkePolicy<'_> {
        DeleteIkePolicy::new(self)
    }

    /// Retrieve an IKE policy
    ///
    /// Sends a `GET` request to `/ike_policies/{id}`
    pub fn get_ike_policy(&self) -> GetIkePolicy<'_> {
        GetIkePolicy::new(self)
    }

    /// Update an IKE policy
    ///
    /// Sends a `PATCH` request to `/ike_policies/{id}`
    ///
    /// ```ignore
    /// let response = client.update_ike_policy()
    ///    .id(id)
    ///    .authentication_algorithm(authentication_algorithm)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_ike_policy(&self) -> UpdateIkePolicy<'_> {
        UpdateIkePolicy::new(self)
    }

    /// List all VPN gateway connections that use a specified IKE policy
    ///
    /// Sends a `GET` request to `/ike_policies/{id}/connections`
    pub fn list_ike_policy_connections(&self) -> ListIkePolicyConnections<'_> {
        ListIkePolicyConnections::new(self)
    }

    /// List all IPsec policies
    ///
    /// Sends a `GET` request to `/ipsec_policies`
    ///
    /// ```ignore
    /// let response = client.list_ipsec_policies()
    ///    .start(start)
    ///    .limit(limit)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_ipsec_policies(&self) -> ListIpsecPolicies<'_> {
        ListIpsecPolicies::new(self)
    }

    /// Create an IPsec policy
    ///
    /// Sends a `POST` request to `/ipsec_policies`
    ///
    /// ```ignore
    /// let response = client.create_ipsec_policy()
    ///    .authentication_algorithm(authentication_algorithm)
    ///    .encryption_algorithm(encryption_algorithm)
    ///    .pfs(pfs)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_ipsec_policy(&self) -> CreateIpsecPolicy<'_> {
        CreateIpsecPolicy::new(self)
    }

    /// Delete an IPsec policy
    ///
    /// Sends a `DELETE` request to `/ipsec_policies/{id}`
    pub fn delete_ipsec_policy(&self) -> DeleteIpsecPolicy<'_> {
        DeleteIpsecPolicy::new(self)
    }

    /// Retrieve an IPsec policy
    ///
    /// Sends a `GET` request to `/ipsec_policies/{id}`
    pub fn get_ipsec_policy(&self) -> GetIpsecPolicy<'_> {
        GetIpsecPolicy::new(self)
    }

    /// Update an IPsec policy
    ///
    /// Sends a `PATCH` request to `/ipsec_policies/{id}`
    ///
    /// ```ignore
    /// let response = client.update_ipsec_policy()
    ///    .id(id)
    ///    .authentication_algorithm(authentication_algorithm)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_ipsec_policy(&self) -> UpdateIpsecPolicy<'_> {
        UpdateIpsecPolicy::new(self)
    }

    /// List all VPN gateway connections that use a specified IPsec policy
    ///
    /// Sends a `GET` request to `/ipsec_policies/{id}/connections`
    pub fn list_ipsec_policy_connections(&self) -> ListIpsecPolicyConnections<'_> {
        ListIpsecPolicyConnections::new(self)
    }
}

/// Builder for [`Client::list_ike_policies`]
#[derive(Debug, Clone)]
pub struct ListIkePolicies<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
}

impl<'a> ListIkePolicies<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<IkePolicyCollection>> {
        Operation::new(self.client, "list_ike_policies", Method::GET, "/ike_policies")
            .query("start", self.start)
            .query("limit", self.limit)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_ike_policy`]
#[derive(Debug, Clone)]
pub struct CreateIkePolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: IkePolicyPrototype,
}

impl<'a> CreateIkePolicy<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: Default::default(),
        }
    }

    pub fn authentication_algorithm(mut self, value: AuthenticationAlgorithm) -> Self {
        self.body.authentication_algorithm = Some(value);
        self
    }

    pub fn dh_group(mut self, value: u8) -> Self {
        self.body.dh_group = Some(value);
        self
    }

    pub fn encryption_algorithm(mut self, value: EncryptionAlgorithm) -> Self {
        self.body.encryption_algorithm = Some(value);
        self
    }

    pub fn ike_version(mut self, value: u8) -> Self {
        self.body.ike_version = Some(value);
        self
    }

    pub fn key_lifetime(mut self, value: u32) -> Self {
        self.body.key_lifetime = Some(value);
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
    pub fn body(mut self, value: IkePolicyPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<IkePolicy>> {
        Operation::new(self.client, "create_ike_policy", Method::POST, "/ike_policies")
            .require("authentication_algorithm", self.body.authentication_algorithm.is_some())
            .require("dh_group", self.body.dh_group.is_some())
            .require("encryption_algorithm", self.body.encryption_algorithm.is_some())
            .require("ike_version", self.body.ike_version.is_some())
            .json(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_ike_policy`]
#[derive(Debug, Clone)]
pub struct DeleteIkePolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteIkePolicy<'a> {
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
        Operation::new(self.client, "delete_ike_policy", Method::DELETE, "/ike_policies/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send_empty()
            .await
    }
}

/// Builder for [`Client::get_ike_policy`]
#[derive(Debug, Clone)]
pub struct GetIkePolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetIkePolicy<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<IkePolicy>> {
        Operation::new(self.client, "get_ike_policy", Method::GET, "/ike_policies/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_ike_policy`]
#[derive(Debug, Clone)]
pub struct UpdateIkePolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: IkePolicyPatch,
}

impl<'a> UpdateIkePolicy<'a> {
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

    pub fn authentication_algorithm(mut self, value: AuthenticationAlgorithm) -> Self {
        self.body.authentication_algorithm = Some(value);
        self
    }

    pub fn dh_group(mut self, value: u8) -> Self {
        self.body.dh_group = Some(value);
        self
    }

    pub fn encryption_algorithm(mut self, value: EncryptionAlgorithm) -> Self {
        self.body.encryption_algorithm = Some(value);
        self
    }

    pub fn ike_version(mut self, value: u8) -> Self {
        self.body.ike_version = Some(value);
        self
    }

    pub fn key_lifetime(mut self, value: u32) -> Self {
        self.body.key_lifetime = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: IkePolicyPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<IkePolicy>> {
        Operation::new(self.client, "update_ike_policy", Method::PATCH, "/ike_policies/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::list_ike_policy_connections`]
#[derive(Debug, Clone)]
pub struct ListIkePolicyConnections<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> ListIkePolicyConnections<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<VpnGatewayConnectionCollection>> {
        Operation::new(
            self.client,
            "list_ike_policy_connections",
            Method::GET,
            "/ike_policies/{id}/connections",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::list_ipsec_policies`]
#[derive(Debug, Clone)]
pub struct ListIpsecPolicies<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
}

impl<'a> ListIpsecPolicies<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<IpsecPolicyCollection>> {
        Operation::new(self.client, "list_ipsec_policies", Method::GET, "/ipsec_policies")
            .query("start", self.start)
            .query("limit", self.limit)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_ipsec_policy`]
#[derive(Debug, Clone)]
pub struct CreateIpsecPolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: IpsecPolicyPrototype,
}

impl<'a> CreateIpsecPolicy<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: Default::default(),
        }
    }

    pub fn authentication_algorithm(mut self, value: AuthenticationAlgorithm) -> Self {
        self.body.authentication_algorithm = Some(value);
        self
    }

    pub fn encryption_algorithm(mut self, value: EncryptionAlgorithm) -> Self {
        self.body.encryption_algorithm = Some(value);
        self
    }

    pub fn key_lifetime(mut self, value: u32) -> Self {
        self.body.key_lifetime = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn pfs(mut self, value: Pfs) -> Self {
        self.body.pfs = Some(value);
        self
    }

    pub fn resource_group(mut self, value: ResourceGroupIdentity) -> Self {
        self.body.resource_group = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: IpsecPolicyPrototype) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<IpsecPolicy>> {
        Operation::new(self.client, "create_ipsec_policy", Method::POST, "/ipsec_policies")
            .require("authentication_algorithm", self.body.authentication_algorithm.is_some())
            .require("encryption_algorithm", self.body.encryption_algorithm.is_some())
            .require("pfs", self.body.pfs.is_some())
            .json(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_ipsec_policy`]
#[derive(Debug, Clone)]
pub struct DeleteIpsecPolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteIpsecPolicy<'a> {
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
        Operation::new(self.client, "delete_ipsec_policy", Method::DELETE, "/ipsec_policies/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send_empty()
            .await
    }
}

/// Builder for [`Client::get_ipsec_policy`]
#[derive(Debug, Clone)]
pub struct GetIpsecPolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetIpsecPolicy<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<IpsecPolicy>> {
        Operation::new(self.client, "get_ipsec_policy", Method::GET, "/ipsec_policies/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_ipsec_policy`]
#[derive(Debug, Clone)]
pub struct UpdateIpsecPolicy<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: IpsecPolicyPatch,
}

impl<'a> UpdateIpsecPolicy<'a> {
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

    pub fn authentication_algorithm(mut self, value: AuthenticationAlgorithm) -> Self {
        self.body.authentication_algorithm = Some(value);
        self
    }

    pub fn encryption_algorithm(mut self, value: EncryptionAlgorithm) -> Self {
        self.body.encryption_algorithm = Some(value);
        self
    }

    pub fn key_lifetime(mut self, value: u32) -> Self {
        self.body.key_lifetime = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.body.name = Some(value.into());
        self
    }

    pub fn pfs(mut self, value: Pfs) -> Self {
        self.body.pfs = Some(value);
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: IpsecPolicyPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<IpsecPolicy>> {
        Operation::new(self.client, "update_ipsec_policy", Method::PATCH, "/ipsec_policies/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::list_ipsec_policy_connections`]
#[derive(Debug, Clone)]
pub struct ListIpsecPolicyConnections<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> ListIpsecPolicyConnections<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<VpnGatewayConnectionCollection>> {
        Operation::new(
            self.client,
            "list_ipsec_policy_connections",
            Method::GET,
            "/ipsec_policies/{id}/connections",
        )
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

request_headers! {
    ListIkePolicies,
    CreateIkePolicy,
    DeleteIkePolicy,
    GetIkePolicy,
    UpdateIkePolicy,
    ListIkePolicyConnections,
    ListIpsecPolicies,
    CreateIpsecPolicy,
    DeleteIpsecPolicy,
    GetIpsecPolicy,
    UpdateIpsecPolicy,
    ListIpsecPolicyConnections,
}
