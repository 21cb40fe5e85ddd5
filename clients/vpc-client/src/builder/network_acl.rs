// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network ACLs and rules

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::operation::Operation;
use crate::types::{
    Direction, NetworkAcl, NetworkAclCollection, NetworkAclPatch, NetworkAclPrototype,
    NetworkAclRule, NetworkAclRuleCollection, NetworkAclRulePatch, NetworkAclRulePrototype,
};
use crate::{Client, ResponseValue, Result};

impl Client {
    /// List all network ACLs
    ///
    /// Sends a `GET` request to `/network_acls`
    ///
    /// ```ignore
    /// let response = client.list_network_acls()
    ///    .start(start)
    ///    .limit(limit)
    ///    .resource_group_id(resource_group_id)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_network_acls(&self) -> ListNetworkAcls<'_> {
        ListNetworkAcls::new(self)
    }

    /// Create a network ACL
    ///
    /// Sends a `POST` request to `/network_acls`
    ///
    /// ```ignore
    /// let response = client.create_network_acl()
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_network_acl(&self) -> CreateNetworkAcl<'_> {
        CreateNetworkAcl::new(self)
    }

    /// Delete a network ACL
    ///
    /// Sends a `DELETE` request to `/network_acls/{id}`
    pub fn delete_network_acl(&self) -> DeleteNetworkAcl<'_> {
        DeleteNetworkAcl::new(self)
    }

    /// Retrieve a network ACL
    ///
    /// Sends a `GET` request to `/network_acls/{id}`
    pub fn get_network_acl(&self) -> GetNetworkAcl<'_> {
        GetNetworkAcl::new(self)
    }

    /// Update a network ACL
    ///
    /// Sends a `PATCH` request to `/network_acls/{id}`
    ///
    /// ```ignore
    /// let response = client.update_network_acl()
    ///    .id(id)
    ///    .name(name)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_network_acl(&self) -> UpdateNetworkAcl<'_> {
        UpdateNetworkAcl::new(self)
    }

    /// List all rules for a network ACL
    ///
    /// Sends a `GET` request to `/network_acls/{network_acl_id}/rules`
    ///
    /// ```ignore
    /// let response = client.list_network_acl_rules()
    ///    .network_acl_id(network_acl_id)
    ///    .start(start)
    ///    .limit(limit)
    ///    .direction(direction)
    ///    .send()
    ///    .await;
    /// ```
    pub fn list_network_acl_rules(&self) -> ListNetworkAclRules<'_> {
        ListNetworkAclRules::new(self)
    }

    /// Create a rule for a network ACL
    ///
    /// Sends a `POST` request to `/network_acls/{network_acl_id}/rules`
    ///
    /// ```ignore
    /// let response = client.create_network_acl_rule()
    ///    .network_acl_id(network_acl_id)
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn create_network_acl_rule(&self) -> CreateNetworkAclRule<'_> {
        CreateNetworkAclRule::new(self)
    }

    /// Delete a network ACL rule
    ///
    /// Sends a `DELETE` request to `/network_acls/{network_acl_id}/rules/{id}`
    pub fn delete_network_acl_rule(&self) -> DeleteNetworkAclRule<'_> {
        DeleteNetworkAclRule::new(self)
    }

    /// Retrieve a network ACL rule
    ///
    /// Sends a `GET` request to `/network_acls/{network_acl_id}/rules/{id}`
    pub fn get_network_acl_rule(&self) -> GetNetworkAclRule<'_> {
        GetNetworkAclRule::new(self)
    }

    /// Update a network ACL rule
    ///
    /// Sends a `PATCH` request to `/network_acls/{network_acl_id}/rules/{id}`
    ///
    /// ```ignore
    /// let response = client.update_network_acl_rule()
    ///    .network_acl_id(network_acl_id)
    ///    .id(id)
    ///    .body(body)
    ///    .send()
    ///    .await;
    /// ```
    pub fn update_network_acl_rule(&self) -> UpdateNetworkAclRule<'_> {
        UpdateNetworkAclRule::new(self)
    }
}

/// Builder for [`Client::list_network_acls`]
#[derive(Debug, Clone)]
pub struct ListNetworkAcls<'a> {
    client: &'a Client,
    headers: HeaderMap,
    start: Option<String>,
    limit: Option<u32>,
    resource_group_id: Option<String>,
}

impl<'a> ListNetworkAcls<'a> {
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

    pub async fn send(self) -> Result<ResponseValue<NetworkAclCollection>> {
        Operation::new(self.client, "list_network_acls", Method::GET, "/network_acls")
            .query("start", self.start)
            .query("limit", self.limit)
            .query("resource_group.id", self.resource_group_id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::create_network_acl`]
#[derive(Debug, Clone)]
pub struct CreateNetworkAcl<'a> {
    client: &'a Client,
    headers: HeaderMap,
    body: Option<NetworkAclPrototype>,
}

impl<'a> CreateNetworkAcl<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn body(mut self, value: NetworkAclPrototype) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkAcl>> {
        Operation::new(self.client, "create_network_acl", Method::POST, "/network_acls")
            .optional_json(self.body.as_ref())
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::delete_network_acl`]
#[derive(Debug, Clone)]
pub struct DeleteNetworkAcl<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> DeleteNetworkAcl<'a> {
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
        Operation::new(self.client, "delete_network_acl", Method::DELETE, "/network_acls/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send_empty()
            .await
    }
}

/// Builder for [`Client::get_network_acl`]
#[derive(Debug, Clone)]
pub struct GetNetworkAcl<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
}

impl<'a> GetNetworkAcl<'a> {
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
        Operation::new(self.client, "get_network_acl", Method::GET, "/network_acls/{id}")
            .path("id", self.id)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::update_network_acl`]
#[derive(Debug, Clone)]
pub struct UpdateNetworkAcl<'a> {
    client: &'a Client,
    headers: HeaderMap,
    id: Option<String>,
    body: NetworkAclPatch,
}

impl<'a> UpdateNetworkAcl<'a> {
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
    pub fn body(mut self, value: NetworkAclPatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkAcl>> {
        Operation::new(self.client, "update_network_acl", Method::PATCH, "/network_acls/{id}")
            .path("id", self.id)
            .merge_patch(&self.body)
            .headers(self.headers)
            .send()
            .await
    }
}

/// Builder for [`Client::list_network_acl_rules`]
#[derive(Debug, Clone)]
pub struct ListNetworkAclRules<'a> {
    client: &'a Client,
    headers: HeaderMap,
    network_acl_id: Option<String>,
    start: Option<String>,
    limit: Option<u32>,
    direction: Option<Direction>,
}

impl<'a> ListNetworkAclRules<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            network_acl_id: None,
            start: None,
            limit: None,
            direction: None,
        }
    }

    pub fn network_acl_id(mut self, value: impl Into<String>) -> Self {
        self.network_acl_id = Some(value.into());
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

    pub fn direction(mut self, value: Direction) -> Self {
        self.direction = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkAclRuleCollection>> {
        Operation::new(
            self.client,
            "list_network_acl_rules",
            Method::GET,
            "/network_acls/{network_acl_id}/rules",
        )
        .path("network_acl_id", self.network_acl_id)
        .query("start", self.start)
        .query("limit", self.limit)
        .query("direction", self.direction)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::create_network_acl_rule`]
#[derive(Debug, Clone)]
pub struct CreateNetworkAclRule<'a> {
    client: &'a Client,
    headers: HeaderMap,
    network_acl_id: Option<String>,
    body: Option<NetworkAclRulePrototype>,
}

impl<'a> CreateNetworkAclRule<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            network_acl_id: None,
            body: None,
        }
    }

    pub fn network_acl_id(mut self, value: impl Into<String>) -> Self {
        self.network_acl_id = Some(value.into());
        self
    }

    pub fn body(mut self, value: NetworkAclRulePrototype) -> Self {
        self.body = Some(value);
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkAclRule>> {
        Operation::new(
            self.client,
            "create_network_acl_rule",
            Method::POST,
            "/network_acls/{network_acl_id}/rules",
        )
        .path("network_acl_id", self.network_acl_id)
        .required_json("body", self.body.as_ref())
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::delete_network_acl_rule`]
#[derive(Debug, Clone)]
pub struct DeleteNetworkAclRule<'a> {
    client: &'a Client,
    headers: HeaderMap,
    network_acl_id: Option<String>,
    id: Option<String>,
}

impl<'a> DeleteNetworkAclRule<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            network_acl_id: None,
            id: None,
        }
    }

    pub fn network_acl_id(mut self, value: impl Into<String>) -> Self {
        self.network_acl_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<()>> {
        Operation::new(
            self.client,
            "delete_network_acl_rule",
            Method::DELETE,
            "/network_acls/{network_acl_id}/rules/{id}",
        )
        .path("network_acl_id", self.network_acl_id)
        .path("id", self.id)
        .headers(self.headers)
        .send_empty()
        .await
    }
}

/// Builder for [`Client::get_network_acl_rule`]
#[derive(Debug, Clone)]
pub struct GetNetworkAclRule<'a> {
    client: &'a Client,
    headers: HeaderMap,
    network_acl_id: Option<String>,
    id: Option<String>,
}

impl<'a> GetNetworkAclRule<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            network_acl_id: None,
            id: None,
        }
    }

    pub fn network_acl_id(mut self, value: impl Into<String>) -> Self {
        self.network_acl_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkAclRule>> {
        Operation::new(
            self.client,
            "get_network_acl_rule",
            Method::GET,
            "/network_acls/{network_acl_id}/rules/{id}",
        )
        .path("network_acl_id", self.network_acl_id)
        .path("id", self.id)
        .headers(self.headers)
        .send()
        .await
    }
}

/// Builder for [`Client::update_network_acl_rule`]
#[derive(Debug, Clone)]
pub struct UpdateNetworkAclRule<'a> {
    client: &'a Client,
    headers: HeaderMap,
    network_acl_id: Option<String>,
    id: Option<String>,
    body: NetworkAclRulePatch,
}

impl<'a> UpdateNetworkAclRule<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
            network_acl_id: None,
            id: None,
            body: Default::default(),
        }
    }

    pub fn network_acl_id(mut self, value: impl Into<String>) -> Self {
        self.network_acl_id = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    /// Replace the whole request body
    pub fn body(mut self, value: NetworkAclRulePatch) -> Self {
        self.body = value;
        self
    }

    pub async fn send(self) -> Result<ResponseValue<NetworkAclRule>> {
        Operation::new(
            self.client,
            "update_network_acl_rule",
            Method::PATCH,
            "/network_acls/{network_acl_id}/rules/{id}",
        )
        .path("network_acl_id", self.network_acl_id)
        .path("id", self.id)
        .merge_patch(&self.body)
        .headers(self.headers)
        .send()
        .await
    }
}

request_headers! {
    ListNetworkAcls,
    CreateNetworkAcl,
    DeleteNetworkAcl,
    GetNetworkAcl,
    UpdateNetworkAcl,
    ListNetworkAclRules,
    CreateNetworkAclRule,
    DeleteNetworkAclRule,
    GetNetworkAclRule,
    UpdateNetworkAclRule,
}
